//! HTTP client for `{LANGFLOW_URL}/api/v1/flows/{FLOW_ID}`.

use super::LangflowError;
use log::{debug, error};
use reqwest::{Client, Method};
use serde_json::Value;
use std::future::Future;

/// Operations on the configured Langflow flow.
pub trait LangflowApi: Send + Sync {
    /// Fetch the flow document.
    fn get_flow(&self) -> impl Future<Output = Result<Value, LangflowError>> + Send;

    /// Send `body` as a partial update of the flow and return the API's answer.
    ///
    /// `None` sends the request without a body.
    fn patch_flow(
        &self,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, LangflowError>> + Send;
}

/// Langflow API client.
#[derive(Debug, Clone)]
pub struct LangflowClient {
    client: Client,
    base_url: String,
    flow_id: String,
    api_key: Option<String>,
}

impl LangflowClient {
    pub fn new(
        base_url: impl Into<String>,
        flow_id: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            flow_id: flow_id.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn flow_url(&self) -> String {
        format!("{}/api/v1/flows/{}", self.base_url, self.flow_id)
    }

    async fn request(&self, method: Method, body: Option<Value>) -> Result<Value, LangflowError> {
        let url = self.flow_url();
        debug!("Langflow {} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        if let Some(body) = body {
            debug!("Request payload: {}", body);
            // A string document is sent as-is rather than re-encoded as a JSON string.
            request = match body {
                Value::String(raw) => request.body(raw),
                other => request.body(serde_json::to_vec(&other)?),
            };
        }

        let response = request.send().await.map_err(|e| {
            error!("Langflow request to {} failed: {}", url, e);
            LangflowError::Unreachable(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            error!("Langflow request to {} returned HTTP {}", url, status.as_u16());
            return Err(LangflowError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(LangflowError::EmptyResponse);
        }
        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Null => Err(LangflowError::EmptyResponse),
            value => Ok(value),
        }
    }
}

impl LangflowApi for LangflowClient {
    async fn get_flow(&self) -> Result<Value, LangflowError> {
        self.request(Method::GET, None).await
    }

    async fn patch_flow(&self, body: Option<Value>) -> Result<Value, LangflowError> {
        self.request(Method::PATCH, body).await
    }
}
