//! Flow table reached through a PostgREST endpoint (as exposed by Supabase).
//!
//! Requests go to `{base_url}/rest/v1/{table}` with the project key sent both
//! as `apikey` and as a bearer token. Writes ask for
//! `Prefer: return=representation` so the affected rows come back in the
//! response, and filters use PostgREST operator syntax (`id=eq.7`,
//! `order=created_at.desc`).

use crate::flow::{FlowRecord, NewFlow};
use crate::storage::{FlowQuery, FlowStore, SortOrder, StoreError};
use log::debug;
use reqwest::{Client, Method, RequestBuilder};

/// PostgREST-backed implementation of [`FlowStore`].
#[derive(Debug, Clone)]
pub struct PostgrestFlowStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl PostgrestFlowStore {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self::with_client(Client::new(), base_url, api_key, table)
    }

    /// Build on top of an existing `reqwest` client (shared connection pool).
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send_for_rows(&self, request: RequestBuilder) -> Result<Vec<FlowRecord>, StoreError> {
        let body = send(request).await?;
        decode_rows(&body)
    }
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, StoreError> {
    let response = request.send().await.map_err(StoreError::transport)?;
    let status = response.status();
    let body = response.bytes().await.map_err(StoreError::transport)?;

    if !status.is_success() {
        return Err(StoreError::from_response(status.as_u16(), &body));
    }
    Ok(body.to_vec())
}

fn decode_rows(body: &[u8]) -> Result<Vec<FlowRecord>, StoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice::<Option<Vec<FlowRecord>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            StoreError::new(format!("Unexpected response from flow table: {}", e))
                .with_code("DECODE")
        })
}

fn id_filter(id: i64) -> (&'static str, String) {
    ("id", format!("eq.{}", id))
}

impl FlowStore for PostgrestFlowStore {
    async fn select(&self, query: FlowQuery) -> Result<Vec<FlowRecord>, StoreError> {
        let mut params: Vec<(&str, String)> = vec![("select", "*".to_string())];
        if let Some(id) = query.id {
            params.push(id_filter(id));
        }
        match query.order {
            Some(SortOrder::CreatedAtAscending) => {
                params.push(("order", "created_at.asc".to_string()))
            }
            Some(SortOrder::CreatedAtDescending) => {
                params.push(("order", "created_at.desc".to_string()))
            }
            None => {}
        }

        debug!("Selecting from '{}' with {:?}", self.table, params);
        self.send_for_rows(self.request(Method::GET).query(&params))
            .await
    }

    async fn insert(&self, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        debug!("Inserting flow '{}' into '{}'", row.flow_name, self.table);
        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&row);
        self.send_for_rows(request).await
    }

    async fn update(&self, id: i64, row: NewFlow) -> Result<Vec<FlowRecord>, StoreError> {
        debug!("Updating flow {} in '{}'", id, self.table);
        let request = self
            .request(Method::PATCH)
            .query(&[id_filter(id)])
            .header("Prefer", "return=representation")
            .json(&row);
        self.send_for_rows(request).await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        debug!("Deleting flow {} from '{}'", id, self.table);
        send(self.request(Method::DELETE).query(&[id_filter(id)])).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const ROWS: &str = r#"[
        {"id": 2, "flow_name": "newer", "flows": "{}", "created_at": "2025-02-01T00:00:00+00:00"},
        {"id": 1, "flow_name": "older", "flows": "{}", "created_at": "2025-01-01T00:00:00+00:00"}
    ]"#;

    #[tokio::test]
    async fn test_select_sends_filters_and_key_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/agent_flows")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "created_at.desc".into()),
            ]))
            .match_header("apikey", "secret")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ROWS)
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        let rows = store
            .select(FlowQuery::all().order_by_created_at(true))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].flow_name, "newer");
    }

    #[tokio::test]
    async fn test_select_by_id_uses_eq_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/agent_flows")
            .match_query(Matcher::UrlEncoded("id".into(), "eq.7".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        let rows = store.select(FlowQuery::by_id(7)).await.unwrap();

        mock.assert_async().await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_ascending_order_param() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/agent_flows")
            .match_query(Matcher::UrlEncoded("order".into(), "created_at.asc".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        store
            .select(FlowQuery::all().order_by_created_at(false))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_insert_asks_for_representation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/agent_flows")
            .match_query(Matcher::Any)
            .match_header("prefer", "return=representation")
            .match_body(Matcher::Json(json!({"flow_name": "demo", "flows": "{}"})))
            .with_status(201)
            .with_body(
                r#"[{"id": 5, "flow_name": "demo", "flows": "{}", "created_at": "2025-03-01T00:00:00Z"}]"#,
            )
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        let rows = store.insert(NewFlow::new("demo", "{}")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(rows[0].id, 5);
    }

    #[tokio::test]
    async fn test_error_body_becomes_store_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/rest/v1/agent_flows")
            .match_query(Matcher::UrlEncoded("id".into(), "eq.3".into()))
            .with_status(400)
            .with_body(r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax"}"#)
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        let error = store
            .update(3, NewFlow::new("x", "{}"))
            .await
            .unwrap_err();

        assert_eq!(error.code.as_deref(), Some("22P02"));
        assert_eq!(error.message, "invalid input syntax");
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/rest/v1/agent_flows")
            .match_query(Matcher::UrlEncoded("id".into(), "eq.9".into()))
            .with_status(204)
            .create_async()
            .await;

        let store = PostgrestFlowStore::new(server.url(), "secret", "agent_flows");
        store.delete(9).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let store = PostgrestFlowStore::new("", "secret", "agent_flows");
        let error = store.select(FlowQuery::all()).await.unwrap_err();
        assert_eq!(error.code.as_deref(), Some("TRANSPORT"));
    }

    #[test]
    fn test_null_body_decodes_as_no_rows() {
        assert!(decode_rows(b"null").unwrap().is_empty());
        assert!(decode_rows(b"").unwrap().is_empty());
        assert_eq!(decode_rows(b"{").unwrap_err().code.as_deref(), Some("DECODE"));
    }
}
