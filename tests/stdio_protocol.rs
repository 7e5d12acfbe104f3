//! JSON-RPC handling and the line-delimited transport.

mod common;

use common::{create_test_server, create_test_service};
use langflow_mcp::mcp_integration::stdio::{
    INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR, TOOL_NOT_FOUND,
};
use langflow_mcp::mcp_integration::{JsonRpcId, JsonRpcResponse};
use langflow_mcp::ToolProfile;
use serde_json::{Value, json};

#[tokio::test]
async fn test_initialize_advertises_tools_capability() {
    let service = create_test_service();
    let server = create_test_server(&service, ToolProfile::Workflows);

    let response = server
        .handle_mcp_request(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
        .await
        .expect("initialize gets a response");

    assert_eq!(response.id, JsonRpcId::Number(1));
    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "langflow-mcp");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let service = create_test_service();
    let server = create_test_server(&service, ToolProfile::Workflows);

    let response = server
        .handle_mcp_request(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_tools_call_returns_text_content() {
    let service = create_test_service();
    let server = create_test_server(&service, ToolProfile::Workflows);

    let request = json!({
        "jsonrpc": "2.0",
        "id": "call-1",
        "method": "tools/call",
        "params": {"name": "get_all_flows", "arguments": {}}
    });
    let response = server
        .handle_mcp_request(&request.to_string())
        .await
        .unwrap();

    assert_eq!(response.id, JsonRpcId::String("call-1".to_string()));
    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "Flows data:\n[]");
}

#[tokio::test]
async fn test_protocol_error_codes() {
    let service = create_test_service();
    let server = create_test_server(&service, ToolProfile::Workflows);

    let parse = server.handle_mcp_request("{not json").await.unwrap();
    assert_eq!(parse.id, JsonRpcId::Null);
    assert_eq!(parse.error.unwrap().code, PARSE_ERROR);

    let method = server
        .handle_mcp_request(r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#)
        .await
        .unwrap();
    assert_eq!(method.error.unwrap().code, METHOD_NOT_FOUND);

    let missing = server
        .handle_mcp_request(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_flow"}}"#,
        )
        .await
        .unwrap();
    let error = missing.error.unwrap();
    assert_eq!(error.code, INVALID_PARAMS);
    assert_eq!(error.message, "Arguments are required");

    let unknown = server
        .handle_mcp_request(
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_flow_data","arguments":{}}}"#,
        )
        .await
        .unwrap();
    let error = unknown.error.unwrap();
    assert_eq!(error.code, TOOL_NOT_FOUND);
    assert_eq!(error.data.unwrap()["tool"], "get_flow_data");
}

#[tokio::test]
async fn test_serve_answers_each_request_on_its_own_line() {
    let service = create_test_service();
    let server = create_test_server(&service, ToolProfile::All);

    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"add_flow","arguments":{"flow_name":"intake","flows":"{}"}}}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#,
    ]
    .join("\n");

    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<JsonRpcResponse> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let ids: Vec<JsonRpcId> = responses.iter().map(|r| r.id.clone()).collect();
    assert_eq!(
        ids,
        [1, 2, 3, 4].map(JsonRpcId::Number).to_vec()
    );

    let tools = responses[1].result.as_ref().unwrap()["tools"]
        .as_array()
        .unwrap()
        .len();
    assert_eq!(tools, 7);

    let text = responses[2].result.as_ref().unwrap()["content"][0]["text"]
        .as_str()
        .unwrap();
    let (label, body) = text.split_once('\n').unwrap();
    assert_eq!(label, "Flow added:");
    let record: Value = serde_json::from_str(body).unwrap();
    assert_eq!(record["flow_name"], "intake");

    assert_eq!(responses[3].result, Some(json!({})));
    assert_eq!(service.store().table().len().await, 1);
}
