mod test_utils;

use postcraft_core::CompletionRequest;
use postcraft_error::ProviderErrorKind;
use postcraft_interface::CompletionDriver;
use postcraft_models::OpenAiClient;
use serde_json::json;
use test_utils::{dead_url, serve_once};

fn request() -> CompletionRequest {
    CompletionRequest::builder()
        .prompt("Content: \"New product!\"\nPlatform: instagram")
        .system(Some("Respond with JSON only.".to_string()))
        .max_tokens(1024u32)
        .temperature(Some(0.7))
        .build()
        .expect("Valid request")
}

#[tokio::test]
async fn test_openai_returns_first_choice_content() {
    let reply = json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "{\"emojis\":[]}" },
            "finish_reason": "stop"
        }]
    });
    let (url, server) = serve_once(200, &reply.to_string()).await;
    let client = OpenAiClient::with_base_url("test-key", "gpt-4o-mini", url);

    let text = client.complete(&request()).await.expect("Completion succeeded");
    assert_eq!(text, "{\"emojis\":[]}");

    let captured = server.await.expect("Server task finished");
    assert!(captured.head.starts_with("post /chat/completions"));
    assert!(captured.head.contains("authorization: bearer test-key"));
    assert_eq!(captured.body["model"], "gpt-4o-mini");
    assert_eq!(captured.body["response_format"]["type"], "json_object");
    assert_eq!(captured.body["messages"][0]["role"], "system");
    assert_eq!(captured.body["messages"][1]["role"], "user");
}

#[tokio::test]
async fn test_openai_unauthorized_is_authentication_error() {
    let (url, _server) = serve_once(401, r#"{"error":{"message":"bad key"}}"#).await;
    let client = OpenAiClient::with_base_url("wrong", "gpt-4o-mini", url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err.kind(), ProviderErrorKind::Authentication(_)));
}

#[tokio::test]
async fn test_openai_server_error_keeps_status() {
    let (url, _server) = serve_once(503, r#"{"error":"overloaded"}"#).await;
    let client = OpenAiClient::with_base_url("k", "gpt-4o-mini", url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err.kind(), ProviderErrorKind::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_openai_garbage_body_is_malformed() {
    let (url, _server) = serve_once(200, "<html>gateway</html>").await;
    let client = OpenAiClient::with_base_url("k", "gpt-4o-mini", url);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err.kind(), ProviderErrorKind::MalformedBody(_)));
}

#[tokio::test]
async fn test_openai_connection_refused_is_transport_error() {
    let client = OpenAiClient::with_base_url("k", "gpt-4o-mini", dead_url().await);

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(err.kind(), ProviderErrorKind::Transport(_)));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_real_json_completion() {
    let _ = dotenvy::dotenv();
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for API tests");
    let client = OpenAiClient::new(api_key, "gpt-4o-mini");

    let req = CompletionRequest::builder()
        .prompt("Return {\"ok\": true} as JSON.")
        .max_tokens(32u32)
        .build()
        .expect("Valid request");

    let text = client.complete(&req).await.expect("API call succeeded");
    let value: serde_json::Value = serde_json::from_str(&text).expect("JSON response");
    assert!(value.is_object());
}
