use parley_core::{ErrorKind, Message, Provider, Request};
use parley_providers::OpenAIBuilder;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> parley_providers::OpenAI {
    OpenAIBuilder::new()
        .api_key("sk-test")
        .base_url(format!("{}/v1", server.uri()))
        .model("gpt-4")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_chat_completion_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "stream": false,
            "messages": [{ "role": "user", "content": "Say hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4-0613",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Hi!" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .request(Request::new(vec![Message::user("Say hi")]))
        .await
        .unwrap();

    assert_eq!(response.content, "Hi!");
    assert_eq!(response.metadata.id.as_deref(), Some("chatcmpl-123"));
}

#[tokio::test]
async fn test_rejected_key_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key provided"))
        .mount(&server)
        .await;

    let error = provider_for(&server)
        .request(Request::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Authentication);
    assert!(error.to_string().contains("Incorrect API key provided"));
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "7")
                .set_body_string("Rate limit reached"),
        )
        .mount(&server)
        .await;

    let error = provider_for(&server)
        .request(Request::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Provider);
    assert_eq!(error.retry_after(), Some(Duration::from_secs(7)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 on loopback.
    let provider = OpenAIBuilder::new()
        .api_key("sk-test")
        .base_url("http://127.0.0.1:9/v1")
        .build()
        .unwrap();

    let error = provider
        .request(Request::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Network);
}
