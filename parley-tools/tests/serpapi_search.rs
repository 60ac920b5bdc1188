use parley_core::ToolCall;
use parley_tools::{SerpApiSearch, ToolExecutor};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_for(server: &MockServer) -> SerpApiSearch {
    SerpApiSearch::new(Some("serp-key".into()))
        .unwrap()
        .with_base_url(server.uri())
}

fn call(query: &str) -> ToolCall {
    ToolCall {
        id: "call_search".into(),
        name: "serpapi_search".into(),
        arguments: json!({ "query": query }).to_string(),
    }
}

#[tokio::test]
async fn test_answer_box_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "capital of france"))
        .and(query_param("api_key", "serp-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer_box": { "answer": "Paris" },
            "organic_results": [{ "snippet": "Paris is the capital of France." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = search_for(&server)
        .execute(&call("capital of france"))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.content, "Paris");
}

#[tokio::test]
async fn test_empty_page_has_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "search_metadata": {} })))
        .mount(&server)
        .await;

    let answer = search_for(&server).search("zzzz").await.unwrap();
    assert_eq!(answer, "No good search result found");
}

#[tokio::test]
async fn test_http_error_is_failed_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let result = search_for(&server).execute(&call("anything")).await.unwrap();
    assert!(!result.success);
    assert!(result.content.contains("401"));
}
