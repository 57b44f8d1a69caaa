use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Question, Wrapper};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

// --- filters/create ---

#[tokio::test]
async fn create_filter_default() {
    let resp = get("/2.2/filters/create?unsafe=false").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["items"][0]["filter"], "default");
    assert_eq!(body["items"][0]["filter_type"], "safe");
}

#[tokio::test]
async fn create_filter_with_fields() {
    let resp =
        get("/2.2/filters/create?base=withbody&include=question.body;answer.body&unsafe=true").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_ne!(body["items"][0]["filter"], "withbody");
    assert_eq!(body["items"][0]["filter_type"], "unsafe");
    assert_eq!(body["items"][0]["included_fields"][1], "answer.body");
}

#[tokio::test]
async fn create_filter_missing_unsafe_returns_400() {
    let resp = get("/2.2/filters/create").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error_id"], 400);
    assert_eq!(body["error_name"], "bad_parameter");
}

#[tokio::test]
async fn create_filter_unknown_base_returns_400() {
    let resp = get("/2.2/filters/create?base=everything&unsafe=false").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error_message"], "base");
}

// --- questions ---

#[tokio::test]
async fn questions_default_page() {
    let resp = get("/2.2/questions?site=stackoverflow").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Wrapper<Question> = body_json(resp).await;
    assert_eq!(page.items.len(), 30);
    assert!(!page.has_more);
}

#[tokio::test]
async fn questions_honor_pagesize() {
    let resp = get("/2.2/questions?site=stackoverflow&pagesize=5").await;
    let page: Wrapper<Question> = body_json(resp).await;
    assert_eq!(page.items.len(), 5);
}

#[tokio::test]
async fn questions_without_site_returns_400() {
    let resp = get("/2.2/questions").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error_message"], "site is required");
}

#[tokio::test]
async fn questions_by_id_returns_each_id() {
    let resp = get("/2.2/questions/11;22?site=stackoverflow").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Wrapper<Question> = body_json(resp).await;
    let ids: Vec<i64> = page.items.iter().map(|q| q.question_id).collect();
    assert_eq!(ids, vec![11, 22]);
}

#[tokio::test]
async fn questions_by_bad_id_returns_400() {
    let resp = get("/2.2/questions/abc?site=stackoverflow").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- errors/{id} ---

#[tokio::test]
async fn simulated_bad_request_has_error_body() {
    let resp = get("/2.2/errors/400").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error_id"], 400);
    assert_eq!(body["error_name"], "bad_request");
}

#[tokio::test]
async fn simulated_server_error_uses_its_status() {
    let resp = get("/2.2/errors/503").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = get("/2.2/teleport").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
