use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceExt;

use shared_utils::extractor::auth_middleware;
use shared_utils::test_utils::TestConfig;

fn protected_app(test_config: &TestConfig) -> Router {
    let config = test_config.to_arc();
    Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
}

#[tokio::test]
async fn test_request_with_token_passes_through() {
    let test_config = TestConfig::default();
    let app = protected_app(&test_config);

    let request = Request::builder()
        .uri("/")
        .header("Authorization", test_config.bearer())
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_without_token_is_unauthorized() {
    let app = protected_app(&TestConfig::default());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "unauthorized");
}
