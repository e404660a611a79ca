use std::sync::Arc;

use axum::{routing::get, Router};

use agenda_cell::{agenda_routes, AvailabilityEngine};
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>, engine: Arc<AvailabilityEngine>) -> Router {
    Router::new()
        .route("/", get(|| async { "Agenda availability API is running!" }))
        .nest("/api/v1", agenda_routes(config, engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use shared_utils::test_utils::TestConfig;

    fn app() -> (Router, TestConfig) {
        let test_config = TestConfig::default();
        let config = test_config.to_app_config();
        let engine = AvailabilityEngine::from_config(&config).unwrap();
        (create_router(Arc::new(config), Arc::new(engine)), test_config)
    }

    #[tokio::test]
    async fn test_liveness_route() {
        let (router, _) = app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_agenda_is_mounted_under_api_v1() {
        let (router, test_config) = app();
        let request = Request::builder()
            .uri("/api/v1/agenda")
            .header("Authorization", test_config.bearer())
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
