use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::services::AvailabilityEngine;

pub fn agenda_routes(config: Arc<AppConfig>, engine: Arc<AvailabilityEngine>) -> Router {
    Router::new()
        .route("/agenda", get(handlers::get_agenda))
        .layer(middleware::from_fn_with_state(config, auth_middleware))
        .with_state(engine)
}
