use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Day not bookable: {reason}")]
    DayNotBookable { reason: String, message: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code rendered next to the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "unauthorized",
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::InvalidFormat(_) => "invalid_format",
            AppError::DayNotBookable { .. } => "day_not_bookable",
            AppError::ExternalService(_) => "upstream_unavailable",
            AppError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            AppError::DayNotBookable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match &self {
            AppError::DayNotBookable { reason, message } => {
                tracing::info!("Rejected day: {}: {}", reason, message);
                json!({
                    "error": message,
                    "code": code,
                    "reason": reason
                })
            }
            AppError::Auth(msg)
            | AppError::MissingParameter(msg)
            | AppError::InvalidFormat(msg)
            | AppError::ExternalService(msg)
            | AppError::Internal(msg) => {
                tracing::error!("Error: {}: {}", status, msg);
                json!({
                    "error": msg,
                    "code": code
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
