use thiserror::Error;

use shared_models::error::AppError;

use crate::models::DayVerdict;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("{0}")]
    Format(String),

    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("Day not bookable: {}", .0.message())]
    DayNotBookable(DayVerdict),
}

impl From<AgendaError> for AppError {
    fn from(error: AgendaError) -> Self {
        match error {
            AgendaError::MissingParameter(name) => {
                AppError::MissingParameter(format!("Missing required parameter '{}'", name))
            }
            AgendaError::Format(message) => AppError::InvalidFormat(message),
            AgendaError::UpstreamFetch(message) => AppError::ExternalService(message),
            AgendaError::DayNotBookable(verdict) => AppError::DayNotBookable {
                reason: verdict.reason().to_string(),
                message: verdict.message().to_string(),
            },
        }
    }
}
