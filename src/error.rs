//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;

/// Errors raised while registering catalog entries or pricing rules.
///
/// Registration has no effect when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl PricingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        PricingError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        PricingError::NotFound(message.into())
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AppError::Pricing(PricingError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_argument")
            }
            AppError::Pricing(PricingError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Io(e) => {
                tracing::error!("Catalog file error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
            AppError::Json(e) => {
                tracing::error!("Catalog parse error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };

        let body = PricingErrorResponse {
            error_type: error_type.to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
