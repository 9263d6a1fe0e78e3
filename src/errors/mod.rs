use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::types::responses::api_response::ApiResponse;

/// Service-level failure, mapped onto an HTTP status and rendered through
/// the `ApiResponse` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid id '{0}'")]
    InvalidId(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidId(_) | ApiError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            ApiError::Validation { errors, .. } => Some(json!(errors)),
            _ => None,
        };
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error(self.to_string(), details))
    }
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{} not found", what))
    }
}
