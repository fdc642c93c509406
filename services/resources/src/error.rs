use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use otpgate_core::error::{ApiError, error_response};

/// Resource service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ResourceServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("item not found")]
    ItemNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("missing data: {0}")]
    MissingData(&'static str),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError for ResourceServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::MissingData(_) => "MISSING_DATA",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,
            // Duplicate usernames are reported as 400, not 409.
            Self::UserAlreadyExists | Self::MissingData(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Internal(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for ResourceServiceError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
