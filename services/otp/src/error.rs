use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use otpgate_core::error::{ApiError, error_response};

/// OTP service error variants. Validation outcomes are not errors.
#[derive(Debug, thiserror::Error)]
pub enum OtpServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl OtpServiceError {
    pub fn missing(field: &str) -> Self {
        Self::InvalidRequest(format!("{field} is required"))
    }
}

impl ApiError for OtpServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for OtpServiceError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
