use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::error::ResourceServiceError;

pub mod item;
pub mod user;

/// Unwrap a JSON body, mapping extractor rejections to a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ResourceServiceError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ResourceServiceError::InvalidRequest(e.body_text()))
}

/// Unwrap a path parameter, mapping extractor rejections to a 400.
fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ResourceServiceError> {
    path.map(|Path(value)| value)
        .map_err(|e| ResourceServiceError::InvalidRequest(e.body_text()))
}
