use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::error::GatewayError;

pub mod auth;
pub mod item;
pub mod profile;

/// Unwrap a JSON body, mapping extractor rejections to a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, GatewayError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| GatewayError::InvalidRequest(e.body_text()))
}

/// Unwrap a path parameter, mapping extractor rejections to a 400.
fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, GatewayError> {
    path.map(|Path(value)| value)
        .map_err(|e| GatewayError::InvalidRequest(e.body_text()))
}
