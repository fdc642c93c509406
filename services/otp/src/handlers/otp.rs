use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::OtpServiceError;
use crate::state::AppState;
use crate::usecase::otp::{GenerateOtpInput, ValidateOtpInput};

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, OtpServiceError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| OtpServiceError::InvalidRequest(e.body_text()))
}

// ── POST /generate_otp ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateOtpRequest {
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateOtpResponse {
    pub message: &'static str,
    pub telegram_sent: bool,
}

pub async fn generate_otp(
    State(state): State<AppState>,
    payload: Result<Json<GenerateOtpRequest>, JsonRejection>,
) -> Result<Json<GenerateOtpResponse>, OtpServiceError> {
    let body = body(payload)?;
    let output = state
        .generate_otp()
        .execute(GenerateOtpInput {
            username: body.username,
        })
        .await?;
    Ok(Json(GenerateOtpResponse {
        message: "OTP generated",
        telegram_sent: output.delivered,
    }))
}

// ── POST /validate_otp ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateOtpRequest {
    pub username: Option<String>,
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct ValidateOtpResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

pub async fn validate_otp(
    State(state): State<AppState>,
    payload: Result<Json<ValidateOtpRequest>, JsonRejection>,
) -> Result<Json<ValidateOtpResponse>, OtpServiceError> {
    let body = body(payload)?;
    let outcome = state.validate_otp().execute(ValidateOtpInput {
        username: body.username,
        code: body.code,
    })?;
    Ok(Json(ValidateOtpResponse {
        valid: outcome.is_valid(),
        reason: outcome.reason(),
    }))
}
