use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, ValidateOtpInput, ValidateOtpOutcome};

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, GatewayError> {
    let body = json_body(payload)?;
    let output = state
        .login()
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    let message = if output.delivered {
        "OTP sent via Telegram. Use /validate-otp to validate."
    } else {
        "OTP generated but could not be delivered. Use /validate-otp to validate."
    };
    Ok(Json(LoginResponse { message }))
}

// ── POST /validate-otp ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateOtpRequest {
    pub username: Option<String>,
    pub otp: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ValidateOtpResponse {
    Token {
        token: String,
    },
    Rejected {
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

pub async fn validate_otp(
    State(state): State<AppState>,
    payload: Result<Json<ValidateOtpRequest>, JsonRejection>,
) -> Result<Json<ValidateOtpResponse>, GatewayError> {
    let body = json_body(payload)?;
    let outcome = state
        .validate_otp()
        .execute(ValidateOtpInput {
            username: body.username,
            otp: body.otp,
        })
        .await?;

    let response = match outcome {
        ValidateOtpOutcome::Token(token) => ValidateOtpResponse::Token { token },
        ValidateOtpOutcome::Rejected { reason } => ValidateOtpResponse::Rejected {
            valid: false,
            reason,
        },
    };
    Ok(Json(response))
}
