use chrono::Utc;

use crate::domain::port::{OtpPort, ResourcePort};
use crate::error::GatewayError;
use crate::token::issue_token;

/// Treat absent and blank fields alike.
fn required(value: Option<String>, field: &str) -> Result<String, GatewayError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GatewayError::missing(field))
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct LoginOutput {
    /// Whether the OTP service reported the code as delivered.
    pub delivered: bool,
}

pub struct LoginUseCase<R: ResourcePort, O: OtpPort> {
    pub resources: R,
    pub otps: O,
}

impl<R: ResourcePort, O: OtpPort> LoginUseCase<R, O> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, GatewayError> {
        let username = required(input.username, "username")?;
        let password = required(input.password, "password")?;

        let user = self
            .resources
            .find_user(&username)
            .await?
            .ok_or(GatewayError::UserNotFound)?;

        if !user.password_matches(&password) {
            tracing::info!(username = %username, "login rejected: bad password");
            return Err(GatewayError::InvalidCredentials);
        }

        let delivered = self.otps.request_otp(&username).await?;
        tracing::info!(username = %username, delivered, "login accepted, otp requested");
        Ok(LoginOutput { delivered })
    }
}

// ── ValidateOtp ──────────────────────────────────────────────────────────────

pub struct ValidateOtpInput {
    pub username: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidateOtpOutcome {
    /// Code accepted; a signed session token for the user.
    Token(String),
    /// Code refused; the OTP service's reason, relayed as-is.
    Rejected { reason: Option<String> },
}

pub struct ValidateOtpUseCase<O: OtpPort> {
    pub otps: O,
    pub jwt_secret: String,
}

impl<O: OtpPort> ValidateOtpUseCase<O> {
    pub async fn execute(
        &self,
        input: ValidateOtpInput,
    ) -> Result<ValidateOtpOutcome, GatewayError> {
        let username = required(input.username, "username")?;
        let otp = required(input.otp, "otp")?;

        let check = self.otps.validate_otp(&username, &otp).await?;
        if !check.valid {
            tracing::info!(username = %username, reason = ?check.reason, "otp rejected");
            return Ok(ValidateOtpOutcome::Rejected {
                reason: check.reason,
            });
        }

        let token = issue_token(&username, &self.jwt_secret, Utc::now())?;
        tracing::info!(username = %username, "otp accepted, token issued");
        Ok(ValidateOtpOutcome::Token(token))
    }
}
