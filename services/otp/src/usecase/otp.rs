use chrono::Duration;
use rand::RngExt;

use crate::domain::repository::{Clock, Notifier, OtpStore};
use crate::domain::types::{OTP_CODE_LEN, OTP_CODE_MAX, OtpRecord, OtpValidation};
use crate::error::OtpServiceError;

fn generate_code() -> String {
    let value = rand::rng().random_range(0..=OTP_CODE_MAX);
    format!("{value:0width$}", width = OTP_CODE_LEN)
}

fn otp_message(code: &str, ttl: Duration) -> String {
    format!(
        "Your OTP code is: {code}\nValid for {} seconds.",
        ttl.num_seconds()
    )
}

/// Treat absent and blank fields alike.
fn required(value: Option<String>, field: &str) -> Result<String, OtpServiceError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| OtpServiceError::missing(field))
}

// ── GenerateOtp ──────────────────────────────────────────────────────────────

pub struct GenerateOtpInput {
    pub username: Option<String>,
}

pub struct GenerateOtpOutput {
    /// Whether the notifier accepted the message.
    pub delivered: bool,
}

pub struct GenerateOtpUseCase<'a> {
    pub store: &'a dyn OtpStore,
    pub notifier: &'a dyn Notifier,
    pub clock: &'a dyn Clock,
    pub ttl: Duration,
}

impl GenerateOtpUseCase<'_> {
    pub async fn execute(
        &self,
        input: GenerateOtpInput,
    ) -> Result<GenerateOtpOutput, OtpServiceError> {
        let username = required(input.username, "username")?;

        let code = generate_code();
        let expires_at = self.clock.now() + self.ttl;
        let replaced = self.store.issue(OtpRecord {
            username: username.clone(),
            code: code.clone(),
            expires_at,
        });
        tracing::info!(username = %username, replaced, %expires_at, "otp issued");

        // Store lock is released by now; delivery never blocks other OTP traffic.
        let delivered = self.notifier.send(&otp_message(&code, self.ttl)).await;
        if !delivered {
            tracing::warn!(username = %username, "otp delivery failed");
        }
        Ok(GenerateOtpOutput { delivered })
    }
}

// ── ValidateOtp ──────────────────────────────────────────────────────────────

pub struct ValidateOtpInput {
    pub username: Option<String>,
    pub code: Option<String>,
}

pub struct ValidateOtpUseCase<'a> {
    pub store: &'a dyn OtpStore,
    pub clock: &'a dyn Clock,
}

impl ValidateOtpUseCase<'_> {
    pub fn execute(&self, input: ValidateOtpInput) -> Result<OtpValidation, OtpServiceError> {
        let username = required(input.username, "username")?;
        let code = required(input.code, "code")?;

        let outcome = self.store.check(&username, &code, self.clock.now());
        tracing::info!(username = %username, outcome = ?outcome, "otp validated");
        Ok(outcome)
    }
}
