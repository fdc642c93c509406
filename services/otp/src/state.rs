use std::sync::Arc;

use chrono::Duration;

use crate::config::OtpConfig;
use crate::domain::repository::{Clock, Notifier, OtpStore};
use crate::infra::clock::SystemClock;
use crate::infra::memory::InMemoryOtpStore;
use crate::infra::telegram::{DisabledNotifier, TelegramNotifier};
use crate::usecase::otp::{GenerateOtpUseCase, ValidateOtpUseCase};

/// Shared application state passed to every handler via axum `State`.
///
/// Built once per process; the store lives as long as the server.
#[derive(Clone)]
pub struct AppState {
    pub otps: Arc<dyn OtpStore>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
    pub otp_ttl: Duration,
}

impl AppState {
    pub fn from_config(config: &OtpConfig) -> Self {
        let notifier: Arc<dyn Notifier> = match &config.telegram {
            Some(telegram) => Arc::new(TelegramNotifier::new(
                &telegram.api_url,
                &telegram.bot_token,
                &telegram.chat_id,
            )),
            None => Arc::new(DisabledNotifier),
        };
        Self {
            otps: Arc::new(InMemoryOtpStore::new()),
            notifier,
            clock: Arc::new(SystemClock),
            otp_ttl: Duration::seconds(i64::from(config.otp_ttl_secs)),
        }
    }

    pub fn generate_otp(&self) -> GenerateOtpUseCase<'_> {
        GenerateOtpUseCase {
            store: self.otps.as_ref(),
            notifier: self.notifier.as_ref(),
            clock: self.clock.as_ref(),
            ttl: self.otp_ttl,
        }
    }

    pub fn validate_otp(&self) -> ValidateOtpUseCase<'_> {
        ValidateOtpUseCase {
            store: self.otps.as_ref(),
            clock: self.clock.as_ref(),
        }
    }
}
