use std::fmt;

use crate::domain::types::DEFAULT_OTP_TTL_SECS;

const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// OTP service configuration loaded from environment variables.
#[derive(Debug)]
pub struct OtpConfig {
    /// TCP port to listen on (default 5001). Env var: `OTP_PORT`.
    pub otp_port: u16,
    /// Code lifetime in seconds (default 6000000). Env var: `OTP_TTL`.
    pub otp_ttl_secs: u32,
    /// Bot credentials; `None` disables delivery.
    pub telegram: Option<TelegramConfig>,
}

/// Telegram Bot API settings. Env vars: `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`,
/// `TELEGRAM_API_URL`.
pub struct TelegramConfig {
    pub api_url: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl OtpConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let telegram = match (non_empty("TELEGRAM_BOT_TOKEN"), non_empty("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                api_url: non_empty("TELEGRAM_API_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_owned()),
                bot_token,
                chat_id,
            }),
            _ => None,
        };

        Self {
            otp_port: lookup("OTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
            otp_ttl_secs: lookup("OTP_TTL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_OTP_TTL_SECS),
            telegram,
        }
    }
}
