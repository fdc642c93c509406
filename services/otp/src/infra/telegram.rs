use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::domain::repository::Notifier;

/// Delivers messages to a single chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_owned(),
            bot_token: bot_token.to_owned(),
            chat_id: chat_id.to_owned(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> bool {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text: message,
        };
        let result = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => {
                tracing::info!(chat_id = %self.chat_id, "telegram message sent");
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(%status, body = %body, "telegram rejected message");
                false
            }
            Err(e) => {
                // The request URL embeds the bot token; keep it out of the logs.
                tracing::warn!(error = %e.without_url(), "telegram request failed");
                false
            }
        }
    }
}

/// Stand-in used when no bot credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send(&self, _message: &str) -> bool {
        tracing::warn!("telegram is not configured; message dropped");
        false
    }
}
