use reqwest::Client;

use crate::config::GatewayConfig;
use crate::infra::otp::HttpOtpClient;
use crate::infra::resources::HttpResourceClient;
use crate::usecase::auth::{LoginUseCase, ValidateOtpUseCase};
use crate::usecase::item::ForwardItemsUseCase;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub resources: HttpResourceClient,
    pub otps: HttpOtpClient,
    pub jwt_secret: String,
}

impl AppState {
    /// Both upstream clients share one connection pool.
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = Client::new();
        Ok(Self {
            resources: HttpResourceClient::new(client.clone(), &config.resource_service_url)?,
            otps: HttpOtpClient::new(client, &config.otp_service_url)?,
            jwt_secret: config.jwt_secret.clone(),
        })
    }

    pub fn login(&self) -> LoginUseCase<HttpResourceClient, HttpOtpClient> {
        LoginUseCase {
            resources: self.resources.clone(),
            otps: self.otps.clone(),
        }
    }

    pub fn validate_otp(&self) -> ValidateOtpUseCase<HttpOtpClient> {
        ValidateOtpUseCase {
            otps: self.otps.clone(),
            jwt_secret: self.jwt_secret.clone(),
        }
    }

    pub fn forward_items(&self) -> ForwardItemsUseCase<HttpResourceClient> {
        ForwardItemsUseCase {
            resources: self.resources.clone(),
        }
    }
}
