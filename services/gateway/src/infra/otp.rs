use anyhow::Context as _;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::domain::port::OtpPort;
use crate::domain::types::OtpCheck;
use crate::error::GatewayError;
use crate::infra::endpoint;

/// `OtpPort` over the OTP service's HTTP API.
#[derive(Clone)]
pub struct HttpOtpClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct GenerateOtpRequest<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct GenerateOtpResponse {
    #[serde(default)]
    telegram_sent: bool,
}

#[derive(Serialize)]
struct ValidateOtpRequest<'a> {
    username: &'a str,
    code: &'a str,
}

impl HttpOtpClient {
    pub fn new(client: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid otp service url: {base_url}"))?;
        Ok(Self { client, base_url })
    }
}

impl OtpPort for HttpOtpClient {
    async fn request_otp(&self, username: &str) -> Result<bool, GatewayError> {
        let url = endpoint(&self.base_url, &["generate_otp"])?;
        let resp = self
            .client
            .post(url)
            .json(&GenerateOtpRequest { username })
            .send()
            .await
            .context("request otp from otp service")?
            .error_for_status()
            .context("otp service rejected generate request")?;

        let body = resp
            .json::<GenerateOtpResponse>()
            .await
            .context("decode otp service generate response")?;
        Ok(body.telegram_sent)
    }

    async fn validate_otp(&self, username: &str, code: &str) -> Result<OtpCheck, GatewayError> {
        let url = endpoint(&self.base_url, &["validate_otp"])?;
        let check = self
            .client
            .post(url)
            .json(&ValidateOtpRequest { username, code })
            .send()
            .await
            .context("validate otp with otp service")?
            .error_for_status()
            .context("otp service rejected validate request")?
            .json::<OtpCheck>()
            .await
            .context("decode otp service validate response")?;
        Ok(check)
    }
}
