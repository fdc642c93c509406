use std::fmt;

use anyhow::Context as _;

const DEFAULT_OTP_SERVICE_URL: &str = "http://localhost:5001";
const DEFAULT_RESOURCE_SERVICE_URL: &str = "http://localhost:5002";

/// Gateway configuration loaded from environment variables.
pub struct GatewayConfig {
    /// TCP port to listen on (default 4430). Env var: `GATEWAY_PORT`.
    pub gateway_port: u16,
    /// HS256 signing secret. Env var: `JWT_SECRET` (required).
    pub jwt_secret: String,
    /// Env var: `OTP_SERVICE_URL`.
    pub otp_service_url: String,
    /// Env var: `RESOURCE_SERVICE_URL`.
    pub resource_service_url: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("gateway_port", &self.gateway_port)
            .field("jwt_secret", &"<redacted>")
            .field("otp_service_url", &self.otp_service_url)
            .field("resource_service_url", &self.resource_service_url)
            .finish()
    }
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            gateway_port: lookup("GATEWAY_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(4430),
            jwt_secret: non_empty("JWT_SECRET").context("JWT_SECRET must be set")?,
            otp_service_url: non_empty("OTP_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_OTP_SERVICE_URL.to_owned()),
            resource_service_url: non_empty("RESOURCE_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_RESOURCE_SERVICE_URL.to_owned()),
        })
    }
}
