#![allow(async_fn_in_trait)]

use axum::http::Method;

use crate::domain::types::{Forwarded, OtpCheck, UserRecord};
use crate::error::GatewayError;

/// Client side of the resource service.
pub trait ResourcePort: Send + Sync {
    /// Look up a user's credentials. `None` when the resource service answers 404.
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, GatewayError>;

    /// Relay a request to `/items` or `/items/{id}` and hand back the upstream
    /// status and body unchanged.
    async fn forward_items(
        &self,
        method: Method,
        id: Option<i32>,
        body: Option<serde_json::Value>,
    ) -> Result<Forwarded, GatewayError>;
}

/// Client side of the OTP service.
pub trait OtpPort: Send + Sync {
    /// Ask the OTP service to issue and deliver a code for `username`.
    /// Returns whether the code reached the delivery channel.
    async fn request_otp(&self, username: &str) -> Result<bool, GatewayError>;

    async fn validate_otp(&self, username: &str, code: &str) -> Result<OtpCheck, GatewayError>;
}
