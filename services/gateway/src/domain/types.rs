use axum::http::StatusCode;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Credentials record as served by the resource service.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

impl UserRecord {
    /// Compare the lowercase hex SHA-256 of `password` against the stored hash.
    pub fn password_matches(&self, password: &str) -> bool {
        hex::encode(Sha256::digest(password.as_bytes())) == self.password_hash
    }
}

/// Outcome reported by the OTP service for a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OtpCheck {
    pub valid: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Upstream reply relayed verbatim to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Forwarded {
    pub status: StatusCode,
    pub body: serde_json::Value,
}
