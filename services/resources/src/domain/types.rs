use rand::RngExt;
use sha2::{Digest, Sha256};

/// Stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub otp_secret: String,
    pub email: String,
}

/// User fields before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub otp_secret: String,
    pub email: String,
}

/// Generic item record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Item fields for create and full-replacement update.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
}

/// Random bytes behind each user's `otp_secret`.
pub const OTP_SECRET_BYTES: usize = 16;

/// Lowercase hex SHA-256 of the password, as the login gateway expects.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn generate_otp_secret() -> String {
    let bytes: [u8; OTP_SECRET_BYTES] = rand::rng().random();
    hex::encode(bytes)
}
