use chrono::{DateTime, Utc};

/// Outstanding one-time passcode for a single username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub username: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// A record is expired strictly after `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Outcome of a validation attempt. None of these are transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpValidation {
    /// Code matched; the record has been consumed.
    Valid,
    /// No record exists for the username.
    NotFound,
    /// The record had expired; it has been removed.
    Expired,
    /// Code did not match; the record is kept for further attempts.
    Mismatch,
}

impl OtpValidation {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Wire value of the `reason` field, absent for a valid code.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::NotFound => Some("no existe OTP"),
            Self::Expired => Some("expirado"),
            Self::Mismatch => Some("incorrecto"),
        }
    }

    /// Whether the attempt removes the stored record.
    pub fn consumes(self) -> bool {
        matches!(self, Self::Valid | Self::Expired)
    }
}

/// OTP code length in digits.
pub const OTP_CODE_LEN: usize = 6;

/// Largest code value; codes are drawn uniformly from `0..=OTP_CODE_MAX`.
pub const OTP_CODE_MAX: u32 = 999_999;

/// Default OTP time-to-live in seconds. Env var: `OTP_TTL`.
pub const DEFAULT_OTP_TTL_SECS: u32 = 6_000_000;
