use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::types::{OtpRecord, OtpValidation};

/// Store holding at most one outstanding OTP per username.
///
/// Implementations must run each method as a single critical section so that
/// concurrent issue/check calls on the same username never interleave.
pub trait OtpStore: Send + Sync {
    /// Insert a record, replacing any previous one for the same username.
    /// Returns `true` if a record was replaced.
    fn issue(&self, record: OtpRecord) -> bool;

    /// Validate `code` for `username` at `now`, consuming the record on
    /// `Valid` or `Expired`.
    fn check(&self, username: &str, code: &str, now: DateTime<Utc>) -> OtpValidation;
}

/// Best-effort outbound channel for delivering codes.
///
/// Never fails across the boundary: every failure mode is reported as `false`.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> bool;
}

/// Source of the current time, injectable for expiry tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
