use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::domain::repository::OtpStore;
use crate::domain::types::{OtpRecord, OtpValidation};

/// Process-local OTP store. Records do not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation panics while holding the guard, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the outstanding record for `username`.
    pub fn get(&self, username: &str) -> Option<OtpRecord> {
        self.lock().get(username).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl OtpStore for InMemoryOtpStore {
    fn issue(&self, record: OtpRecord) -> bool {
        self.lock()
            .insert(record.username.clone(), record)
            .is_some()
    }

    fn check(&self, username: &str, code: &str, now: DateTime<Utc>) -> OtpValidation {
        let mut records = self.lock();
        let outcome = match records.get(username) {
            None => return OtpValidation::NotFound,
            Some(record) if record.is_expired_at(now) => OtpValidation::Expired,
            Some(record) if record.code == code => OtpValidation::Valid,
            Some(_) => OtpValidation::Mismatch,
        };
        if outcome.consumes() {
            records.remove(username);
        }
        outcome
    }
}
