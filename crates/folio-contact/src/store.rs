//! Storage for per-client rate-limit windows.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submissions seen from one client in its current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitRecord {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitRecord {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.reset_at
    }
}

/// Backing store for rate-limit records.
///
/// The in-memory [`MemoryStore`] is the default; a shared store (Redis or
/// similar) can be plugged in for multi-instance deployments.
pub trait RateLimitStore: Send + Sync {
    fn get(&self, key: &str) -> Option<RateLimitRecord>;

    fn set(&self, key: &str, record: RateLimitRecord);

    /// Drop every record whose window has ended. Returns how many were removed.
    fn sweep_expired(&self, now: DateTime<Utc>) -> usize;
}

/// Process-local store guarded by a mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, RateLimitRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RateLimitRecord>> {
        // A panic while holding the lock cannot leave a record half-written.
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RateLimitStore for MemoryStore {
    fn get(&self, key: &str) -> Option<RateLimitRecord> {
        self.lock().get(key).copied()
    }

    fn set(&self, key: &str, record: RateLimitRecord) {
        self.lock().insert(key.to_string(), record);
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }
}
