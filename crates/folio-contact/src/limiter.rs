//! Fixed-window rate limiting keyed by client.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use folio_config::ContactConfig;

use crate::store::{MemoryStore, RateLimitRecord, RateLimitStore};

const MAX_IP_CHARS: usize = 45;
const MAX_USER_AGENT_CHARS: usize = 50;
const UNKNOWN: &str = "unknown";

/// Longest window accepted from configuration (about a century).
const MAX_WINDOW_SECS: i64 = 100 * 365 * 24 * 60 * 60;

/// Rate limiter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitSettings {
    /// Maximum submissions per window.
    pub max_requests: u32,
    pub window: TimeDelta,
    /// Chance, per check, of sweeping expired records from the store.
    pub sweep_probability: f64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

impl RateLimitSettings {
    #[must_use]
    pub fn from_config(config: &ContactConfig) -> Self {
        let secs = i64::try_from(config.window_secs)
            .unwrap_or(MAX_WINDOW_SECS)
            .min(MAX_WINDOW_SECS);
        Self {
            max_requests: config.max_requests,
            window: TimeDelta::seconds(secs),
            sweep_probability: config.sweep_probability,
        }
    }
}

/// Outcome of one rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_at: DateTime<Utc> },
}

impl RateDecision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Rate-limit key for a client: first forwarded address plus user agent.
///
/// `forwarded_for` is an `X-Forwarded-For` style list; only its first entry
/// is used. Missing values become `unknown`.
#[must_use]
pub fn client_key(forwarded_for: Option<&str>, user_agent: Option<&str>) -> String {
    format!(
        "{}-{}",
        truncate(&client_ip(forwarded_for), MAX_IP_CHARS),
        truncate(user_agent.unwrap_or(UNKNOWN), MAX_USER_AGENT_CHARS)
    )
}

/// First address of a forwarded-for list, or `unknown`.
#[must_use]
pub fn client_ip(forwarded_for: Option<&str>) -> String {
    forwarded_for
        .and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn truncate(value: &str, max_chars: usize) -> &str {
    value
        .char_indices()
        .nth(max_chars)
        .map_or(value, |(idx, _)| &value[..idx])
}

/// Fixed-window limiter over a [`RateLimitStore`].
#[derive(Debug)]
pub struct RateLimiter<S = MemoryStore> {
    settings: RateLimitSettings,
    store: S,
    // Serializes the read-modify-write on the store.
    check_lock: Mutex<()>,
}

impl RateLimiter<MemoryStore> {
    #[must_use]
    pub fn in_memory(settings: RateLimitSettings) -> Self {
        Self::new(settings, MemoryStore::new())
    }
}

impl<S: RateLimitStore> RateLimiter<S> {
    pub const fn new(settings: RateLimitSettings, store: S) -> Self {
        Self {
            settings,
            store,
            check_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &RateLimitSettings {
        &self.settings
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Count a submission from `key` now.
    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Utc::now())
    }

    /// Count a submission from `key` at `now`.
    ///
    /// A client with no record, or whose window ended before `now`, starts
    /// a new window. A client already at the limit is refused until its
    /// window resets; refused submissions are not counted.
    pub fn check_at(&self, key: &str, now: DateTime<Utc>) -> RateDecision {
        let decision = {
            let _guard = self.check_lock.lock().unwrap_or_else(PoisonError::into_inner);
            match self.store.get(key) {
                Some(record) if !record.is_expired(now) => {
                    if record.count >= self.settings.max_requests {
                        RateDecision::Limited {
                            retry_at: record.reset_at,
                        }
                    } else {
                        self.store.set(
                            key,
                            RateLimitRecord {
                                count: record.count + 1,
                                ..record
                            },
                        );
                        RateDecision::Allowed
                    }
                }
                _ => {
                    self.store.set(
                        key,
                        RateLimitRecord {
                            count: 1,
                            reset_at: now + self.settings.window,
                        },
                    );
                    RateDecision::Allowed
                }
            }
        };

        if should_sweep(self.settings.sweep_probability) {
            let removed = self.store.sweep_expired(now);
            tracing::debug!(removed, "swept expired rate-limit records");
        }

        decision
    }
}

fn should_sweep(probability: f64) -> bool {
    if probability <= 0.0 {
        return false;
    }
    if probability >= 1.0 {
        return true;
    }
    let mut bytes = [0u8; 8];
    if let Err(error) = getrandom::fill(&mut bytes) {
        tracing::debug!(%error, "no randomness available; skipping sweep");
        return false;
    }
    // Top 53 bits give a uniform f64 in [0, 1).
    #[allow(clippy::cast_precision_loss)]
    let roll = (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64;
    roll < probability
}
