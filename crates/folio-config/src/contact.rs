//! Contact form rate limiting and delivery addresses.

use serde::{Deserialize, Serialize};

const fn default_max_requests() -> u32 {
    5
}

const fn default_window_secs() -> u64 {
    15 * 60
}

const fn default_sweep_probability() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Submissions allowed per client within one window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Length of a rate-limit window, in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Chance, per check, of sweeping expired rate-limit records.
    #[serde(default = "default_sweep_probability")]
    pub sweep_probability: f64,

    /// Recipient of contact messages.
    #[serde(default)]
    pub to_email: String,

    /// Sender address used for outgoing contact mail.
    #[serde(default)]
    pub from_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
            sweep_probability: default_sweep_probability(),
            to_email: String::new(),
            from_email: String::new(),
        }
    }
}

impl ContactConfig {
    /// Check if a recipient is set, i.e. messages can be delivered.
    pub fn is_configured(&self) -> bool {
        !self.to_email.is_empty()
    }
}
