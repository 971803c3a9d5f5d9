//! # folio-config
//!
//! Layered configuration loading for folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_CONTENT__ROOT` -> `content.root`,
//! `FOLIO_CONTACT__TO_EMAIL` -> `contact.to_email`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = FolioConfig::load_with_dotenv().expect("config");
//!
//! if config.contact.is_configured() {
//!     println!("Contact mail goes to {}", config.contact.to_email);
//! }
//! ```

mod contact;
mod content;
mod error;
mod general;

pub use contact::ContactConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed and
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".folio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Reject values the rest of folio cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.root.as_os_str().is_empty() {
            return Err(ConfigError::invalid("content.root", "must not be empty"));
        }
        if self.contact.max_requests == 0 {
            return Err(ConfigError::invalid(
                "contact.max_requests",
                "must be at least 1",
            ));
        }
        if self.contact.window_secs == 0 {
            return Err(ConfigError::invalid(
                "contact.window_secs",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.contact.sweep_probability) {
            return Err(ConfigError::invalid(
                "contact.sweep_probability",
                format!("{} is not between 0 and 1", self.contact.sweep_probability),
            ));
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::invalid(
                "general.default_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }

    /// Load `.env` from the current directory or one of its parents.
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
