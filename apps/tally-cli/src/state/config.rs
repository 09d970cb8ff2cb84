//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Command line flags (highest priority)                              │
//! │     --currency EUR --theme light                                       │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TALLY_CURRENCY, TALLY_THEME, TALLY_USER_NAME                       │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     USD, dark theme, three seed items                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! theme = "light"
//!
//! [currency]
//! code = "EUR"
//!
//! [user]
//! name = "Grace"
//! age = 30
//! is_member = false
//!
//! [[seed]]
//! name = "Notebook"
//! price = 3.5
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tally_core::{default_seed_items, Item, ValidationError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::currency::CurrencyFormatter;
use crate::state::Theme;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid currency code \"{0}\": expected a three-letter ISO 4217 code")]
    InvalidCurrency(String),

    #[error("Invalid theme \"{0}\": expected \"dark\" or \"light\"")]
    InvalidTheme(String),

    #[error("Seed item #{index} is invalid: {source}")]
    InvalidSeedItem {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Settings
// =============================================================================

/// Currency options handed to the formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    /// ISO 4217 code, e.g. "USD"
    pub code: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: "USD".to_string(),
        }
    }
}

/// The visitor shown in the greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub is_member: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "Ada".to_string(),
            age: 21,
            is_member: true,
        }
    }
}

impl UserProfile {
    /// Minimum age for member features.
    pub const ADULT_AGE: u32 = 18;

    /// Greeting shown in the status line at startup.
    ///
    /// ```text
    /// adult + member      → "Welcome back, Ada! Your membership is active."
    /// adult, not member   → "Hi Ada, consider joining to unlock perks."
    /// under age           → "Hi Ada, you must be 18+ to access member features."
    /// ```
    pub fn status_message(&self) -> String {
        let adult = self.age >= Self::ADULT_AGE;

        if adult && self.is_member {
            format!("Welcome back, {}! Your membership is active.", self.name)
        } else if adult {
            format!("Hi {}, consider joining to unlock perks.", self.name)
        } else {
            format!(
                "Hi {}, you must be {}+ to access member features.",
                self.name,
                Self::ADULT_AGE
            )
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme at startup
    pub theme: Theme,

    /// Currency used for every price in the view
    pub currency: CurrencySettings,

    /// Visitor profile for the greeting
    pub user: UserProfile,

    /// Items loaded into the store at startup
    pub seed: Vec<Item>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: Theme::default(),
            currency: CurrencySettings::default(),
            user: UserProfile::default(),
            seed: default_seed_items(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file; an explicit `path` must exist, the platform default may not
    /// 3. Environment variables, read through `lookup`
    ///
    /// The result is not validated yet: command line flags still go on top,
    /// so callers run [`AppConfig::validate`] once everything is applied.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(lookup);

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `TALLY_*` overrides from any key lookup (the environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("TALLY_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.currency.code = code;
        }

        if let Some(theme) = lookup("TALLY_THEME") {
            match theme.parse() {
                Ok(parsed) => self.theme = parsed,
                Err(_) => warn!(theme = %theme, "Unknown theme in environment"),
            }
        }

        if let Some(name) = lookup("TALLY_USER_NAME") {
            self.user.name = name;
        }
    }

    /// Validates the configuration and normalizes the seed items in place.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        CurrencyFormatter::new(&self.currency.code)?;

        for (index, item) in self.seed.iter_mut().enumerate() {
            *item = item
                .validated()
                .map_err(|source| ConfigError::InvalidSeedItem { index, source })?;
        }

        Ok(())
    }

    /// Builds the currency formatter for this configuration.
    pub fn formatter(&self) -> Result<CurrencyFormatter, ConfigError> {
        CurrencyFormatter::new(&self.currency.code)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
