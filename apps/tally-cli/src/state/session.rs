//! # Session State
//!
//! Everything the view needs between two input lines.
//!
//! ## Ownership
//! The command loop owns exactly one `Session` and hands out `&mut` to one
//! command at a time. Commands run to completion before the next line is
//! read, so there is no `Arc<Mutex<..>>` here.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │  ├── store   ItemListStore   (items, derived count/total/average)      │
//! │  ├── theme   Theme           (dark | light)                             │
//! │  ├── status  String          (outcome of the last action)               │
//! │  └── year    i32             (footer)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tally_core::ItemListStore;
use tracing::debug;

use crate::state::{AppConfig, ConfigError};

// =============================================================================
// Theme
// =============================================================================

/// Color theme of the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Pressed state of the toggle button: pressed while light is on.
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ConfigError::InvalidTheme(s.to_string())),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// State owned by the command loop.
#[derive(Debug, Clone)]
pub struct Session {
    /// The item list
    pub store: ItemListStore,

    /// Current theme
    pub theme: Theme,

    /// Human-readable outcome of the last action
    pub status: String,

    /// Year shown in the footer
    pub year: i32,
}

impl Session {
    /// Creates the startup session: seeded store, configured theme and the
    /// user greeting as the first status message.
    pub fn new(config: &AppConfig) -> Self {
        let mut store = ItemListStore::new();
        store.initialize(&config.seed);
        debug!(count = store.count(), "Store initialized from seed");

        Session {
            store,
            theme: config.theme,
            status: config.user.status_message(),
            year: chrono::Local::now().year(),
        }
    }

    /// Replaces the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
