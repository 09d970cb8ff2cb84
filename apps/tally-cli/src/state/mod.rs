//! # State Module
//!
//! State held by the front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │   AppConfig              │        │   Session                    │  │
//! │  │                          │ seeds  │                              │  │
//! │  │  currency, theme, user,  │ ─────► │  ItemListStore, theme,       │  │
//! │  │  seed items              │        │  status line                 │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  • AppConfig: read-only after startup                                   │
//! │  • Session: mutated by one command at a time                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, ConfigError, CurrencySettings, UserProfile, CONFIG_FILE_NAME};
pub use session::{Session, Theme};
