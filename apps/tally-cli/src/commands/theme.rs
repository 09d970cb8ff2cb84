//! # Theme Commands

use serde::Serialize;
use tracing::debug;

use crate::state::{Session, Theme};

/// Theme after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: Theme,

    /// Pressed state of the toggle button (true while light is on)
    pub pressed: bool,
}

/// Switches between dark and light and reports the new theme in the
/// status line.
pub fn toggle_theme(session: &mut Session) -> ThemeResponse {
    session.theme = session.theme.toggled();
    debug!(theme = %session.theme, "toggle_theme command");

    let pressed = session.theme.is_light();
    session.set_status(if pressed {
        "Light theme enabled."
    } else {
        "Dark theme enabled."
    });

    ThemeResponse {
        theme: session.theme,
        pressed,
    }
}
