//! # Commands
//!
//! One function per user event. Commands take the session explicitly and
//! return a response DTO (or an [`ApiError`](crate::error::ApiError)); they
//! never touch the terminal.
//!
//! | Event          | Command                     |
//! |----------------|-----------------------------|
//! | form submit    | [`items::add_item`]         |
//! | clear button   | [`items::clear_items`]      |
//! | theme button   | [`theme::toggle_theme`]     |
//! | render         | [`items::get_items`]        |

pub mod items;
pub mod theme;

pub use items::{add_item, clear_items, get_items, ItemsResponse};
pub use theme::{toggle_theme, ThemeResponse};
