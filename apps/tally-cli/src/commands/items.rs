//! # Item Commands
//!
//! Commands for the item list: the form submit and the clear button, plus
//! the read-only list view.
//!
//! ## List Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    List Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_item   ┌──────────┐  clear_items  ┌──────────┐      │
//! │  │  Seeded  │───────────►│  Grown   │─────────────►│  Empty   │      │
//! │  │  (3)     │            │  (n+1)   │              │  (0)     │      │
//! │  └──────────┘            └──────────┘              └──────────┘      │
//! │        │                      ▲                          │            │
//! │        └── rejected input ────┘ (unchanged)   add_item ──┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command also writes the status line.

use serde::{Deserialize, Serialize};
use tally_core::{Item, ItemListStore, ListSummary};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Session;

/// List response including items and derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub items: Vec<Item>,
    pub summary: ListSummary,
}

impl From<&ItemListStore> for ItemsResponse {
    fn from(store: &ItemListStore) -> Self {
        ItemsResponse {
            items: store.items().to_vec(),
            summary: store.summary(),
        }
    }
}

/// Gets the current list contents.
pub fn get_items(session: &Session) -> ItemsResponse {
    debug!("get_items command");
    ItemsResponse::from(&session.store)
}

/// Adds an item from the form fields.
///
/// ## Behavior
/// - Valid input: item appended at the end, status `Added "<name>" successfully.`
/// - Invalid input: store untouched, status is the validation message
///
/// ## Arguments
/// * `name` - Raw name field (trimmed by the store)
/// * `raw_price` - Raw price field (parsed by the store)
pub fn add_item(
    session: &mut Session,
    name: &str,
    raw_price: &str,
) -> Result<ItemsResponse, ApiError> {
    debug!(name = %name, price = %raw_price, "add_item command");

    match session.store.append(name, raw_price) {
        Ok(item) => {
            info!(name = %item.name(), price = item.price(), count = session.store.count(), "Item added");
            session.set_status(format!("Added \"{}\" successfully.", item.name()));
            Ok(ItemsResponse::from(&session.store))
        }
        Err(err) => {
            debug!(kind = err.kind(), "Item rejected");
            let err = ApiError::from(err);
            session.set_status(err.message.clone());
            Err(err)
        }
    }
}

/// Clears all items from the list.
///
/// ## Returns
/// Empty list
pub fn clear_items(session: &mut Session) -> ItemsResponse {
    debug!("clear_items command");

    let removed = session.store.count();
    session.store.clear();
    info!(removed, "List cleared");

    session.set_status("List cleared.");
    ItemsResponse::from(&session.store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;

    fn session() -> Session {
        Session::new(&AppConfig::default())
    }

    #[test]
    fn test_get_items() {
        let session = session();
        let response = get_items(&session);
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.summary.count, 3);
        assert!((response.summary.total - 41.74).abs() < 1e-9);
    }

    #[test]
    fn test_add_item_success() {
        let mut session = session();

        let response = add_item(&mut session, "Mouse", "19.99").unwrap();

        assert_eq!(response.summary.count, 4);
        assert!((response.summary.total - 61.73).abs() < 1e-9);
        assert_eq!(response.items.last().map(Item::name), Some("Mouse"));
        assert_eq!(session.status, "Added \"Mouse\" successfully.");
    }

    #[test]
    fn test_add_item_status_uses_trimmed_name() {
        let mut session = session();
        add_item(&mut session, "  Mouse  ", "5").unwrap();
        assert_eq!(session.status, "Added \"Mouse\" successfully.");
    }

    #[test]
    fn test_add_item_rejected() {
        let mut session = session();

        let err = add_item(&mut session, "Pen", "abc").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.kind, "not_a_number");
        assert_eq!(session.status, err.message);
        assert_eq!(session.store.count(), 3);
    }

    #[test]
    fn test_add_item_each_error_kind() {
        let mut session = session();

        let cases = [
            ("", "5", "empty_name"),
            ("Pen", "-1", "negative_price"),
            ("Pen", "abc", "not_a_number"),
        ];

        for (name, price, kind) in cases {
            let err = add_item(&mut session, name, price).unwrap_err();
            assert_eq!(err.kind, kind);
        }
        assert_eq!(session.store.count(), 3);
    }

    #[test]
    fn test_clear_items() {
        let mut session = session();

        let response = clear_items(&mut session);

        assert!(response.items.is_empty());
        assert_eq!(response.summary.count, 0);
        assert_eq!(response.summary.total, 0.0);
        assert_eq!(response.summary.average, 0.0);
        assert_eq!(session.status, "List cleared.");

        // clearing again is harmless
        let response = clear_items(&mut session);
        assert_eq!(response.summary.count, 0);
    }

    #[test]
    fn test_response_json_shape() {
        let session = session();
        let json = serde_json::to_value(get_items(&session)).unwrap();
        assert_eq!(json["items"][0]["name"], "Notebook");
        assert_eq!(json["items"][0]["price"], 3.5);
        assert_eq!(json["summary"]["count"], 3);
    }
}
