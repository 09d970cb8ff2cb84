//! # Domain Types
//!
//! ## Item
//! ```text
//! ┌─────────────────────────┐
//! │          Item           │
//! │  ─────────────────────  │
//! │  name   (trimmed, ≠ "") │
//! │  price  (finite, ≥ 0)   │
//! └─────────────────────────┘
//! ```
//!
//! Items have no identity beyond their position in the list: two items
//! with the same name and price are both kept.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::validation::{validate_item_name, validate_price};

// =============================================================================
// Item
// =============================================================================

/// A named entry with a non-negative price.
///
/// Fields are private so a stored item cannot be edited in place; the only
/// way to build one from outside the crate is [`Item::new`] (or
/// [`crate::ItemListStore::append`]), both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    price: f64,
}

impl Item {
    /// Builds a validated item from a name and an already numeric price.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Item, ValidationError};
    ///
    /// let item = Item::new("  Notebook ", 3.5).unwrap();
    /// assert_eq!(item.name(), "Notebook");
    ///
    /// assert_eq!(Item::new(" ", 1.0), Err(ValidationError::EmptyName));
    /// assert!(Item::new("Pen", -1.0).is_err());
    /// ```
    pub fn new(name: &str, price: f64) -> ValidationResult<Self> {
        let name = validate_item_name(name)?;
        let price = validate_price(price)?;
        Ok(Item { name, price })
    }

    /// Builds an item from parts already known to be valid.
    pub(crate) fn from_parts(name: impl Into<String>, price: f64) -> Self {
        Item {
            name: name.into(),
            price,
        }
    }

    /// The trimmed display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The price as a plain number. Formatting is the caller's job.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Re-checks the item invariants and returns the normalized item
    /// (trimmed name, `-0` price as `0`).
    ///
    /// Deserialized items bypass [`Item::new`], so anything read from a
    /// config file should be passed through this before it reaches a store.
    pub fn validated(&self) -> ValidationResult<Item> {
        Item::new(&self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
