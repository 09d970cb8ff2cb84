//! # Item List Store
//!
//! The authoritative list of items and the aggregates derived from it.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  View Event              Store Call              Sequence Change        │
//! │  ──────────              ──────────              ───────────────        │
//! │                                                                         │
//! │  Page load ─────────────► initialize(seed) ────► items = seed.clone()  │
//! │                                                                         │
//! │  Form submit ───────────► append(name, raw) ───► items.push(item)      │
//! │                                     │                                   │
//! │                                     └── Err ───► (unchanged)           │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  Render ────────────────► count/total/average ─► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregates are recomputed on every read, so they can never go stale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::types::Item;
use crate::validation::{parse_price, validate_item_name};

// =============================================================================
// Item List Store
// =============================================================================

/// Ordered list of items. Insertion order is display order.
///
/// ## Invariants
/// - Every stored item passed validation
/// - `count`, `total` and `average` always reflect the current items
/// - A failed `append` leaves the list untouched
#[derive(Debug, Clone, Default)]
pub struct ItemListStore {
    items: Vec<Item>,
}

impl ItemListStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ItemListStore { items: Vec::new() }
    }

    /// Creates a store holding a copy of `seed`.
    pub fn with_items(seed: &[Item]) -> Self {
        let mut store = ItemListStore::new();
        store.initialize(seed);
        store
    }

    /// Replaces the current contents with a copy of `seed`.
    ///
    /// The seed is assumed to be valid already (see [`Item::validate`]).
    pub fn initialize(&mut self, seed: &[Item]) {
        self.items = seed.to_vec();
    }

    /// Validates the form input and appends a new item at the end.
    ///
    /// ## Behavior
    /// - Name is trimmed; empty → `EmptyName`
    /// - Price is parsed; unparsable or non-finite → `NotANumber`
    /// - Price below zero → `NegativePrice`
    ///
    /// ## Returns
    /// The stored item. On error nothing is stored.
    pub fn append(&mut self, name: &str, raw_price: &str) -> ValidationResult<Item> {
        let name = validate_item_name(name)?;
        let price = parse_price(raw_price)?;

        let item = Item::from_parts(name, price);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes every item. Clearing an empty store is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all prices, `0` when empty.
    pub fn total(&self) -> f64 {
        // fold from +0.0: `sum()` on floats starts at -0.0
        self.items.iter().map(Item::price).fold(0.0, |acc, p| acc + p)
    }

    /// Mean price.
    ///
    /// Returns `0` for an empty store instead of dividing by zero, so the
    /// result is never NaN. When the total overflows to infinity the mean is
    /// taken over pre-divided prices, which keeps it finite.
    pub fn average(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }

        let n = self.items.len() as f64;
        let total = self.total();
        if total.is_finite() {
            return total / n;
        }

        self.items.iter().map(|item| item.price() / n).fold(0.0, |acc, p| acc + p)
    }

    /// Snapshot of the derived aggregates.
    pub fn summary(&self) -> ListSummary {
        ListSummary::from(self)
    }
}

// =============================================================================
// List Summary
// =============================================================================

/// Count, total and average taken together from one store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

impl From<&ItemListStore> for ListSummary {
    fn from(store: &ItemListStore) -> Self {
        ListSummary {
            count: store.count(),
            total: store.total(),
            average: store.average(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_seed_items;
    use crate::error::ValidationError;

    const EPSILON: f64 = 1e-9;

    fn seeded_store() -> ItemListStore {
        ItemListStore::with_items(&default_seed_items())
    }

    #[test]
    fn test_empty_store() {
        let store = ItemListStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert_eq!(store.total(), 0.0);
        assert!(store.total().is_sign_positive());
        assert_eq!(store.average(), 0.0);
        assert!(!store.average().is_nan());
    }

    #[test]
    fn test_initialize_with_seed() {
        let store = seeded_store();

        assert_eq!(store.count(), 3);
        assert!((store.total() - 41.74).abs() < EPSILON);
        assert!((store.average() - 13.913_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_initialize_count_matches_len() {
        let seeds: Vec<Vec<Item>> = vec![
            vec![],
            default_seed_items(),
            (0..25)
                .map(|i| Item::new(&format!("Item {i}"), i as f64).unwrap())
                .collect(),
        ];

        for seed in seeds {
            let mut store = ItemListStore::new();
            store.initialize(&seed);
            assert_eq!(store.count(), seed.len());
            assert_eq!(store.items(), seed.as_slice());
        }
    }

    #[test]
    fn test_initialize_replaces_contents() {
        let mut store = seeded_store();
        store.append("Mouse", "19.99").unwrap();

        let seed = vec![Item::new("Pen", 1.25).unwrap()];
        store.initialize(&seed);

        assert_eq!(store.count(), 1);
        assert_eq!(store.items()[0].name(), "Pen");
    }

    #[test]
    fn test_append_after_seed() {
        let mut store = seeded_store();

        let item = store.append("Mouse", "19.99").unwrap();

        assert_eq!(item.name(), "Mouse");
        assert_eq!(item.price(), 19.99);
        assert_eq!(store.count(), 4);
        assert!((store.total() - 61.73).abs() < EPSILON);
        assert_eq!(store.items().last(), Some(&item));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = ItemListStore::new();
        let names = ["b", "a", "c", "a"];

        for name in names {
            store.append(name, "1").unwrap();
        }

        let stored: Vec<&str> = store.items().iter().map(Item::name).collect();
        assert_eq!(stored, names);
    }

    #[test]
    fn test_append_trims_name() {
        let mut store = ItemListStore::new();
        let item = store.append("   Desk Lamp ", " 24.5 ").unwrap();
        assert_eq!(item.name(), "Desk Lamp");
        assert_eq!(item.price(), 24.5);
    }

    #[test]
    fn test_append_empty_name() {
        let mut store = seeded_store();
        assert_eq!(store.append("", "5"), Err(ValidationError::EmptyName));
        assert_eq!(store.append("   ", "5"), Err(ValidationError::EmptyName));
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_append_negative_price() {
        let mut store = seeded_store();
        assert_eq!(
            store.append("Pen", "-1"),
            Err(ValidationError::NegativePrice { value: -1.0 })
        );
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_append_not_a_number() {
        let mut store = seeded_store();
        assert!(matches!(
            store.append("Pen", "abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_name_checked_before_price() {
        let mut store = ItemListStore::new();
        assert_eq!(store.append(" ", "abc"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = ItemListStore::new();
        store.append("Pen", "1.5").unwrap();
        store.append("Pen", "1.5").unwrap();
        assert_eq!(store.count(), 2);
        assert!((store.total() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_clear() {
        let mut store = seeded_store();

        store.clear();

        assert_eq!(store.count(), 0);
        assert_eq!(store.total(), 0.0);
        assert_eq!(store.average(), 0.0);
    }

    #[test]
    fn test_average_stays_finite_when_total_overflows() {
        let mut store = ItemListStore::new();
        store.append("Yacht", "1e308").unwrap();
        store.append("Island", "1e308").unwrap();

        assert!(store.total().is_infinite());
        assert!(store.average().is_finite());
        assert!((store.average() / 1e308 - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = ItemListStore::new();
        store.clear();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.summary(), ItemListStore::new().summary());
    }

    #[test]
    fn test_summary_tracks_mutations() {
        let mut store = seeded_store();
        assert_eq!(store.summary().count, 3);

        store.append("Mouse", "19.99").unwrap();
        let summary = store.summary();
        assert_eq!(summary.count, 4);
        assert!((summary.total - 61.73).abs() < EPSILON);
        assert!((summary.average - 61.73 / 4.0).abs() < EPSILON);

        store.clear();
        let summary = store.summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, 0.0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ItemListStore::new().summary();
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["total"], 0.0);
        assert_eq!(json["average"], 0.0);
    }
}
