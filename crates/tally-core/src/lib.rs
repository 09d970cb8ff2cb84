//! # tally-core: Pure List Logic for Tally
//!
//! This crate owns the item list and everything derived from it. It has
//! zero I/O dependencies: rendering, input and currency formatting live in
//! the front end (`tally-cli`).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 View Binder (tally-cli)                         │   │
//! │  │    add ──► clear ──► theme ──► render list + summary           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain method calls                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────────┐  ┌───────────────┐          │   │
//! │  │   │   types   │  │     store     │  │  validation   │          │   │
//! │  │   │   Item    │  │ ItemListStore │  │  name / price │          │   │
//! │  │   │           │  │  ListSummary  │  │               │          │   │
//! │  │   └───────────┘  └───────────────┘  └───────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO FORMATTING • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` value
//! - [`store`] - `ItemListStore` and its derived `ListSummary`
//! - [`error`] - Validation error type
//! - [`validation`] - Name and price rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::ItemListStore;
//!
//! let mut store = ItemListStore::new();
//! store.append("Mouse", "19.99").unwrap();
//!
//! assert_eq!(store.count(), 1);
//! assert!((store.total() - 19.99).abs() < 1e-9);
//! assert!(store.append("", "5").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use store::{ItemListStore, ListSummary};
pub use types::Item;

// =============================================================================
// Seed Data
// =============================================================================

/// Seed list used when no items are configured.
///
/// Notebook $3.50, Headphones $29.99, USB-C Cable $8.25.
pub fn default_seed_items() -> Vec<Item> {
    vec![
        Item::from_parts("Notebook", 3.50),
        Item::from_parts("Headphones", 29.99),
        Item::from_parts("USB-C Cable", 8.25),
    ]
}
