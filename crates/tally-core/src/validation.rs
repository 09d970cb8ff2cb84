//! # Validation Module
//!
//! Input rules for items entered through the add form.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  append(name, raw_price)                                                │
//! │       │                                                                 │
//! │       ├── name.trim() empty?          → EmptyName                       │
//! │       │                                                                 │
//! │       ├── raw_price.trim() unparsable → NotANumber                      │
//! │       │   (also NaN / inf)                                              │
//! │       │                                                                 │
//! │       ├── price < 0?                  → NegativePrice                   │
//! │       │                                                                 │
//! │       └── OK → Item { name, price }                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The name is checked first, so `append("", "abc")` reports `EmptyName`.

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Mouse ").unwrap(), "Mouse");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a raw price string as typed into the form.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must parse as a finite number (`"inf"` and `"NaN"` are rejected)
/// - Must be zero or more; `-0` becomes `0`
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_price;
///
/// assert_eq!(parse_price(" 19.99 ").unwrap(), 19.99);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            input: trimmed.to_string(),
        });
    }

    validate_price(value)
}

/// Validates an already numeric price.
///
/// Returns the price with negative zero folded into zero.
pub fn validate_price(value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            input: value.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::NegativePrice { value });
    }

    // -0.0 + 0.0 == +0.0
    Ok(value + 0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
