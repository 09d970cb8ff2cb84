//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ValidationError  - Rejected item input (name / price)            │
//! │                                                                         │
//! │  tally-cli errors (in app)                                             │
//! │  ├── ApiError         - What the view shows (code + message)          │
//! │  ├── ConfigError      - Bad config file / currency / seed             │
//! │  └── AppError         - Startup and I/O failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → status line                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the rejected input in the message
//! 3. Each variant maps to one user-facing message
//! 4. Validation errors never mutate the store

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised when appending an item.
///
/// All three are recoverable: the caller shows the message and the store
/// keeps its previous contents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    #[error("Please enter an item name.")]
    EmptyName,

    /// Price could not be parsed, or parsed to NaN / infinity.
    #[error("Price \"{input}\" is not a valid number.")]
    NotANumber { input: String },

    /// Price parsed but is below zero.
    #[error("Price must be zero or more (got {value}).")]
    NegativePrice { value: f64 },
}

impl ValidationError {
    /// Stable, machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "empty_name",
            ValidationError::NotANumber { .. } => "not_a_number",
            ValidationError::NegativePrice { .. } => "negative_price",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Please enter an item name."
        );

        let err = ValidationError::NotANumber {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Price \"abc\" is not a valid number.");

        let err = ValidationError::NegativePrice { value: -1.0 };
        assert_eq!(err.to_string(), "Price must be zero or more (got -1).");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ValidationError::EmptyName.kind(), "empty_name");
        assert_eq!(
            ValidationError::NotANumber {
                input: String::new()
            }
            .kind(),
            "not_a_number"
        );
        assert_eq!(
            ValidationError::NegativePrice { value: -0.5 }.kind(),
            "negative_price"
        );
    }
}
