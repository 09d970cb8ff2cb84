//! # Error Types
//!
//! Errors surfaced by the terminal front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  add Pen abc                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  ValidationError::NotANumber ─────────────► ApiError ──────────►│  │
//! │  │                                           (status line)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Startup:  ConfigError / io::Error ──► AppError ──► exit code 1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::ValidationError;
use thiserror::Error;

use crate::state::ConfigError;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands.
///
/// ## Serialization
/// This is what the `json` view would carry for a failed command:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "kind": "not_a_number",
///   "message": "Price \"abc\" is not a valid number."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Finer-grained reason, e.g. the validation variant
    pub kind: &'static str,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Input line was not a known command
    UnknownCommand,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, kind: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            code,
            kind,
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    pub fn unknown_command(command: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            "unknown_command",
            format!(
                "Unknown command \"{}\". Type \"help\" for a list of commands.",
                command
            ),
        )
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.kind(), err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// App Error
// =============================================================================

/// Fatal errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading input or writing the view failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON view could not be produced.
    #[error("Failed to encode JSON view: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Unit Tests
// =============================================================================
