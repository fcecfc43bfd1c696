//! # Error Types
//!
//! Domain-specific error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loja-core errors (this file)                                          │
//! │  ├── CoreError        - Ledger and report failures                     │
//! │  ├── StoreError       - Record Store failures (any backend)            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  loja-db errors (separate crate)                                       │
//! │  └── DbError          - SQLite failures, converted into StoreError     │
//! │                                                                         │
//! │  HTTP errors (apps/api)                                                │
//! │  └── ApiError         - What clients see (serialized)                  │
//! │                                                                         │
//! │  Flow: DbError → StoreError → CoreError → ApiError → Client            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The Record Store failed. Never retried by the core.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures raised by a [`RecordStore`](crate::store::RecordStore).
///
/// Every backend collapses its own failure modes (connection loss, constraint
/// violation, lock poisoning) into this generic "store unavailable" error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates an `Unavailable` error from any displayable message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable(message.into())
    }

    /// The underlying store message.
    pub fn message(&self) -> &str {
        match self {
            StoreError::Unavailable(msg) => msg,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the HTTP boundary before a request reaches the ledger or the
/// Record Store, so it never travels through [`CoreError`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a decimal that does not fit in cents).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for Record Store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
