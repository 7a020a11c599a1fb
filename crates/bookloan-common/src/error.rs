//! Error types for BookLoan
//!
//! Rule failures (a negative price, a reference copy) are ordinary data and
//! travel as [`LoanState::Failed`](crate::LoanState::Failed). The enums here
//! cover the eligibility reasons themselves and the infrastructure faults
//! around the rules: reading input, loading a catalog, parsing config.

use thiserror::Error;

/// Result type alias using LoanError
pub type Result<T> = std::result::Result<T, LoanError>;

/// Unified error type for BookLoan operations
#[derive(Debug, Error)]
pub enum LoanError {
    // Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Console / file I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Reasons a book is not eligible for loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid price: cannot be negative")]
    NegativePrice,

    #[error("Invalid loan days: cannot be negative")]
    NegativeLoanDays,

    #[error("Reference book not available for loan")]
    ReferenceOnly,
}

impl From<serde_json::Error> for LoanError {
    fn from(err: serde_json::Error) -> Self {
        LoanError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for LoanError {
    fn from(err: std::io::Error) -> Self {
        LoanError::Io(err.to_string())
    }
}
