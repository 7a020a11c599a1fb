//! # BookLoan Common
//!
//! Shared types and errors for the BookLoan checkout simulation.
//!
//! ## Core Types
//!
//! - [`Book`]/[`BookKind`]: catalog entries, physical or digital
//! - [`UserType`]: borrower category with its discount rate
//! - [`LoanState`]: lifecycle of one loan attempt
//! - [`Catalog`]: ordered, read-only list of books
//!
//! ## Money
//!
//! Amounts are [`rust_decimal::Decimal`]; [`types::money`] holds the two
//! console rendering conventions.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{LoanError, Result, ValidationError};
pub use types::{
    book::{Book, BookKind},
    catalog::Catalog,
    loan_state::LoanState,
    user_type::UserType,
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// BookLoan version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Price multiplier for DRM-protected digital copies (+10%)
pub const DRM_SURCHARGE: Decimal = dec!(1.10);

/// Late fee charged per overdue day
pub const DEFAULT_LATE_FEE_PER_DAY: Decimal = dec!(500);

/// Simulated checkout activation time in milliseconds
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 3000;
