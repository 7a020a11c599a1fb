//! # Loan Rules
//!
//! Pricing, validation, discount, late-fee, and checkout simulation rules
//! for BookLoan.
//!
//! ## Billing Formula
//!
//! ```text
//! Total = Subtotal - Discount + Fine
//! ```
//!
//! Where:
//! - Subtotal: sum of each book's final cost (reference copies free, DRM +10%)
//! - Discount: subtotal × user-type rate (student 10%, faculty 15%)
//! - Fine: overdue days × late fee per day

pub mod engine;
pub mod report;

pub use engine::LoanRulesEngine;
pub use report::{LoanReport, LoanSummary};

use bookloan_common::{DEFAULT_LATE_FEE_PER_DAY, DEFAULT_PROCESSING_DELAY_MS};
use rust_decimal::Decimal;
use std::time::Duration;

/// Rules engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRulesConfig {
    /// Simulated checkout activation time per book
    pub processing_delay: Duration,
    /// Late fee per overdue day
    pub late_fee_per_day: Decimal,
}

impl Default for LoanRulesConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
            late_fee_per_day: DEFAULT_LATE_FEE_PER_DAY,
        }
    }
}
