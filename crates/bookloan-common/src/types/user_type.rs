//! Borrower categories and their discount rates

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Borrower category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// 10% discount
    Student,
    /// 15% discount
    Faculty,
    /// No discount
    #[default]
    External,
}

impl UserType {
    /// Discount rate applied to the subtotal
    pub fn discount_rate(&self) -> Decimal {
        match self {
            UserType::Student => dec!(0.10),
            UserType::Faculty => dec!(0.15),
            UserType::External => Decimal::ZERO,
        }
    }

    /// Discount rate as a whole percentage
    pub fn discount_percent(&self) -> u32 {
        (self.discount_rate() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Faculty => "Faculty",
            UserType::External => "External",
        }
    }

    /// Parse a console answer; matching is case-insensitive and anything
    /// unrecognized is treated as an external borrower.
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "student" => UserType::Student,
            "faculty" => UserType::Faculty,
            _ => UserType::External,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
