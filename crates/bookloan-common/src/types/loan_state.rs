//! Loan lifecycle
//!
//! ```text
//! Pending ──► OnLoan ──► Returned
//!    │
//!    └──────► Failed(reason)
//! ```
//!
//! `Returned` is reserved for a return flow; checkout never produces it.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// State of one loan attempt for one book
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum LoanState {
    /// Passed validation, waiting for processing
    #[default]
    Pending,
    /// Checked out to the borrower
    OnLoan,
    /// Back on the shelf
    Returned,
    /// Rejected, with a human-readable reason
    Failed(String),
}

impl LoanState {
    pub fn failed(reason: impl Into<String>) -> Self {
        LoanState::Failed(reason.into())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoanState::Failed(_))
    }

    pub fn is_on_loan(&self) -> bool {
        matches!(self, LoanState::OnLoan)
    }

    /// No further transitions happen within a checkout
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoanState::Pending)
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            LoanState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: &LoanState) -> bool {
        matches!(
            (self, next),
            (LoanState::Pending, LoanState::OnLoan)
                | (LoanState::Pending, LoanState::Failed(_))
                | (LoanState::OnLoan, LoanState::Returned)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanState::Pending => "Pending",
            LoanState::OnLoan => "On Loan",
            LoanState::Returned => "Returned",
            LoanState::Failed(_) => "Failed",
        }
    }
}

impl From<ValidationError> for LoanState {
    fn from(err: ValidationError) -> Self {
        LoanState::Failed(err.to_string())
    }
}
