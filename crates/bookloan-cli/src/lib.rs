//! # BookLoan CLI
//!
//! Interactive console for the BookLoan checkout simulation.
//!
//! ```text
//! catalog ─► selection ─► user type ─► validate ─► process (3 s each) ─► bill
//! ```
//!
//! The rules live in `bookloan-rules`; this crate owns configuration, the
//! prompts, and the console rendering.

pub mod config;
pub mod session;

pub use config::CliConfig;
pub use session::{LoanSession, SessionOutcome};
