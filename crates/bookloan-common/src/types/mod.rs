//! Core BookLoan types

pub mod book;
pub mod catalog;
pub mod loan_state;
pub mod money;
pub mod user_type;
