//! Loan rules engine
//!
//! Stateless rules over [`Book`] and [`UserType`] values:
//! - Final cost per book variant
//! - Eligibility validation
//! - User-type discounts and late fees
//! - Simulated asynchronous checkout

use bookloan_common::{Book, BookKind, LoanState, UserType, ValidationError};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::report::{LoanReport, LoanSummary};
use crate::LoanRulesConfig;

/// Pricing, validation, and checkout rules
#[derive(Debug, Clone, Default)]
pub struct LoanRulesEngine {
    config: LoanRulesConfig,
}

impl LoanRulesEngine {
    pub fn new(config: LoanRulesConfig) -> Self {
        Self { config }
    }

    pub fn processing_delay(&self) -> Duration {
        self.config.processing_delay
    }

    /// Price charged for one book
    pub fn final_cost(&self, book: &Book) -> Decimal {
        book.final_cost()
    }

    /// Fee for returning `days_late` days after the due date.
    ///
    /// Non-positive values, including negative ones, owe nothing. A fee too
    /// large for `Decimal` saturates at `Decimal::MAX`.
    pub fn late_fee(&self, days_late: i32) -> Decimal {
        if days_late < 0 {
            warn!(days_late, "Negative days late, charging no fee");
        }
        if days_late <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(days_late)
            .checked_mul(self.config.late_fee_per_day)
            .unwrap_or_else(|| {
                warn!(days_late, "Late fee overflow, saturating");
                Decimal::MAX
            })
    }

    /// Discount owed to `user_type` on `subtotal`
    pub fn discount_amount(&self, subtotal: Decimal, user_type: UserType) -> Decimal {
        subtotal * user_type.discount_rate()
    }

    /// First eligibility rule the book breaks, if any
    pub fn check_eligibility(&self, book: &Book) -> Result<(), ValidationError> {
        if book.base_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice);
        }
        if book.loan_days < 0 {
            return Err(ValidationError::NegativeLoanDays);
        }
        if let BookKind::Physical { reference_only: true } = book.kind {
            return Err(ValidationError::ReferenceOnly);
        }
        Ok(())
    }

    /// Validate a book for loan: `Pending` when eligible, otherwise
    /// `Failed` with the reason.
    pub fn validate_loan(&self, book: &Book) -> LoanState {
        match self.check_eligibility(book) {
            Ok(()) => LoanState::Pending,
            Err(reason) => {
                debug!(title = %book.title, %reason, "Book failed validation");
                reason.into()
            }
        }
    }

    /// Validate and then simulate checkout.
    ///
    /// Ineligible books fail immediately. Eligible books wait out the
    /// configured processing delay and always end up `OnLoan`.
    #[instrument(skip(self, book), fields(title = %book.title))]
    pub async fn process_loan(&self, book: &Book) -> LoanState {
        let state = self.validate_loan(book);
        if state.is_failed() {
            return state;
        }

        debug!(delay_ms = self.config.processing_delay.as_millis() as u64, "Processing loan");
        tokio::time::sleep(self.config.processing_delay).await;

        let next = LoanState::OnLoan;
        debug_assert!(state.can_transition_to(&next));
        info!("Loan activated");
        next
    }

    /// Process books one at a time in the given order
    pub async fn process_all(&self, books: &[Book]) -> Vec<(Book, LoanState)> {
        let mut results = Vec::with_capacity(books.len());
        for book in books {
            let state = self.process_loan(book).await;
            results.push((book.clone(), state));
        }
        results
    }

    /// Count, variant split, total and average cost
    pub fn build_report(&self, books: &[Book]) -> LoanReport {
        LoanReport::from_books(books)
    }

    /// Subtotal, discount, fine, and total for a checkout
    pub fn summary_total(&self, books: &[Book], user_type: UserType, days_late: i32) -> LoanSummary {
        let subtotal: Decimal = books.iter().map(|book| self.final_cost(book)).sum();
        let discount = self.discount_amount(subtotal, user_type);
        let fine = self.late_fee(days_late);
        LoanSummary::new(user_type, days_late, subtotal, discount, fine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookloan_common::Catalog;
    use rust_decimal_macros::dec;

    fn engine() -> LoanRulesEngine {
        LoanRulesEngine::default()
    }

    #[test]
    fn test_late_fee() {
        let engine = engine();
        assert_eq!(engine.late_fee(3), dec!(1500));
        assert_eq!(engine.late_fee(0), Decimal::ZERO);
        assert_eq!(engine.late_fee(-2), Decimal::ZERO);
    }

    #[test]
    fn test_custom_late_fee_rate() {
        let engine = LoanRulesEngine::new(LoanRulesConfig {
            late_fee_per_day: dec!(250),
            ..LoanRulesConfig::default()
        });
        assert_eq!(engine.late_fee(4), dec!(1000));
    }

    #[test]
    fn test_late_fee_saturates_instead_of_overflowing() {
        let engine = LoanRulesEngine::new(LoanRulesConfig {
            late_fee_per_day: Decimal::MAX,
            ..LoanRulesConfig::default()
        });
        assert_eq!(engine.late_fee(2), Decimal::MAX);

        let books = vec![Book::physical("Data Structures", "Goodrich", dec!(12990), 7, false)];
        let summary = engine.summary_total(&books, UserType::Student, 2);
        assert_eq!(summary.fine, Decimal::MAX);
        assert_eq!(summary.total, Decimal::MAX);
    }

    #[test]
    fn test_discount_amount() {
        let engine = engine();
        assert_eq!(engine.discount_amount(dec!(1000), UserType::Student), dec!(100));
        assert_eq!(engine.discount_amount(dec!(1000), UserType::Faculty), dec!(150));
        assert_eq!(engine.discount_amount(dec!(1000), UserType::External), Decimal::ZERO);
    }

    #[test]
    fn test_validate_negative_price() {
        let book = Book::physical("Broken", "X", dec!(-1), 7, false);
        assert_eq!(
            engine().validate_loan(&book),
            LoanState::failed("Invalid price: cannot be negative")
        );
    }

    #[test]
    fn test_validate_negative_days() {
        let book = Book::digital("Broken", "X", dec!(10), -1, false);
        assert_eq!(
            engine().validate_loan(&book),
            LoanState::failed("Invalid loan days: cannot be negative")
        );
    }

    #[test]
    fn test_price_checked_before_days() {
        let book = Book::standard("Broken", "X", dec!(-5), -5);
        assert_eq!(
            engine().check_eligibility(&book),
            Err(ValidationError::NegativePrice)
        );
    }

    #[test]
    fn test_validate_reference_book() {
        let book = Book::physical("Encyclopedia", "Varios", dec!(15990), 0, true);
        assert_eq!(
            engine().validate_loan(&book),
            LoanState::failed("Reference book not available for loan")
        );
    }

    #[test]
    fn test_validate_eligible_books_are_pending() {
        let engine = engine();
        for book in Catalog::seeded().iter().filter(|b| !b.is_reference_only()) {
            assert_eq!(engine.validate_loan(book), LoanState::Pending);
        }
        let free = Book::standard("Free", "X", Decimal::ZERO, 0);
        assert_eq!(engine.validate_loan(&free), LoanState::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_loan_waits_then_activates() {
        let engine = engine();
        let book = Book::digital("Kotlin Programming", "JetBrains", dec!(9990), 10, true);

        let start = tokio::time::Instant::now();
        let state = engine.process_loan(&book).await;

        assert_eq!(state, LoanState::OnLoan);
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_loan_failure_skips_delay() {
        let engine = engine();
        let book = Book::physical("Encyclopedia", "Varios", dec!(15990), 0, true);

        let start = tokio::time::Instant::now();
        let state = engine.process_loan(&book).await;

        assert!(state.is_failed());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_all_keeps_order() {
        let engine = engine();
        let catalog = Catalog::seeded();

        let results = engine.process_all(catalog.books()).await;

        let titles: Vec<_> = results.iter().map(|(b, _)| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Data Structures", "Encyclopedia", "Kotlin Programming", "Basic Algorithms"]
        );
        assert!(results[1].1.is_failed());
        assert_eq!(results.iter().filter(|(_, s)| s.is_on_loan()).count(), 3);
    }

    #[test]
    fn test_student_checkout_summary() {
        let engine = engine();
        let catalog = Catalog::seeded();
        let eligible: Vec<Book> = catalog
            .iter()
            .filter(|b| !engine.validate_loan(b).is_failed())
            .cloned()
            .collect();
        assert_eq!(eligible.len(), 3);

        let summary = engine.summary_total(&eligible, UserType::Student, 0);
        assert_eq!(summary.subtotal, dec!(35969));
        assert_eq!(summary.discount, dec!(3596.9));
        assert_eq!(summary.fine, Decimal::ZERO);
        assert_eq!(summary.total, dec!(32372.1));
    }

    #[test]
    fn test_summary_with_late_fee() {
        let engine = engine();
        let books = vec![Book::physical("Data Structures", "Goodrich", dec!(12990), 7, false)];
        let summary = engine.summary_total(&books, UserType::Faculty, 2);
        assert_eq!(summary.discount, dec!(1948.5));
        assert_eq!(summary.fine, dec!(1000));
        assert_eq!(summary.total, dec!(12041.5));
    }
}
