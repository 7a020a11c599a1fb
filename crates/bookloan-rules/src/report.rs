//! Billing summary and loan report

use bookloan_common::{types::money, Book, UserType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amounts owed for a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub user_type: UserType,
    pub days_late: i32,
    /// Sum of final costs
    pub subtotal: Decimal,
    /// User-type discount on the subtotal
    pub discount: Decimal,
    /// Late fee
    pub fine: Decimal,
    /// subtotal - discount + fine, saturating at `Decimal::MAX`
    pub total: Decimal,
}

impl LoanSummary {
    pub fn new(
        user_type: UserType,
        days_late: i32,
        subtotal: Decimal,
        discount: Decimal,
        fine: Decimal,
    ) -> Self {
        Self {
            user_type,
            days_late,
            subtotal,
            discount,
            fine,
            total: (subtotal - discount).saturating_add(fine),
        }
    }
}

/// Aggregate figures over the books placed on loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanReport {
    pub total_books: usize,
    pub physical_books: usize,
    pub digital_books: usize,
    pub total_cost: Decimal,
    /// total_cost / total_books, zero when empty
    pub average_cost: Decimal,
}

impl LoanReport {
    pub fn from_books(books: &[Book]) -> Self {
        let total_books = books.len();
        let total_cost: Decimal = books.iter().map(Book::final_cost).sum();
        let average_cost = if total_books > 0 {
            total_cost / Decimal::from(total_books)
        } else {
            Decimal::ZERO
        };

        Self {
            total_books,
            physical_books: books.iter().filter(|b| b.is_physical()).count(),
            digital_books: books.iter().filter(|b| b.is_digital()).count(),
            total_cost,
            average_cost,
        }
    }
}

impl fmt::Display for LoanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== LOAN REPORT ===")?;
        writeln!(f, "Total books on loan: {}", self.total_books)?;
        writeln!(f, "Physical books: {}", self.physical_books)?;
        writeln!(f, "Digital books: {}", self.digital_books)?;
        writeln!(f, "Total cost: ${}", money::plain(self.total_cost))?;
        write!(f, "Average price: ${}", money::fixed2(self.average_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookloan_common::Catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_report() {
        let report = LoanReport::from_books(&[]);
        assert_eq!(report.total_books, 0);
        assert_eq!(report.total_cost, Decimal::ZERO);
        assert_eq!(report.average_cost, Decimal::ZERO);
    }

    #[test]
    fn test_report_counts_variants() {
        let catalog = Catalog::seeded();
        let books = vec![
            catalog.books()[0].clone(),
            catalog.books()[2].clone(),
            catalog.books()[3].clone(),
        ];
        let report = LoanReport::from_books(&books);
        assert_eq!(report.total_books, 3);
        assert_eq!(report.physical_books, 1);
        assert_eq!(report.digital_books, 2);
        assert_eq!(report.total_cost, dec!(35969));

        let text = report.to_string();
        assert!(text.starts_with("=== LOAN REPORT ==="));
        assert!(text.contains("Total cost: $35969"));
        assert!(text.contains("Average price: $11989.67"));
    }

    #[test]
    fn test_standard_books_count_toward_total_only() {
        let books = vec![Book::standard("Notes", "Anon", dec!(40), 3)];
        let report = LoanReport::from_books(&books);
        assert_eq!(report.total_books, 1);
        assert_eq!(report.physical_books, 0);
        assert_eq!(report.digital_books, 0);
        assert_eq!(report.average_cost, dec!(40));
    }

    #[test]
    fn test_summary_total() {
        let summary = LoanSummary::new(UserType::Faculty, 2, dec!(1000), dec!(150), dec!(1000));
        assert_eq!(summary.total, dec!(1850));
    }
}
