//! Interactive checkout session
//!
//! Drives one checkout over line-oriented input and output: show the
//! catalog, read a selection and a user type, validate, process, and print
//! the bill. Rule failures are reported on the output and end the session
//! early; only I/O faults surface as errors.

use bookloan_common::{types::money, Book, Catalog, LoanState, Result, UserType};
use bookloan_rules::{LoanRulesEngine, LoanSummary};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// No selection token matched a catalog entry
    NoSelection,
    /// Every selected book failed validation
    NoValidBooks,
    /// No book reached `OnLoan`
    NoneProcessed,
    /// Books were placed on loan and billed
    Completed {
        loaned: Vec<Book>,
        summary: LoanSummary,
    },
}

/// One checkout against a fixed catalog
#[derive(Debug, Clone)]
pub struct LoanSession {
    engine: LoanRulesEngine,
    catalog: Catalog,
    days_late: i32,
    show_report: bool,
    detailed_catalog: bool,
}

impl LoanSession {
    pub fn new(engine: LoanRulesEngine, catalog: Catalog) -> Self {
        Self {
            engine,
            catalog,
            days_late: 0,
            show_report: false,
            detailed_catalog: false,
        }
    }

    /// Overdue days to bill
    pub fn with_days_late(mut self, days_late: i32) -> Self {
        self.days_late = days_late;
        self
    }

    /// Print the loan report after the summary
    pub fn with_report(mut self, show_report: bool) -> Self {
        self.show_report = show_report;
        self
    }

    /// List each book with its description and loan period
    pub fn with_detailed_catalog(mut self, detailed_catalog: bool) -> Self {
        self.detailed_catalog = detailed_catalog;
        self
    }

    pub async fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "=== BOOKLOAN SYSTEM ===")?;
        writeln!(output)?;
        self.print_catalog(output)?;

        // 1. Selection
        write!(output, "Select books for loan (comma-separated numbers): ")?;
        output.flush()?;
        let answer = read_answer(input)?.unwrap_or_default();
        let selected = self.catalog.parse_selection(&answer);
        info!(input = %answer, selected = selected.len(), "Parsed selection");

        if selected.is_empty() {
            writeln!(output, "No valid books selected.")?;
            return Ok(SessionOutcome::NoSelection);
        }

        // 2. User type
        write!(output, "User type (student/faculty/external): ")?;
        output.flush()?;
        let user_type = read_answer(input)?
            .map(|answer| UserType::from_input(&answer))
            .unwrap_or_default();
        info!(%user_type, "Resolved user type");

        // 3. Validation
        writeln!(output)?;
        writeln!(output, "Validating request...")?;
        let mut valid = Vec::with_capacity(selected.len());
        for index in selected {
            let Some(book) = self.catalog.get(index) else {
                continue;
            };
            match self.engine.validate_loan(book) {
                LoanState::Failed(reason) => {
                    writeln!(
                        output,
                        "- Book #{} ({}) was not selected, it cannot be loaned. OK",
                        index + 1,
                        reason
                    )?;
                }
                _ => {
                    if book.has_drm() {
                        writeln!(output, "- DRM check for selected digital books... OK")?;
                    }
                    valid.push(book.clone());
                }
            }
        }

        if valid.is_empty() {
            writeln!(output, "No valid books for loan.")?;
            return Ok(SessionOutcome::NoValidBooks);
        }

        // 4. Processing
        writeln!(output)?;
        writeln!(output, "Processing loan...")?;
        let mut loaned = Vec::with_capacity(valid.len());
        for book in valid {
            writeln!(output, "Processing loan of '{}'...", book.title)?;
            output.flush()?;
            match self.engine.process_loan(&book).await {
                LoanState::OnLoan => loaned.push(book),
                LoanState::Failed(reason) => {
                    warn!(title = %book.title, %reason, "Loan processing failed");
                    writeln!(output, "Error processing {}: {}", book.title, reason)?;
                }
                other => writeln!(output, "{}: {}", book.title, other.label())?,
            }
        }

        if loaned.is_empty() {
            writeln!(output, "Could not process loans.")?;
            return Ok(SessionOutcome::NoneProcessed);
        }

        writeln!(output, "Status: {}", LoanState::OnLoan.label())?;
        writeln!(output)?;

        // 5. Bill
        let summary = self.engine.summary_total(&loaned, user_type, self.days_late);
        self.print_summary(output, &loaned, &summary)?;

        if self.show_report {
            writeln!(output)?;
            writeln!(output, "{}", self.engine.build_report(&loaned))?;
        }

        debug!(total = %summary.total, books = loaned.len(), "Checkout complete");
        Ok(SessionOutcome::Completed { loaned, summary })
    }

    fn print_catalog<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.detailed_catalog {
            return self.print_detailed_catalog(output);
        }
        writeln!(output, "Available catalog:")?;
        for (i, book) in self.catalog.iter().enumerate() {
            let line = format!("{}. {} - $ {}", i + 1, book.title, money::whole(book.base_price));
            match book.availability_label() {
                "" => writeln!(output, "{}", line)?,
                label => writeln!(output, "{} {}", line, label)?,
            }
        }
        writeln!(output)?;
        Ok(())
    }

    fn print_detailed_catalog<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "=== BOOK CATALOG ===")?;
        for (i, book) in self.catalog.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, book.description())?;
            if book.is_reference_only() {
                writeln!(output, "   This book is NOT available for loan")?;
            }
            writeln!(output, "   Loan days: {}", book.loan_days)?;
            writeln!(output)?;
        }
        Ok(())
    }

    fn print_summary<W: Write>(
        &self,
        output: &mut W,
        loaned: &[Book],
        summary: &LoanSummary,
    ) -> Result<()> {
        writeln!(output, "=== LOAN SUMMARY ===")?;
        for book in loaned {
            let cost = money::whole(self.engine.final_cost(book));
            match book.kind_label() {
                "" => writeln!(output, "- {}: $ {}", book.title, cost)?,
                kind => writeln!(output, "- {} ({}): $ {}", book.title, kind, cost)?,
            }
        }
        writeln!(output)?;

        writeln!(output, "Subtotal: $ {}", money::fixed2(summary.subtotal))?;
        writeln!(
            output,
            "Discount {} ({}%): -$ {}",
            summary.user_type.label(),
            summary.user_type.discount_percent(),
            money::fixed2(summary.discount)
        )?;
        if summary.fine > Decimal::ZERO {
            writeln!(
                output,
                "Late fee for {} days: +$ {}",
                summary.days_late,
                money::fixed2(summary.fine)
            )?;
        } else {
            writeln!(output, "Late fee: $ {} (no delay)", money::fixed2(summary.fine))?;
        }
        writeln!(output)?;
        writeln!(output, "TOTAL: $ {}", money::fixed2(summary.total))?;
        writeln!(output)?;
        writeln!(output, "Final status: {}", LoanState::OnLoan.label())?;
        writeln!(
            output,
            "Estimated pickup/digital activation time: {}",
            format_delay(self.engine.processing_delay())
        )?;
        Ok(())
    }
}

/// Next input line without its line ending; `None` at end of input
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn format_delay(delay: Duration) -> String {
    if delay.subsec_millis() == 0 {
        format!("{} s", delay.as_secs())
    } else {
        format!("{} ms", delay.as_millis())
    }
}
