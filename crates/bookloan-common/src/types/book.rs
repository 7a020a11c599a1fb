//! Book records
//!
//! A book is a plain record plus a closed [`BookKind`] that decides how it is
//! priced and whether it can leave the library at all.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money;
use crate::DRM_SURCHARGE;

/// Physical/digital specialization of a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookKind {
    /// Plain book with no specialization
    #[default]
    Standard,
    /// Paper copy; reference copies are for in-library use only
    Physical {
        #[serde(default)]
        reference_only: bool,
    },
    /// Digital copy; DRM-protected copies carry a surcharge
    Digital {
        #[serde(default)]
        drm: bool,
    },
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// List price before any surcharge. Negative values are representable so
    /// that validation can reject them.
    pub base_price: Decimal,
    /// Loan period in days
    pub loan_days: i32,
    #[serde(default)]
    pub kind: BookKind,
}

impl Book {
    /// Create a book with no specialization
    pub fn standard(
        title: impl Into<String>,
        author: impl Into<String>,
        base_price: Decimal,
        loan_days: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            base_price,
            loan_days,
            kind: BookKind::Standard,
        }
    }

    /// Create a physical book
    pub fn physical(
        title: impl Into<String>,
        author: impl Into<String>,
        base_price: Decimal,
        loan_days: i32,
        reference_only: bool,
    ) -> Self {
        Self {
            kind: BookKind::Physical { reference_only },
            ..Self::standard(title, author, base_price, loan_days)
        }
    }

    /// Create a digital book
    pub fn digital(
        title: impl Into<String>,
        author: impl Into<String>,
        base_price: Decimal,
        loan_days: i32,
        drm: bool,
    ) -> Self {
        Self {
            kind: BookKind::Digital { drm },
            ..Self::standard(title, author, base_price, loan_days)
        }
    }

    pub fn is_reference_only(&self) -> bool {
        matches!(self.kind, BookKind::Physical { reference_only: true })
    }

    pub fn has_drm(&self) -> bool {
        matches!(self.kind, BookKind::Digital { drm: true })
    }

    pub fn is_physical(&self) -> bool {
        matches!(self.kind, BookKind::Physical { .. })
    }

    pub fn is_digital(&self) -> bool {
        matches!(self.kind, BookKind::Digital { .. })
    }

    /// Price charged for this book
    ///
    /// Reference copies are free (they never leave the library), DRM copies
    /// cost 10% more, everything else costs its base price.
    pub fn final_cost(&self) -> Decimal {
        match self.kind {
            BookKind::Physical { reference_only: true } => Decimal::ZERO,
            BookKind::Digital { drm: true } => self.base_price * DRM_SURCHARGE,
            BookKind::Physical { .. } | BookKind::Digital { .. } | BookKind::Standard => {
                self.base_price
            }
        }
    }

    /// One-line description with the variant and final price
    pub fn description(&self) -> String {
        let price = money::plain(self.final_cost());
        let variant = match self.kind {
            BookKind::Standard => {
                return format!("{} by {} - Price: ${}", self.title, self.author, price)
            }
            BookKind::Physical { reference_only: true } => "Reference (not loanable)",
            BookKind::Physical { reference_only: false } => "Physical",
            BookKind::Digital { drm: true } => "Digital with DRM",
            BookKind::Digital { drm: false } => "Digital without DRM",
        };
        format!("{} by {} - {} - Price: ${}", self.title, self.author, variant, price)
    }

    /// Availability annotation shown next to a catalog entry
    pub fn availability_label(&self) -> &'static str {
        match self.kind {
            BookKind::Standard => "",
            BookKind::Physical { reference_only: true } => "(Physical • Reference: NOT LOANABLE)",
            BookKind::Physical { reference_only: false } => "(Physical)",
            BookKind::Digital { drm: true } => "(Digital • DRM)",
            BookKind::Digital { drm: false } => "(Digital)",
        }
    }

    /// Short variant tag used on summary lines
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            BookKind::Standard => "",
            BookKind::Physical { .. } => "Physical",
            BookKind::Digital { drm: true } => "Digital • DRM",
            BookKind::Digital { drm: false } => "Digital",
        }
    }
}
