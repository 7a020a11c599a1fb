//! Read-only book catalog

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::book::Book;
use crate::error::{LoanError, Result};

/// Ordered list of books, fixed once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The demo catalog used when no catalog file is configured
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::physical("Data Structures", "Goodrich", dec!(12990), 7, false),
            Book::physical("Encyclopedia", "Varios", dec!(15990), 0, true),
            Book::digital("Kotlin Programming", "JetBrains", dec!(9990), 10, true),
            Book::digital("Basic Algorithms", "Cormen", dec!(11990), 10, false),
        ])
    }

    /// Parse a JSON array of books
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        if catalog.is_empty() {
            return Err(LoanError::Catalog("catalog contains no books".to_string()));
        }
        Ok(catalog)
    }

    /// Load a JSON array of books from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoanError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&content)?;
        debug!(path = %path.display(), books = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book at a 0-based position
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Turn a comma-separated list of 1-based numbers into 0-based indices.
    ///
    /// Tokens are trimmed; non-numeric and out-of-range tokens are dropped.
    /// Order and duplicates are kept as typed.
    pub fn parse_selection(&self, input: &str) -> Vec<usize> {
        input
            .split(',')
            .filter_map(|token| token.trim().parse::<usize>().ok())
            .filter(|number| (1..=self.len()).contains(number))
            .map(|number| number - 1)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
