//! The Book record - the only entity the catalog stores

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog entry
///
/// Field order is the on-disk key order; do not reorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author, or several authors joined with ", "
    pub author: String,

    /// ISBN, treated as an opaque unique key
    pub isbn: String,
}

impl Book {
    /// Create a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Book", "Test Author", "1234567890");
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.author, "Test Author");
        assert_eq!(book.isbn, "1234567890");
    }

    #[test]
    fn test_book_display() {
        let book = Book::new("Test Book", "Test Author", "1234567890");
        assert_eq!(
            book.to_string(),
            "Test Book by Test Author (ISBN: 1234567890)"
        );
    }

    #[test]
    fn test_book_serialization_key_order() {
        let book = Book::new("Dune", "Frank Herbert", "9780441172719");
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Dune","author":"Frank Herbert","isbn":"9780441172719"}"#
        );
    }

    #[test]
    fn test_book_missing_field_rejected() {
        let result: Result<Book, _> = serde_json::from_str(r#"{"title":"Dune","isbn":"1"}"#);
        assert!(result.is_err());
    }
}
