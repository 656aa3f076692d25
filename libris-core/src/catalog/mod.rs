//! Catalog store: the ordered book list and its JSON backing file

use crate::error::{LibrisError, Result};
use crate::types::Book;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default backing file name, relative to the working directory
pub const DEFAULT_CATALOG_FILE: &str = "library.json";

/// An ordered, ISBN-unique collection of books persisted to a single JSON file
///
/// Every successful mutation rewrites the whole file. Lookups are linear scans;
/// catalogs are expected to stay at home-library scale.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    books: Vec<Book>,
}

impl Catalog {
    /// Open the catalog backed by `path`
    ///
    /// A missing file gives an empty catalog. So does a file that cannot be
    /// read or parsed: its content is left on disk untouched until the next
    /// successful mutation overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let books = Self::load(&path);
        tracing::debug!("Opened catalog {} with {} books", path.display(), books.len());
        Self { path, books }
    }

    /// Read the books stored at `path`, recovering to an empty list on any failure
    pub fn load(path: &Path) -> Vec<Book> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read catalog {}, starting empty: {}",
                    path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(
                    "Catalog {} is not a valid book list, starting empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book and persist
    ///
    /// Fails with `DuplicateKey` when the ISBN is already present. If the file
    /// cannot be written the append is undone before the error is returned.
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.find(&book.isbn).is_some() {
            return Err(LibrisError::DuplicateKey { isbn: book.isbn });
        }

        let isbn = book.isbn.clone();
        self.books.push(book);
        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }

        tracing::info!("Added book {}", isbn);
        Ok(())
    }

    /// Remove the book with this ISBN and persist
    ///
    /// Returns `Ok(false)` when no such book exists.
    pub fn remove(&mut self, isbn: &str) -> Result<bool> {
        let Some(index) = self.books.iter().position(|b| b.isbn == isbn) else {
            return Ok(false);
        };

        let removed = self.books.remove(index);
        if let Err(e) = self.persist() {
            self.books.insert(index, removed);
            return Err(e);
        }

        tracing::info!("Removed book {}", isbn);
        Ok(true)
    }

    /// Find a book by ISBN
    pub fn find(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    /// Snapshot of every book, in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Write the full book list to the backing file
    ///
    /// Writes a sibling temp file then renames it into place, so readers never
    /// see a half-written catalog.
    pub fn persist(&self) -> Result<()> {
        let fail = |source: std::io::Error| LibrisError::PersistenceFailure {
            path: self.path.clone(),
            source,
        };

        let data = serde_json::to_string_pretty(&self.books)
            .map_err(|e| fail(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, data).map_err(fail)?;

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(fail(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
