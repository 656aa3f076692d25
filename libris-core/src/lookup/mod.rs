//! ISBN lookup against a remote bibliographic service
//!
//! The remote side is abstracted by [`BibliographicSource`]; [`OpenLibraryClient`]
//! is the HTTP implementation used in production. [`LookupClient`] turns an ISBN
//! into a [`Book`] and stores it in a [`Catalog`].

mod open_library;

pub use open_library::{OpenLibraryClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};

use crate::catalog::Catalog;
use crate::error::{LibrisError, Result};
use crate::types::Book;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Title used when the service returns none
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Author used when no author name could be resolved
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Edition document returned by a book lookup
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EditionRecord {
    pub title: Option<String>,

    /// Raw author references; entries that are not `{"key": "..."}` objects are ignored
    pub authors: Option<Vec<Value>>,
}

impl EditionRecord {
    /// Sub-resource keys of the referenced authors, in document order
    pub fn author_keys(&self) -> Vec<&str> {
        self.authors
            .iter()
            .flatten()
            .filter_map(|entry| entry.get("key").and_then(Value::as_str))
            .collect()
    }
}

/// Author document returned by an author lookup
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthorRecord {
    pub name: Option<String>,
}

/// A remote service that can describe books by ISBN
#[async_trait]
pub trait BibliographicSource: Send + Sync {
    /// Fetch the edition for an ISBN
    ///
    /// Fails with `NotFound` if the service does not know the ISBN,
    /// `RemoteUnavailable` on transport or status failures and
    /// `MalformedResponse` if the body cannot be parsed.
    async fn fetch_edition(&self, isbn: &str) -> Result<EditionRecord>;

    /// Fetch an author by the key found in an edition's author list
    async fn fetch_author(&self, key: &str) -> Result<AuthorRecord>;
}

/// Resolves ISBNs into catalog entries
#[derive(Clone)]
pub struct LookupClient {
    source: Arc<dyn BibliographicSource>,
}

impl LookupClient {
    pub fn new(source: Arc<dyn BibliographicSource>) -> Self {
        Self { source }
    }

    /// Lookup client talking to an Open Library compatible service at `base_url`
    pub fn open_library(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Arc::new(OpenLibraryClient::new(base_url)?)))
    }

    /// Resolve an ISBN into a book without touching any catalog
    ///
    /// Author sub-lookups that fail for any reason are skipped: a broken
    /// author reference degrades the author string but never fails the lookup.
    pub async fn resolve(&self, isbn: &str) -> Result<Book> {
        let edition = self.source.fetch_edition(isbn).await?;

        let title = non_blank(edition.title.clone()).unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let mut authors = Vec::new();
        for key in edition.author_keys() {
            match self.source.fetch_author(key).await {
                Ok(author) => authors.push(
                    non_blank(author.name).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                ),
                Err(e) => tracing::debug!("Skipping author {} for ISBN {}: {}", key, isbn, e),
            }
        }

        if authors.is_empty() {
            authors.push(UNKNOWN_AUTHOR.to_string());
        }

        Ok(Book::new(title, authors.join(", "), isbn))
    }

    /// Look up an ISBN and add the resulting book to the catalog
    ///
    /// An ISBN already in the catalog fails with `DuplicateKey` before any
    /// request is made.
    pub async fn add_by_isbn(&self, catalog: &mut Catalog, isbn: &str) -> Result<Book> {
        if catalog.find(isbn).is_some() {
            return Err(LibrisError::DuplicateKey {
                isbn: isbn.to_string(),
            });
        }

        tracing::info!("Looking up ISBN {}", isbn);
        let book = self.resolve(isbn).await?;
        catalog.add(book.clone())?;
        Ok(book)
    }
}

/// Blank strings from the service are treated as missing
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
