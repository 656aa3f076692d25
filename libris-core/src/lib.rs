//! Libris Core Library
//!
//! This crate provides the book catalog store and the ISBN lookup client for the
//! Libris library manager. Books live in an ordered, ISBN-unique list persisted
//! to a single JSON file; the lookup client fills in title and author from an
//! Open Library compatible service.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod types;

pub use catalog::{Catalog, DEFAULT_CATALOG_FILE};
pub use error::{ErrorClass, LibrisError, RemoteFailure, Result};
pub use lookup::{BibliographicSource, LookupClient, OpenLibraryClient};
pub use types::Book;
