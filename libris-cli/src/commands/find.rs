//! Find command implementation

use anyhow::{bail, Result};
use libris_core::Catalog;

/// Print the book with this ISBN
pub fn find(catalog: &Catalog, isbn: &str, json: bool) -> Result<()> {
    let Some(book) = catalog.find(isbn) else {
        bail!("No book found with ISBN {}", isbn);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
    } else {
        println!("Found: {}", book);
    }

    Ok(())
}
