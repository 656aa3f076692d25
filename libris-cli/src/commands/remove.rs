//! Remove command implementation

use anyhow::{bail, Result};
use libris_core::Catalog;

/// Remove a book by ISBN
pub fn remove(catalog: &mut Catalog, isbn: &str) -> Result<()> {
    if !catalog.remove(isbn)? {
        bail!("No book found with ISBN {}", isbn);
    }

    println!("Success: Book with ISBN {} removed successfully!", isbn);
    Ok(())
}
