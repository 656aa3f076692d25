//! List command implementation

use anyhow::Result;
use libris_core::Catalog;

/// Print every book in the catalog
pub fn list(catalog: &Catalog, json: bool) -> Result<()> {
    let books = catalog.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books in the library.");
        return Ok(());
    }

    println!("Total books: {}", books.len());
    println!("{}", "-".repeat(60));
    for (i, book) in books.iter().enumerate() {
        println!("{}. {}", i + 1, book);
    }

    Ok(())
}
