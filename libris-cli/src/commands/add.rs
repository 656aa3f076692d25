//! Add command implementation

use anyhow::{bail, Result};
use libris_core::{Book, Catalog};

/// Add a manually entered book
pub fn add(catalog: &mut Catalog, title: &str, author: &str, isbn: &str) -> Result<()> {
    let (title, author, isbn) = (title.trim(), author.trim(), isbn.trim());
    for (field, value) in [("Title", title), ("Author", author), ("ISBN", isbn)] {
        if value.is_empty() {
            bail!("{} cannot be empty", field);
        }
    }

    catalog.add(Book::new(title, author, isbn))?;
    println!("Success: Book '{}' added successfully!", title);

    Ok(())
}
