//! Lookup command implementation

use super::NETWORK_HINT;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use libris_core::{Catalog, ErrorClass, LookupClient};
use std::time::Duration;

/// Look up an ISBN online and add the book to the catalog
pub async fn lookup(catalog: &mut Catalog, lookup: &LookupClient, isbn: &str) -> Result<()> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        anyhow::bail!("ISBN cannot be empty");
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Looking up book information...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = lookup.add_by_isbn(catalog, isbn).await;
    spinner.finish_and_clear();

    match result {
        Ok(book) => {
            println!(
                "Success: Book '{}' by {} added successfully!",
                book.title, book.author
            );
            Ok(())
        }
        Err(e) => {
            if e.class() == ErrorClass::Dependency {
                eprintln!("{}", NETWORK_HINT);
            }
            Err(e.into())
        }
    }
}
