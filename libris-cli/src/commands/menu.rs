//! Interactive menu

use super::describe;
use anyhow::Result;
use libris_core::{Book, Catalog, LookupClient};
use std::io::{BufRead, Write};

const RULE: &str = "==================================================";

/// Whether the menu loop keeps going after an action
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Prompt-driven session over an input and an output stream
struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    lookup: &'a LookupClient,
    input: &'a mut R,
    out: &'a mut W,
}

/// Run the interactive menu until the user exits or input ends
pub async fn menu<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    lookup: &LookupClient,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = Session {
        catalog,
        lookup,
        input,
        out,
    };

    writeln!(
        session.out,
        "Library loaded from {} ({} books)",
        session.catalog.path().display(),
        session.catalog.len()
    )?;

    loop {
        session.display_menu()?;
        let Some(choice) = session.prompt("Enter your choice (1-5): ")? else {
            break;
        };

        let step = match choice.as_str() {
            "1" => session.add_book().await?,
            "2" => session.remove_book()?,
            "3" => session.list_books()?,
            "4" => session.search_book()?,
            "5" => {
                writeln!(session.out, "Thank you for using Library Management System!")?;
                return Ok(());
            }
            _ => {
                writeln!(
                    session.out,
                    "Invalid choice! Please enter a number between 1-5."
                )?;
                Step::Continue
            }
        };

        if step == Step::Exit {
            break;
        }
    }

    writeln!(session.out, "\n\nExiting Library Management System...")?;
    Ok(())
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", RULE)?;
        writeln!(self.out, "        LIBRARY MANAGEMENT SYSTEM")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "1. Add Book")?;
        writeln!(self.out, "2. Remove Book")?;
        writeln!(self.out, "3. List All Books")?;
        writeln!(self.out, "4. Search Book")?;
        writeln!(self.out, "5. Exit")?;
        writeln!(self.out, "{}", RULE)?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` once input is exhausted
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line becomes an invalid choice instead of ending the session.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Prompt for a value that must not be blank
    ///
    /// Prints an error and yields `Ok(Err(Step::Continue))` for blank input.
    fn prompt_required(
        &mut self,
        label: &str,
        field: &str,
    ) -> Result<std::result::Result<String, Step>> {
        match self.prompt(label)? {
            None => Ok(Err(Step::Exit)),
            Some(value) if value.is_empty() => {
                writeln!(self.out, "Error: {} cannot be empty", field)?;
                Ok(Err(Step::Continue))
            }
            Some(value) => Ok(Ok(value)),
        }
    }

    fn report(&mut self, err: &libris_core::LibrisError) -> Result<()> {
        for line in describe(err) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    async fn add_book(&mut self) -> Result<Step> {
        writeln!(self.out, "\n--- Add New Book ---")?;
        writeln!(self.out, "Choose an option:")?;
        writeln!(self.out, "1. Manual entry")?;
        writeln!(self.out, "2. ISBN lookup (automatic)")?;

        let Some(choice) = self.prompt("Enter your choice (1-2): ")? else {
            return Ok(Step::Exit);
        };

        match choice.as_str() {
            "1" => self.add_manual(),
            "2" => self.add_by_lookup().await,
            _ => {
                writeln!(self.out, "Invalid choice! Please enter 1 or 2.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_manual(&mut self) -> Result<Step> {
        let title = match self.prompt_required("Enter book title: ", "Title")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };
        let author = match self.prompt_required("Enter book author: ", "Author")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };
        let isbn = match self.prompt_required("Enter book ISBN: ", "ISBN")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        match self.catalog.add(Book::new(title.clone(), author, isbn)) {
            Ok(()) => writeln!(self.out, "Success: Book '{}' added successfully!", title)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    async fn add_by_lookup(&mut self) -> Result<Step> {
        let isbn = match self.prompt_required("Enter book ISBN: ", "ISBN")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        writeln!(self.out, "Looking up book information...")?;
        match self.lookup.add_by_isbn(self.catalog, &isbn).await {
            Ok(book) => writeln!(
                self.out,
                "Success: Book '{}' by {} added successfully!",
                book.title, book.author
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn remove_book(&mut self) -> Result<Step> {
        writeln!(self.out, "\n--- Remove Book ---")?;
        let isbn = match self.prompt_required("Enter ISBN of book to remove: ", "ISBN")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        match self.catalog.remove(&isbn) {
            Ok(true) => writeln!(
                self.out,
                "Success: Book with ISBN {} removed successfully!",
                isbn
            )?,
            Ok(false) => writeln!(self.out, "Error: No book found with ISBN {}", isbn)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn list_books(&mut self) -> Result<Step> {
        writeln!(self.out, "\n--- All Books ---")?;
        let books = self.catalog.list();
        if books.is_empty() {
            writeln!(self.out, "No books in the library.")?;
            return Ok(Step::Continue);
        }

        writeln!(self.out, "Total books: {}", books.len())?;
        writeln!(self.out, "{}", "-".repeat(60))?;
        for (i, book) in books.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, book)?;
        }
        Ok(Step::Continue)
    }

    fn search_book(&mut self) -> Result<Step> {
        writeln!(self.out, "\n--- Search Book ---")?;
        let isbn = match self.prompt_required("Enter ISBN to search: ", "ISBN")? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        match self.catalog.find(&isbn) {
            Some(book) => writeln!(self.out, "Found: {}", book)?,
            None => writeln!(self.out, "No book found with ISBN {}", isbn)?,
        }
        Ok(Step::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use libris_core::lookup::{AuthorRecord, EditionRecord};
    use libris_core::{BibliographicSource, LibrisError, RemoteFailure};
    use std::io::Cursor;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Knows a single ISBN; 5555555555 simulates a network failure
    struct FakeSource;

    #[async_trait]
    impl BibliographicSource for FakeSource {
        async fn fetch_edition(&self, isbn: &str) -> libris_core::Result<EditionRecord> {
            match isbn {
                "9780441172719" => Ok(EditionRecord {
                    title: Some("Dune".to_string()),
                    authors: Some(vec![serde_json::json!({"key": "/authors/OL1A"})]),
                }),
                "5555555555" => Err(RemoteFailure::Connect.into()),
                _ => Err(LibrisError::NotFound {
                    isbn: isbn.to_string(),
                }),
            }
        }

        async fn fetch_author(&self, _key: &str) -> libris_core::Result<AuthorRecord> {
            Ok(AuthorRecord {
                name: Some("Frank Herbert".to_string()),
            })
        }
    }

    /// Run the menu over `script` and return everything it printed
    async fn run(catalog: &mut Catalog, script: &str) -> String {
        run_bytes(catalog, script.as_bytes()).await
    }

    async fn run_bytes(catalog: &mut Catalog, script: &[u8]) -> String {
        let lookup = LookupClient::new(Arc::new(FakeSource));
        let mut input = Cursor::new(script.to_vec());
        let mut out = Vec::new();
        menu(catalog, &lookup, &mut input, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_catalog() -> (Catalog, TempDir) {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::open(dir.path().join("library.json"));
        (catalog, dir)
    }

    #[tokio::test]
    async fn test_exit() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "5\n").await;
        assert!(out.contains("LIBRARY MANAGEMENT SYSTEM"));
        assert!(out.contains("Thank you for using Library Management System!"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "").await;
        assert!(out.contains("Exiting Library Management System..."));
    }

    #[tokio::test]
    async fn test_manual_add_then_list() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(
            &mut catalog,
            "1\n1\nTest Book\nTest Author\n1234567890\n3\n5\n",
        )
        .await;

        assert!(out.contains("Success: Book 'Test Book' added successfully!"));
        assert!(out.contains("Total books: 1"));
        assert!(out.contains("1. Test Book by Test Author (ISBN: 1234567890)"));
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_manual_add_blank_title() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "1\n1\n   \n5\n").await;

        assert!(out.contains("Error: Title cannot be empty"));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_manual_add_duplicate() {
        let (mut catalog, _dir) = temp_catalog();
        catalog.add(Book::new("A", "B", "1")).unwrap();

        let out = run(&mut catalog, "1\n1\nOther\nSomeone\n1\n5\n").await;

        assert!(out.contains("Error: Book with ISBN 1 already exists"));
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_add() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "1\n2\n9780441172719\n5\n").await;

        assert!(out.contains("Looking up book information..."));
        assert!(out.contains("Success: Book 'Dune' by Frank Herbert added successfully!"));
        assert_eq!(catalog.find("9780441172719").unwrap().author, "Frank Herbert");
    }

    #[tokio::test]
    async fn test_lookup_network_error() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "1\n2\n5555555555\n5\n").await;

        assert!(out.contains("Network Error:"));
        assert!(out.contains("Please check your internet connection"));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_add_choice() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "1\n9\n5\n").await;
        assert!(out.contains("Invalid choice! Please enter 1 or 2."));
    }

    #[tokio::test]
    async fn test_remove_and_search() {
        let (mut catalog, _dir) = temp_catalog();
        catalog.add(Book::new("Keep", "K", "1")).unwrap();
        catalog.add(Book::new("Drop", "D", "2")).unwrap();

        let out = run(&mut catalog, "4\n1\n2\n2\n2\n2\n4\n2\n5\n").await;

        assert!(out.contains("Found: Keep by K (ISBN: 1)"));
        assert!(out.contains("Success: Book with ISBN 2 removed successfully!"));
        assert!(out.contains("Error: No book found with ISBN 2"));
        assert!(out.contains("No book found with ISBN 2"));
        assert_eq!(catalog.list(), vec![Book::new("Keep", "K", "1")]);
    }

    #[tokio::test]
    async fn test_invalid_choice_reprompts() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run(&mut catalog, "abc\n3\n5\n").await;

        assert!(out.contains("Invalid choice! Please enter a number between 1-5."));
        assert!(out.contains("No books in the library."));
    }

    #[tokio::test]
    async fn test_non_utf8_input_reprompts() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run_bytes(&mut catalog, b"\xff\xfe\n3\n5\n").await;

        assert!(out.contains("Invalid choice! Please enter a number between 1-5."));
        assert!(out.contains("No books in the library."));
        assert!(out.contains("Thank you for using Library Management System!"));
    }

    #[tokio::test]
    async fn test_non_utf8_title_is_kept_lossy() {
        let (mut catalog, _dir) = temp_catalog();
        let out = run_bytes(&mut catalog, b"1\n1\nCaf\xe9\nAuthor\n77\n5\n").await;

        assert!(out.contains("added successfully!"));
        assert_eq!(catalog.find("77").unwrap().title, "Caf\u{fffd}");
    }
}
