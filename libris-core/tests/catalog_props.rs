//! Property tests for the catalog store

use libris_core::{Book, Catalog, LibrisError};
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use tempfile::TempDir;

/// Books with pairwise distinct ISBNs
fn distinct_books(max: usize) -> impl Strategy<Value = Vec<Book>> {
    hash_set("[0-9]{10,13}", 0..max).prop_flat_map(|isbns| {
        let isbns: Vec<String> = isbns.into_iter().collect();
        let len = isbns.len();
        (
            Just(isbns),
            vec(("\\PC{1,30}", "\\PC{1,30}"), len),
        )
            .prop_map(|(isbns, fields)| {
                isbns
                    .into_iter()
                    .zip(fields)
                    .map(|(isbn, (title, author))| Book::new(title, author, isbn))
                    .collect()
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_then_list_preserves_insertion_order(books in distinct_books(12)) {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::open(dir.path().join("library.json"));

        for book in &books {
            catalog.add(book.clone()).unwrap();
        }

        prop_assert_eq!(catalog.list(), books);
    }

    #[test]
    fn persist_then_reload_round_trips(books in distinct_books(12)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.json");
        {
            let mut catalog = Catalog::open(&path);
            for book in &books {
                catalog.add(book.clone()).unwrap();
            }
        }

        let reopened = Catalog::open(&path);
        prop_assert_eq!(reopened.list(), books);
    }

    #[test]
    fn duplicate_add_leaves_catalog_unchanged(
        books in distinct_books(8).prop_filter("need one book", |b| !b.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::open(dir.path().join("library.json"));
        for book in &books {
            catalog.add(book.clone()).unwrap();
        }

        let target = &books[pick.index(books.len())];
        let dup = Book::new("Different", "Someone Else", target.isbn.clone());
        let err = catalog.add(dup).unwrap_err();

        let is_duplicate = matches!(err, LibrisError::DuplicateKey { .. });
        prop_assert!(is_duplicate);
        prop_assert_eq!(catalog.list(), books.clone());
        prop_assert_eq!(Catalog::load(catalog.path()), books);
    }

    #[test]
    fn remove_present_then_find_is_absent(
        books in distinct_books(8).prop_filter("need one book", |b| !b.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::open(dir.path().join("library.json"));
        for book in &books {
            catalog.add(book.clone()).unwrap();
        }

        let isbn = books[pick.index(books.len())].isbn.clone();
        prop_assert!(catalog.remove(&isbn).unwrap());
        prop_assert!(catalog.find(&isbn).is_none());
        prop_assert!(!catalog.remove(&isbn).unwrap());
        prop_assert_eq!(catalog.len(), books.len() - 1);
    }
}
