//! Core types for the Libris catalog

mod book;

pub use book::Book;
