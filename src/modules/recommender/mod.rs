//! Content-based recommendation: catalog, TF-IDF model and title matching

pub mod catalog;
pub mod matching;
pub mod tfidf;

pub use catalog::{Catalog, CatalogEntry};
pub use matching::is_valid_book_match;
pub use tfidf::{SparseVector, TfIdfModel};
