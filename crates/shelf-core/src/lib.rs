//! Shelf Core Library
//!
//! This crate provides the core functionality for Shelf, a personal book
//! catalog kept in a single delimited text file.
//!
//! # Architecture
//!
//! - **Catalog**: owns the in-memory library for a session
//! - **Storage**: reads the library file once, rewrites it after every change
//!
//! # Quick Start
//!
//! ```text
//! let mut catalog = Catalog::open()?;
//!
//! // Add a book
//! catalog.add_book(Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi"))?;
//!
//! // Query books
//! let hits = catalog.search_books("herbert");
//! let stats = catalog.statistics();
//! ```
//!
//! # Modules
//!
//! - `catalog`: add/remove/search/statistics (main entry point)
//! - `models`: the `Book` record and its validation
//! - `storage`: library file persistence
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use catalog::{Catalog, LibraryStats};
pub use config::Config;
pub use error::CatalogError;
pub use models::{Book, ValidationError, MAX_YEAR, MIN_YEAR};
pub use storage::{CsvPersistence, StorageError, StorageStats};
