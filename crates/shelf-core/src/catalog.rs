//! The book catalog
//!
//! `Catalog` owns the in-memory library for the whole session and writes it
//! back to the library file after every change.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = Catalog::open()?;  // Loads existing file or starts empty
//!
//! catalog.add_book(Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi"))?;
//! let hits = catalog.search_books("herbert");
//! let removed = catalog.remove_book("Dune")?;
//! ```
//!
//! A failed flush returns [`CatalogError::StorageWrite`] but leaves the
//! in-memory change in place; the next successful flush writes it out.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::CatalogError;
use crate::models::Book;
use crate::storage::{CsvPersistence, StorageStats};

/// Summary counts for the library
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LibraryStats {
    /// Number of books
    pub total: usize,
    /// Number of books marked read
    pub read: usize,
    /// Share of books read, 0-100, rounded to two decimals
    pub percentage_read: f64,
}

impl LibraryStats {
    fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read).count();
        let percentage_read = if total == 0 {
            0.0
        } else {
            round2(read as f64 * 100.0 / total as f64)
        };

        Self {
            total,
            read,
            percentage_read,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// In-memory library mirrored to a flat file
pub struct Catalog {
    books: Vec<Book>,
    persistence: CsvPersistence,
}

impl Catalog {
    /// Open the catalog using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(&config)?)
    }

    /// Open the catalog at the library path named by `config`
    pub fn open_with_config(config: &Config) -> Result<Self, CatalogError> {
        Self::open_at(config.library_path())
    }

    /// Open the catalog backed by the file at `path`
    ///
    /// A missing file yields an empty catalog; nothing is written until the
    /// first change or flush.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let persistence = CsvPersistence::new(path.as_ref());
        let books = persistence.load().map_err(CatalogError::StorageRead)?;

        info!("Opened library {:?} with {} book(s)", persistence.path(), books.len());

        Ok(Self { books, persistence })
    }

    /// Location of the library file
    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    /// Size and presence of the library file
    pub fn storage_stats(&self) -> StorageStats {
        self.persistence.stats()
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book and save
    ///
    /// Duplicates are allowed. Invalid books are rejected before anything
    /// changes.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        book.validate()?;

        info!("Adding '{}' by {}", book.title, book.author);
        self.books.push(book);
        self.flush()
    }

    /// Remove every book whose title is exactly `title`, returning how many went
    ///
    /// Matching is case-sensitive. Fails with `NotFound` when nothing matches.
    pub fn remove_book(&mut self, title: &str) -> Result<usize, CatalogError> {
        let before = self.books.len();
        self.books.retain(|b| b.title != title);
        let removed = before - self.books.len();

        if removed == 0 {
            return Err(CatalogError::NotFound {
                title: title.to_string(),
            });
        }

        info!("Removed {} cop{} of '{}'", removed, if removed == 1 { "y" } else { "ies" }, title);
        self.flush()?;
        Ok(removed)
    }

    /// Books whose title or author contains `query`, ignoring case
    ///
    /// An empty query returns every book. Results keep insertion order.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books.iter().filter(|b| b.matches(&needle)).collect()
    }

    /// Number of books with exactly this title
    pub fn count_title(&self, title: &str) -> usize {
        self.books.iter().filter(|b| b.title == title).count()
    }

    /// Totals and percentage read
    pub fn statistics(&self) -> LibraryStats {
        LibraryStats::from_books(&self.books)
    }

    /// Write the full library to disk
    ///
    /// Called after every change and once more on exit. Rewriting unchanged
    /// content produces an identical file.
    pub fn flush(&self) -> Result<(), CatalogError> {
        self.persistence.save(&self.books).map_err(|e| {
            warn!("Failed to save library to {:?}: {}", self.persistence.path(), e);
            CatalogError::StorageWrite(e)
        })
    }
}
