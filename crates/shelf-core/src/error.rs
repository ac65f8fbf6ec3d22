//! Catalog error type
//!
//! Every catalog operation reports one of four outcomes: bad input, a missing
//! removal target, a library file that could not be read, or a change that
//! was applied in memory but could not be written back.

use thiserror::Error;

use crate::models::ValidationError;
use crate::storage::StorageError;

/// Errors returned by [`Catalog`](crate::Catalog) operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field was empty; nothing changed
    #[error("Invalid book: {0}")]
    Validation(#[from] ValidationError),

    /// No book has exactly this title; nothing changed
    #[error("Book '{title}' not found in the library.")]
    NotFound { title: String },

    /// The library file exists but could not be loaded
    #[error("Could not load library: {0}")]
    StorageRead(#[source] StorageError),

    /// The in-memory change was kept but the library file was not updated
    #[error("Change applied but not saved to disk: {0}")]
    StorageWrite(#[source] StorageError),
}

impl CatalogError {
    /// True when the operation took effect in memory but may not be durable
    pub fn is_durability_warning(&self) -> bool {
        matches!(self, CatalogError::StorageWrite(_))
    }

    /// Recovery hint for storage failures
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CatalogError::StorageRead(e) | CatalogError::StorageWrite(e) => e.recovery_suggestion(),
            _ => None,
        }
    }
}
