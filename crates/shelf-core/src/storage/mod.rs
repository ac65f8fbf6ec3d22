//! Storage layer
//!
//! Handles persistence of the library as a delimited text file.
//!
//! The file is the durable copy of the catalog. It is read once when the
//! catalog opens and rewritten in full after every change.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{CsvPersistence, StorageStats};
