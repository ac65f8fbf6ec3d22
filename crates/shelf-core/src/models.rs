//! Data models for Shelf
//!
//! A `Book` is the only record type. Field names on disk are the column
//! headers of the library file, so the serde renames below are the file format.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Earliest accepted publication year
pub const MIN_YEAR: i32 = 1800;
/// Latest accepted publication year
pub const MAX_YEAR: i32 = 2100;

/// Column headers of the library file, in order
pub const COLUMNS: [&str; 5] = ["Title", "Author", "Publication Year", "Genre", "Read Status"];

/// A single catalogued book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Publication Year")]
    pub year: i32,
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Whether the book has been read
    #[serde(rename = "Read Status", deserialize_with = "read_status")]
    pub read: bool,
}

/// A required field was missing or out of range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Author is required")]
    MissingAuthor,

    #[error("Genre is required")]
    MissingGenre,

    #[error("Publication year {0} is outside {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),
}

impl Book {
    /// Create a new unread book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read: false,
        }
    }

    /// Builder-style setter for the read status
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Check required fields and the year range
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingAuthor);
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange(self.year));
        }
        if self.genre.trim().is_empty() {
            return Err(ValidationError::MissingGenre);
        }
        Ok(())
    }

    /// Case-insensitive substring match on title or author
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Accept `true`/`false` in any case (older files were written as `True`/`False`)
fn read_status<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        s if s.eq_ignore_ascii_case("true") => Ok(true),
        s if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid read status '{}', expected true or false",
            other
        ))),
    }
}
