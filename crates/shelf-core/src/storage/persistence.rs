//! Library file persistence
//!
//! Reads and writes the library as a comma-delimited table with a fixed
//! header row. Uses atomic writes (write to temp file, then rename) so a
//! failed flush never leaves a half-written library behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{Book, COLUMNS};
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the library file
#[derive(Debug, Clone)]
pub struct CsvPersistence {
    path: PathBuf,
}

/// On-disk facts about the library file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStats {
    /// Whether the file exists yet
    pub exists: bool,
    /// Size in bytes (0 when missing)
    pub size: u64,
}

impl StorageStats {
    /// Size formatted for humans (B, KB, MB)
    pub fn size_human(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if self.size >= MB {
            format!("{:.1} MB", self.size as f64 / MB as f64)
        } else if self.size >= KB {
            format!("{:.1} KB", self.size as f64 / KB as f64)
        } else {
            format!("{} B", self.size)
        }
    }
}

impl CsvPersistence {
    /// Create a persistence handler for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the library file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the library file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Size and presence of the library file
    pub fn stats(&self) -> StorageStats {
        match fs::metadata(&self.path) {
            Ok(meta) => StorageStats {
                exists: true,
                size: meta.len(),
            },
            Err(_) => StorageStats {
                exists: false,
                size: 0,
            },
        }
    }

    /// Load every book from disk, in file order
    ///
    /// Returns an empty library if the file doesn't exist.
    /// Returns an error if the file exists but the header or any row is invalid.
    pub fn load(&self) -> StorageResult<Vec<Book>> {
        if !self.path.exists() {
            debug!("No library file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let bytes =
            fs::read(&self.path).map_err(|e| StorageError::from_read_io(e, self.path.clone()))?;
        let books = decode(&bytes).map_err(|details| StorageError::Malformed {
            path: self.path.clone(),
            details,
        })?;

        debug!("Loaded {} book(s) from {:?}", books.len(), self.path);
        Ok(books)
    }

    /// Overwrite the library file with `books`
    pub fn save(&self, books: &[Book]) -> StorageResult<()> {
        let bytes = encode(books).map_err(|e| StorageError::WriteError {
            path: self.path.clone(),
            source: e.into(),
        })?;

        atomic_write(&self.path, &bytes)?;

        debug!("Saved {} book(s) to {:?}", books.len(), self.path);
        Ok(())
    }
}

/// Serialize the header row followed by one row per book
fn encode(books: &[Book]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for book in books {
        writer.serialize(book)?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Parse library bytes, requiring the exact header row
fn decode(bytes: &[u8]) -> Result<Vec<Book>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(|e| e.to_string())?;
    if headers.iter().ne(COLUMNS.iter().copied()) {
        return Err(format!(
            "expected columns [{}], found [{}]",
            COLUMNS.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        ));
    }

    reader
        .deserialize::<Book>()
        .map(|row| row.map_err(|e| e.to_string()))
        .collect()
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_write_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_write_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_write_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
