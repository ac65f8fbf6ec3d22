//! Storage error handling
//!
//! Provides typed errors for library file operations with descriptive
//! messages and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the library file
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create the directory holding the library file
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File exists but is not a valid library table
    #[error("Invalid library file '{path}': {details}")]
    Malformed { path: PathBuf, details: String },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_read_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ => StorageError::ReadError {
                path,
                source: error,
            },
        }
    }

    /// Classify an I/O error raised while writing `path`
    ///
    /// Separates permission and disk-full conditions from generic failures.
    pub fn from_write_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_disk_full_error(&error) => StorageError::DiskFull {
                path,
                source: error,
            },
            _ => StorageError::WriteError {
                path,
                source: error,
            },
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => Some("Free up disk space and try again."),
            StorageError::PermissionDenied { .. } => {
                Some("Check file and directory permissions, or point SHELF_LIBRARY_FILE at a writable location.")
            }
            StorageError::Malformed { .. } => {
                Some("Repair the file by hand so it has exactly the columns Title, Author, Publication Year, Genre, Read Status, or move it aside to start fresh.")
            }
            StorageError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_classification() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = StorageError::from_write_io(io_err, PathBuf::from("/test/path"));

        assert!(matches!(err, StorageError::PermissionDenied { .. }));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_read_failure_classification() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = StorageError::from_read_io(io_err, PathBuf::from("/data/library.txt"));

        assert!(matches!(err, StorageError::ReadError { .. }));
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_disk_full_detection() {
        let io_err = io::Error::new(io::ErrorKind::Other, "No space left on device");
        let err = StorageError::from_write_io(io_err, PathBuf::from("/full/disk"));

        assert!(matches!(err, StorageError::DiskFull { .. }));
        assert_eq!(
            err.recovery_suggestion(),
            Some("Free up disk space and try again.")
        );
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::PermissionDenied {
            path: PathBuf::from("/test/file"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("Permission denied"));
        assert!(msg.contains("/test/file"));
    }

    #[test]
    fn test_malformed_display() {
        let err = StorageError::Malformed {
            path: PathBuf::from("/data/library.txt"),
            details: "expected 5 columns, found 4".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Invalid library file"));
        assert!(msg.contains("expected 5 columns"));
        assert!(err.recovery_suggestion().is_some());
    }
}
