//! Error types for the urnal-md library.
//!
//! The markdown converter itself never fails: malformed syntax degrades to
//! literal text. [`UrnalError`] only covers the fallible edges around it:
//! reading entry files, writing rendered output, scanning a journal
//! directory, and validating a [`crate::config::ConversionConfig`].

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the urnal-md library.
#[derive(Debug, Error)]
pub enum UrnalError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Entry file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A journal root was expected to be a directory.
    #[error("Journal path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl UrnalError {
    /// Map an `io::Error` raised while reading `path` to the matching variant.
    pub(crate) fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => UrnalError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => UrnalError::PermissionDenied { path },
            _ => UrnalError::ReadFailed { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_maps_to_file_not_found() {
        let e = UrnalError::from_read("May 2024.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(e, UrnalError::FileNotFound { .. }));
        assert!(e.to_string().contains("May 2024.txt"), "got: {e}");
    }

    #[test]
    fn permission_denied_maps_to_permission_variant() {
        let e = UrnalError::from_read("x.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(e, UrnalError::PermissionDenied { .. }));
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let e = UrnalError::from_read("x.txt", io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(e, UrnalError::ReadFailed { .. }));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn invalid_config_display() {
        let e = UrnalError::InvalidConfig("entry delimiter must not be empty".into());
        assert!(e.to_string().starts_with("Invalid configuration"));
    }
}
