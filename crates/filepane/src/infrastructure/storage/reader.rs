//! Document and state-file reads.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A file that had to be read could not be.
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl ReadError {
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}

fn read_error(path: &Path) -> impl FnOnce(io::Error) -> ReadError + '_ {
    move |source| ReadError {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads the raw bytes of a mandatory document.
///
/// Text decoding is left to the caller, so a file with bad encoding is a
/// malformed document rather than an unreadable one.
///
/// # Errors
///
/// Returns [`ReadError`] for any I/O failure, including a missing file.
pub fn read_document(path: &Path) -> Result<Vec<u8>, ReadError> {
    std::fs::read(path).map_err(read_error(path))
}

/// Reads a small text state file that may legitimately not exist yet.
///
/// # Errors
///
/// Returns [`ReadError`] for I/O failures other than "not found", including
/// contents that are not UTF-8.
pub fn read_optional(path: &Path) -> Result<Option<String>, ReadError> {
    match std::fs::read_to_string(path).map_err(read_error(path)) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_document_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_document(&dir.path().join("absent.toml")).expect_err("missing");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_read_document_returns_bytes_even_if_not_utf8() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, b"theme = \"nord\xff\"").expect("write");

        // Act
        let bytes = read_document(&path).expect("readable file");

        // Assert
        assert_eq!(bytes, b"theme = \"nord\xff\"");
    }

    #[test]
    fn test_read_optional_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_optional(&dir.path().join("absent")).expect("not an error");
        assert_eq!(result, None);
    }

    #[test]
    fn test_read_optional_returns_contents() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("marker");
        std::fs::write(&path, "0.1.0").expect("write");

        // Act / Assert
        assert_eq!(read_optional(&path).expect("read").as_deref(), Some("0.1.0"));
    }

    #[test]
    fn test_read_optional_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Reading a directory as a file fails with something other than NotFound.
        assert!(read_optional(dir.path()).is_err());
    }
}
