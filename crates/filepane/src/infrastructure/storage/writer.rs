//! Config writer: serializes documents and writes asset bytes.
//!
//! There is no partial-write recovery.  A caller must treat the destination as
//! unchanged unless the call returned `Ok`.

use std::io;
use std::path::{Path, PathBuf};

use filepane_core::{Document, DocumentKind};
use thiserror::Error;
use tracing::debug;

/// Error type for write operations.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The document could not be serialized.  Documents are flat structs of
    /// TOML-native types, so this indicates a programming error.
    #[error("failed to encode {document}: {source}")]
    Encode {
        document: DocumentKind,
        #[source]
        source: toml::ser::Error,
    },

    /// The file could not be written (permissions, disk full, ...).
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serializes `document` as TOML and overwrites `path` with it.
///
/// # Errors
///
/// Returns [`WriteError::Encode`] if serialization fails and
/// [`WriteError::Io`] if the file cannot be written.
pub fn write_document<D: Document>(document: &D, path: &Path) -> Result<(), WriteError> {
    let text = toml::to_string_pretty(document).map_err(|source| WriteError::Encode {
        document: D::KIND,
        source,
    })?;
    write_bytes(path, text.as_bytes())?;
    debug!(document = %D::KIND, path = %path.display(), "document written");
    Ok(())
}

/// Writes raw bytes to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the file cannot be written.
pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    std::fs::write(path, contents).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
