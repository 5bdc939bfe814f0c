//! Layering a user document on top of the bundled defaults.
//!
//! Both documents are first parsed into raw [`toml::Table`]s.  The merged
//! result is the defaults table with every top-level user key written over it,
//! decoded into the target document type:
//!
//! ```text
//! defaults: { theme = "catppuccin", sidebar_width = 20 }
//! user:     { sidebar_width = 0 }
//! merged:   { theme = "catppuccin", sidebar_width = 0 }
//! ```
//!
//! Keeping the raw user table around is what lets the schema differ see which
//! keys the user actually wrote, independent of their values.

use thiserror::Error;
use toml::{Table, Value};
use tracing::debug;

use crate::domain::field::{Document, DocumentKind};

/// Error type for parse and merge operations.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The text is not a well-formed TOML document.
    #[error("failed to parse {document} file: {source}")]
    Parse {
        document: DocumentKind,
        #[source]
        source: toml::de::Error,
    },

    /// The bytes are not valid UTF-8.
    #[error("{document} file is not valid UTF-8: {source}")]
    Encoding {
        document: DocumentKind,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The bundled defaults do not decode into the current schema.
    #[error("built-in default {document} does not match the current schema: {source}")]
    Defaults {
        document: DocumentKind,
        #[source]
        source: toml::de::Error,
    },

    /// The merged document does not decode (a user value has the wrong type).
    #[error("failed to decode {document} file: {source}")]
    Decode {
        document: DocumentKind,
        #[source]
        source: toml::de::Error,
    },
}

/// A user field whose value could not be applied; its default was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: String,
    pub message: String,
}

/// Result of a lenient merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<D> {
    pub document: D,
    pub rejected: Vec<Rejection>,
}

/// Parses `src` into a raw top-level table.
///
/// # Errors
///
/// Returns [`MergeError::Parse`] when `src` is not valid TOML.
pub fn parse_table(document: DocumentKind, src: &str) -> Result<Table, MergeError> {
    toml::from_str::<Table>(src).map_err(|source| MergeError::Parse { document, source })
}

/// Parses raw file bytes into a top-level table.
///
/// # Errors
///
/// Returns [`MergeError::Encoding`] for bytes that are not UTF-8 and
/// [`MergeError::Parse`] for text that is not valid TOML.
pub fn parse_document(document: DocumentKind, bytes: &[u8]) -> Result<Table, MergeError> {
    let src =
        std::str::from_utf8(bytes).map_err(|source| MergeError::Encoding { document, source })?;
    parse_table(document, src)
}

/// Decodes a raw table into a document; absent fields take their zero value.
pub fn decode<D: Document>(table: Table) -> Result<D, toml::de::Error> {
    Value::Table(table).try_into()
}

/// Shallow overlay: every top-level key of `user` replaces the one in `defaults`.
pub fn overlay(defaults: &Table, user: &Table) -> Table {
    let mut merged = defaults.clone();
    for (key, value) in user {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Merges `user` over `defaults`, failing on any undecodable user value.
///
/// # Errors
///
/// Returns [`MergeError::Defaults`] if the defaults alone do not decode, and
/// [`MergeError::Decode`] if the merged table does not.
pub fn merge_strict<D: Document>(defaults: &Table, user: &Table) -> Result<D, MergeError> {
    check_defaults::<D>(defaults)?;
    decode(overlay(defaults, user)).map_err(|source| MergeError::Decode {
        document: D::KIND,
        source,
    })
}

/// Merges `user` over `defaults`, keeping the default for every user field
/// whose value does not decode.
///
/// # Errors
///
/// Returns [`MergeError::Defaults`] if the defaults alone do not decode.
pub fn merge_lenient<D: Document>(defaults: &Table, user: &Table) -> Result<Merged<D>, MergeError> {
    let baseline = check_defaults::<D>(defaults)?;

    if let Ok(document) = decode::<D>(overlay(defaults, user)) {
        return Ok(Merged {
            document,
            rejected: Vec::new(),
        });
    }

    // Apply user keys one at a time so a single bad value only costs that field.
    let mut accepted = defaults.clone();
    let mut document = baseline;
    let mut rejected = Vec::new();
    for (key, value) in user {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value.clone());
        match decode::<D>(candidate.clone()) {
            Ok(decoded) => {
                accepted = candidate;
                document = decoded;
            }
            Err(e) => {
                debug!(document = %D::KIND, field = %key, "rejected user value: {e}");
                rejected.push(Rejection {
                    field: key.clone(),
                    message: e.message().to_string(),
                });
            }
        }
    }

    Ok(Merged { document, rejected })
}

fn check_defaults<D: Document>(defaults: &Table) -> Result<D, MergeError> {
    decode(defaults.clone()).map_err(|source| MergeError::Defaults {
        document: D::KIND,
        source,
    })
}
