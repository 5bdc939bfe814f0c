//! Use case: load the theme named by the settings.
//!
//! A theme file that cannot be read, or a theme name that does not name a file
//! in the theme directory, is replaced by the bundled default theme without
//! bothering the user.  A theme file that can be read but is not UTF-8 TOML,
//! or does not decode, is fatal.  Themes are not diffed: a missing color simply stays
//! empty.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use filepane_core::schema::{decode, parse_document, MergeError};
use filepane_core::{Document, ThemeDocument};
use tracing::{debug, warn};

use super::startup::StartupError;
use crate::infrastructure::storage::read_document;

/// Where the loaded theme came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    File(PathBuf),
    /// The compiled-in default theme.
    Builtin,
}

/// A decoded theme and its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTheme {
    pub theme: ThemeDocument,
    pub source: ThemeSource,
}

/// Loads the theme at `path`, falling back to `fallback` text when there is
/// no path or the file is unreadable.
///
/// # Errors
///
/// Returns [`StartupError::Malformed`] if the chosen bytes do not decode.
pub fn load_theme(path: Option<&Path>, fallback: &str) -> Result<LoadedTheme, StartupError> {
    let file = match path {
        Some(path) => match read_document(path) {
            Ok(bytes) => Some((bytes, path)),
            Err(e) if e.is_not_found() => {
                debug!(path = %path.display(), "theme file not found, using built-in theme");
                None
            }
            Err(e) => {
                warn!("{e}; using built-in theme");
                None
            }
        },
        None => {
            warn!("theme name does not name a file in the theme directory; using built-in theme");
            None
        }
    };
    let (bytes, source) = match file {
        Some((bytes, path)) => (Cow::Owned(bytes), ThemeSource::File(path.to_path_buf())),
        None => (Cow::Borrowed(fallback.as_bytes()), ThemeSource::Builtin),
    };

    let kind = ThemeDocument::KIND;
    let table = parse_document(kind, &bytes).map_err(StartupError::Malformed)?;
    let theme = decode::<ThemeDocument>(table).map_err(|source| {
        StartupError::Malformed(MergeError::Decode {
            document: kind,
            source,
        })
    })?;

    Ok(LoadedTheme { theme, source })
}
