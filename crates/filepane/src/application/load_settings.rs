//! Use case: load the general settings document.
//!
//! Settings are the most forgiving document.  A file that is not valid UTF-8
//! or TOML, or that has a value of the wrong type, degrades to defaults with a
//! warning.  Only an unreadable file, a failed fix-mode write, or a value
//! outside its allowed range stops startup.
//!
//! ```text
//! read ─► parse ─► merge_lenient ─► diff ─┬─ fix mode:   rewrite file
//!                                         └─ otherwise:  warn + hint
//!                                                    ─► validate
//! ```

use std::path::Path;

use filepane_core::schema::{
    diff, merge_lenient, parse_document, parse_table, unknown_fields, validate,
};
use filepane_core::{Document, DocumentKind, SettingsDocument};
use toml::Table;
use tracing::{info, warn};

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::startup::StartupError;
use crate::infrastructure::storage::{read_document, write_document};

/// Loads `path` layered over `defaults`.
///
/// With `fix` set, a file missing fields is rewritten with the merged
/// document.  The rewrite is skipped when some user value was rejected, so
/// fix mode never replaces a value the user wrote.
///
/// # Errors
///
/// See [`StartupError`]; every variant returned here is fatal.
pub fn load_settings(
    path: &Path,
    defaults: &str,
    fix: bool,
    sink: &mut dyn DiagnosticSink,
) -> Result<SettingsDocument, StartupError> {
    let kind = DocumentKind::Settings;
    let defaults = parse_table(kind, defaults).map_err(StartupError::Defaults)?;
    let bytes = read_document(path).map_err(|source| StartupError::Unreadable {
        document: kind,
        source,
    })?;

    let user = match parse_document(kind, &bytes) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(path = %path.display(), "settings file cannot be parsed: {e}");
            sink.report(Diagnostic::Unparseable {
                document: kind,
                message: e.to_string(),
            });
            None
        }
    };

    // An unparseable file has no keys to diff against; leave it alone.
    let Some(user) = user else {
        let merged = merge_lenient::<SettingsDocument>(&defaults, &Table::new())
            .map_err(StartupError::Defaults)?;
        validate(&merged.document)?;
        return Ok(merged.document);
    };

    let merged = merge_lenient::<SettingsDocument>(&defaults, &user)
        .map_err(StartupError::Defaults)?;
    if !merged.rejected.is_empty() {
        warn!(count = merged.rejected.len(), "settings values replaced by defaults");
        sink.report(Diagnostic::RejectedFields {
            document: kind,
            rejected: merged.rejected.clone(),
        });
    }

    let drift = diff::<SettingsDocument>(&defaults, &user);
    if !drift.is_empty() {
        if fix && merged.rejected.is_empty() {
            write_document(&merged.document, path)?;
            info!(path = %path.display(), fields = drift.len(), "settings file repaired");
            sink.report(Diagnostic::Repaired {
                document: kind,
                path: path.to_path_buf(),
                added: drift.iter().map(|d| d.field).collect(),
            });
        } else {
            warn!(fields = drift.len(), "settings file is missing fields");
            if fix {
                sink.report(Diagnostic::RepairSkipped { document: kind });
            }
            sink.report(Diagnostic::MissingFields {
                document: kind,
                drift,
            });
        }
    }

    validate(&merged.document)?;

    for key in unknown_fields::<SettingsDocument>(&user) {
        info!(document = %SettingsDocument::KIND, field = %key, "ignoring unknown field");
    }

    Ok(merged.document)
}
