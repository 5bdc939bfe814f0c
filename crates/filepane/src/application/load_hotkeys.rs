//! Use case: load the hotkeys document.
//!
//! Unlike settings, a hotkeys file that does not parse or decode is fatal:
//! running with silently swapped key bindings is worse than not starting.
//! Missing bindings are reported one by one, since a user usually wants to
//! know exactly which action lost its key.

use std::path::Path;

use filepane_core::schema::{
    diff, merge_strict, parse_document, parse_table, unknown_fields, validate,
};
use filepane_core::{Document, DocumentKind, HotkeysDocument};
use tracing::{info, warn};

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::startup::StartupError;
use crate::infrastructure::storage::{read_document, write_document};

/// Loads `path` layered over `defaults`, rewriting it in fix mode.
///
/// # Errors
///
/// See [`StartupError`]; every variant returned here is fatal.
pub fn load_hotkeys(
    path: &Path,
    defaults: &str,
    fix: bool,
    sink: &mut dyn DiagnosticSink,
) -> Result<HotkeysDocument, StartupError> {
    let kind = DocumentKind::Hotkeys;
    let defaults = parse_table(kind, defaults).map_err(StartupError::Defaults)?;
    let bytes = read_document(path).map_err(|source| StartupError::Unreadable {
        document: kind,
        source,
    })?;
    let user = parse_document(kind, &bytes).map_err(StartupError::Malformed)?;
    let hotkeys =
        merge_strict::<HotkeysDocument>(&defaults, &user).map_err(StartupError::from_merge)?;

    let drift = diff::<HotkeysDocument>(&defaults, &user);
    if !drift.is_empty() {
        if fix {
            write_document(&hotkeys, path)?;
            info!(path = %path.display(), fields = drift.len(), "hotkeys file repaired");
            sink.report(Diagnostic::Repaired {
                document: kind,
                path: path.to_path_buf(),
                added: drift.iter().map(|d| d.field).collect(),
            });
        } else {
            for d in &drift {
                warn!("hotkeys: {d}");
            }
            sink.report(Diagnostic::MissingFields {
                document: kind,
                drift,
            });
        }
    }

    validate(&hotkeys)?;

    for key in unknown_fields::<HotkeysDocument>(&user) {
        info!(document = %HotkeysDocument::KIND, field = %key, "ignoring unknown field");
    }

    Ok(hotkeys)
}
