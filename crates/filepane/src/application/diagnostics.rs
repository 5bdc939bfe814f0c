//! Non-fatal findings produced while loading documents.
//!
//! Loaders push [`Diagnostic`]s into a [`DiagnosticSink`] as soon as they are
//! found, so warnings already reported survive a later fatal error.  The
//! binary's sink prints them to the terminal; tests collect them in a `Vec`.

use std::path::PathBuf;

use filepane_core::schema::{Drift, Rejection};
use filepane_core::DocumentKind;

/// How prominently a diagnostic is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged only.
    Info,
    /// Printed to the user and logged.
    Warning,
}

/// A finding that does not stop startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The settings file is not valid TOML; every field uses its default.
    Unparseable { document: DocumentKind, message: String },

    /// Some user values have the wrong type and were replaced by defaults.
    RejectedFields {
        document: DocumentKind,
        rejected: Vec<Rejection>,
    },

    /// The user's document lacks fields the current schema defines.
    MissingFields {
        document: DocumentKind,
        drift: Vec<Drift>,
    },

    /// Fix mode rewrote the document with the missing fields filled in.
    Repaired {
        document: DocumentKind,
        path: PathBuf,
        added: Vec<&'static str>,
    },

    /// Fix mode was requested but the document has values it cannot repair.
    RepairSkipped { document: DocumentKind },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Repaired { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn document(&self) -> DocumentKind {
        match self {
            Diagnostic::Unparseable { document, .. }
            | Diagnostic::RejectedFields { document, .. }
            | Diagnostic::MissingFields { document, .. }
            | Diagnostic::Repaired { document, .. }
            | Diagnostic::RepairSkipped { document } => *document,
        }
    }

    /// One line per message, without styling.
    ///
    /// Missing hotkeys are listed one per line; missing settings are
    /// summarised in a single line.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Diagnostic::Unparseable { document, message } => {
                vec![format!("Error decoding {document} file: {message}")]
            }
            Diagnostic::RejectedFields { document, rejected } => rejected
                .iter()
                .map(|r| {
                    format!(
                        "Invalid value for \"{}\" in {document} file, using the default: {}",
                        r.field, r.message
                    )
                })
                .collect(),
            Diagnostic::MissingFields {
                document: DocumentKind::Hotkeys,
                drift,
            } => drift
                .iter()
                .map(|d| format!("{} in hotkeys configuration", capitalize(&d.to_string())))
                .collect(),
            Diagnostic::MissingFields { document, drift } => {
                let names: Vec<&str> = drift.iter().map(|d| d.field).collect();
                vec![format!(
                    "Missing fields in {document} file: {}",
                    names.join(", ")
                )]
            }
            Diagnostic::Repaired {
                document,
                path,
                added,
            } => vec![format!(
                "Added {} missing field(s) to {document} file {}",
                added.len(),
                path.display()
            )],
            Diagnostic::RepairSkipped { document } => vec![format!(
                "The {document} file was not rewritten because some values could not be decoded"
            )],
        }
    }

    /// Remediation hint printed after the messages, if any.
    pub fn hint(&self) -> Option<String> {
        let Diagnostic::MissingFields { document, .. } = self else {
            return None;
        };
        let flag = fix_flag(*document)?;
        let file = document.file_name()?;
        Some(format!(
            "To add missing fields to {file} automatically run filepane with the {flag} flag `filepane {flag}`"
        ))
    }
}

/// The command-line flag that enables fix mode for `document`.
pub fn fix_flag(document: DocumentKind) -> Option<&'static str> {
    match document {
        DocumentKind::Settings => Some("--fix-config-file"),
        DocumentKind::Hotkeys => Some("--fix-hotkeys"),
        DocumentKind::Theme => None,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Receives diagnostics as loaders produce them.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
