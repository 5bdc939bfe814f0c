//! Diagnostics on the terminal, in the `Error ┃ message` style.
//!
//! Colors are only used when stderr is a terminal.

use std::io::{IsTerminal, Write};

use colored::Colorize;
use tracing::info;

use crate::application::diagnostics::{Diagnostic, DiagnosticSink, Severity};

/// Output styling configuration.
#[derive(Debug, Clone, Copy)]
pub struct TerminalStyle {
    pub use_colors: bool,
}

impl Default for TerminalStyle {
    fn default() -> Self {
        Self {
            use_colors: std::io::stderr().is_terminal(),
        }
    }
}

impl TerminalStyle {
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format error message.
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!(
                "{} {} {}",
                "Error".truecolor(0xF9, 0x39, 0x39).bold(),
                "┃".truecolor(0x00, 0xFF, 0xEE),
                msg
            )
        } else {
            format!("Error ┃ {msg}")
        }
    }

    /// Format remediation hint.
    pub fn hint(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "Hint ┃".cyan(), msg)
        } else {
            format!("Hint ┃ {msg}")
        }
    }

    /// All lines printed for `diagnostic`.
    pub fn render(&self, diagnostic: &Diagnostic) -> Vec<String> {
        let mut lines: Vec<String> = diagnostic
            .messages()
            .iter()
            .map(|m| self.error(m))
            .collect();
        if let Some(hint) = diagnostic.hint() {
            lines.push(self.hint(&hint));
        }
        lines
    }
}

/// Prints warnings to stderr as soon as they are reported; logs everything.
pub struct TerminalSink<W: Write> {
    style: TerminalStyle,
    out: W,
    printed: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(style: TerminalStyle, out: W) -> Self {
        Self {
            style,
            out,
            printed: 0,
        }
    }

    /// Number of diagnostics shown to the user so far.
    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for TerminalSink<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        for message in diagnostic.messages() {
            info!(document = %diagnostic.document(), "{message}");
        }
        if diagnostic.severity() == Severity::Info {
            return;
        }
        for line in self.style.render(&diagnostic) {
            // A closed stderr is not worth failing startup over.
            let _ = writeln!(self.out, "{line}");
        }
        self.printed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filepane_core::schema::{Drift, DriftReason};
    use filepane_core::DocumentKind;
    use std::path::PathBuf;

    #[test]
    fn test_plain_error_line() {
        assert_eq!(TerminalStyle::plain().error("boom"), "Error ┃ boom");
    }

    #[test]
    fn test_sink_prints_warnings_with_hint() {
        // Arrange
        let mut sink = TerminalSink::new(TerminalStyle::plain(), Vec::new());

        // Act
        sink.report(Diagnostic::MissingFields {
            document: DocumentKind::Hotkeys,
            drift: vec![Drift {
                field: "quit",
                reason: DriftReason::Absent,
            }],
        });

        // Assert
        assert_eq!(sink.printed(), 1);
        let out = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Error ┃ Field \"quit\" is missing in hotkeys configuration");
        assert!(lines[1].starts_with("Hint ┃ "));
        assert!(lines[1].contains("--fix-hotkeys"));
    }

    #[test]
    fn test_sink_does_not_print_info() {
        let mut sink = TerminalSink::new(TerminalStyle::plain(), Vec::new());
        sink.report(Diagnostic::Repaired {
            document: DocumentKind::Settings,
            path: PathBuf::from("/cfg/config.toml"),
            added: vec!["theme"],
        });
        assert_eq!(sink.printed(), 0);
        assert!(sink.into_inner().is_empty());
    }
}
