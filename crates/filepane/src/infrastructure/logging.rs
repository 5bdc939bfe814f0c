//! Structured logging to an append-only file.
//!
//! The terminal belongs to the UI, so log records go to `filepane.log` in the
//! data directory instead of stderr.  The level defaults to `info` and is
//! overridden by `RUST_LOG`.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logger initialisation.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber was already installed.
    #[error("cannot install logger: {0}")]
    Install(String),
}

/// Installs the global subscriber writing to `log_file`, creating its parent
/// directory if needed.
///
/// # Errors
///
/// Returns [`LoggingError`] if the file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: &Path) -> Result<(), LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: log_file.to_path_buf(),
        source,
    };
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(open_err)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
