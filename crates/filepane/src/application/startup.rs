//! Use case: the startup sequence that turns the on-disk configuration into a
//! [`StartupContext`].
//!
//! # Order (for beginners)
//!
//! ```text
//! 1. default asset set   (bundle, or compiled-in strings if the bundle is incomplete)
//! 2. bootstrap           (seed documents, extract themes; failures only logged)
//! 3. settings            (lenient)
//! 4. hotkeys             (strict)
//! 5. theme               (named by settings; falls back to the built-in theme)
//! 6. dot-file toggle     (state file in the data dir)
//! 7. start directory     (CLI argument, else settings, else home)
//! ```
//!
//! Any step returning [`StartupError`] stops the sequence; nothing after it
//! runs.  Only the binary decides what a fatal error means for the process.

use std::path::{Path, PathBuf};

use filepane_core::schema::MergeError;
use filepane_core::{DocumentKind, HotkeysDocument, SettingsDocument, ValidationError};
use thiserror::Error;
use tracing::{info, warn};

use super::diagnostics::DiagnosticSink;
use super::load_hotkeys::load_hotkeys;
use super::load_settings::load_settings;
use super::load_theme::{load_theme, LoadedTheme};
use crate::infrastructure::assets::bootstrap::{bootstrap, BootstrapReport};
use crate::infrastructure::assets::{AssetBundle, DefaultAssetSet};
use crate::infrastructure::paths::{home_dir, ConfigPaths};
use crate::infrastructure::storage::{read_optional, ReadError, WriteError};

/// Error type for a startup that cannot continue.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A user document exists (or should exist) but could not be read.
    #[error("cannot read {document} file: {source}")]
    Unreadable {
        document: DocumentKind,
        #[source]
        source: ReadError,
    },

    /// A hotkeys or theme document does not parse or decode.
    #[error(transparent)]
    Malformed(MergeError),

    /// The bundled defaults do not fit the current schema.
    #[error(transparent)]
    Defaults(MergeError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Fix mode could not write the repaired document back.
    #[error("cannot repair configuration: {0}")]
    Write(#[from] WriteError),
}

impl StartupError {
    /// Classifies a merge failure: broken defaults vs. a broken user file.
    pub fn from_merge(err: MergeError) -> Self {
        match err {
            MergeError::Defaults { .. } => StartupError::Defaults(err),
            _ => StartupError::Malformed(err),
        }
    }
}

/// Inputs to [`run`] besides the bundle.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub paths: ConfigPaths,
    /// Version written to the theme marker file.
    pub version: String,
    pub fix_config_file: bool,
    pub fix_hotkeys: bool,
    /// Directory given on the command line, if any.
    pub start_dir: Option<PathBuf>,
}

/// Everything the UI needs once startup has succeeded.  Read-only by
/// convention: nothing mutates it after [`run`] returns.
#[derive(Debug, Clone)]
pub struct StartupContext {
    pub paths: ConfigPaths,
    pub settings: SettingsDocument,
    pub hotkeys: HotkeysDocument,
    pub theme: LoadedTheme,
    pub show_dot_files: bool,
    pub start_directory: PathBuf,
    /// `None` when bootstrap stopped early.
    pub bootstrap: Option<BootstrapReport>,
}

/// Runs the whole startup sequence.
///
/// # Errors
///
/// Returns the first fatal [`StartupError`].  Diagnostics reported to `sink`
/// before the failure are kept.
pub fn run(
    bundle: &dyn AssetBundle,
    options: &StartupOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<StartupContext, StartupError> {
    let paths = &options.paths;

    let defaults = DefaultAssetSet::from_bundle(bundle).unwrap_or_else(|e| {
        warn!("{e}; using compiled-in defaults");
        DefaultAssetSet::builtin()
    });

    let report = match bootstrap(bundle, paths, &options.version) {
        Ok(report) => {
            info!(action = ?report.action, extracted = report.extracted.len(), "bootstrap finished");
            Some(report)
        }
        Err(e) => {
            warn!("bootstrap stopped early: {e}");
            None
        }
    };

    let settings = load_settings(
        &paths.config_file,
        &defaults.settings,
        options.fix_config_file,
        sink,
    )?;
    let hotkeys = load_hotkeys(&paths.hotkeys_file, &defaults.hotkeys, options.fix_hotkeys, sink)?;
    let theme = load_theme(paths.theme_file(&settings.theme).as_deref(), &defaults.theme)?;

    let show_dot_files = read_dot_file_toggle(&paths.toggle_dot_file);
    let cwd = std::env::current_dir().ok();
    let start_directory = resolve_start_directory(
        options.start_dir.as_deref(),
        &settings.default_directory,
        home_dir().as_deref(),
        cwd.as_deref(),
    );

    info!(
        theme = %settings.theme,
        start_directory = %start_directory.display(),
        show_dot_files,
        "startup complete"
    );

    Ok(StartupContext {
        paths: paths.clone(),
        settings,
        hotkeys,
        theme,
        show_dot_files,
        start_directory,
        bootstrap: report,
    })
}

/// Reads the persisted "show hidden files" toggle; anything but `true` is off.
pub fn read_dot_file_toggle(path: &Path) -> bool {
    match read_optional(path) {
        Ok(Some(text)) => text.trim() == "true",
        Ok(None) => false,
        Err(e) => {
            warn!("{e}; hidden files stay hidden");
            false
        }
    }
}

/// Picks the directory the first panel opens in.
///
/// The command-line directory wins over `default_directory`.  A leading `~`
/// is expanded to `home`, and relative paths are joined onto `cwd`.  When a
/// relative path cannot be made absolute the home directory is used.
pub fn resolve_start_directory(
    cli_dir: Option<&Path>,
    default_directory: &str,
    home: Option<&Path>,
    cwd: Option<&Path>,
) -> PathBuf {
    let requested = match cli_dir {
        Some(dir) => dir.to_path_buf(),
        None => expand_home(default_directory, home),
    };
    if requested.is_absolute() {
        return requested;
    }
    match (cwd, home) {
        (Some(cwd), _) => cwd.join(requested),
        (None, Some(home)) => home.to_path_buf(),
        (None, None) => requested,
    }
}

fn expand_home(dir: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(dir);
    };
    if dir == "~" {
        return home.to_path_buf();
    }
    match dir.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_directory_wins() {
        let dir = resolve_start_directory(
            Some(Path::new("/srv")),
            "~/projects",
            Some(Path::new("/home/u")),
            Some(Path::new("/tmp")),
        );
        assert_eq!(dir, PathBuf::from("/srv"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let dir = resolve_start_directory(
            None,
            "~/projects",
            Some(Path::new("/home/u")),
            Some(Path::new("/tmp")),
        );
        assert_eq!(dir, PathBuf::from("/home/u/projects"));
    }

    #[test]
    fn test_bare_tilde_is_home() {
        let dir = resolve_start_directory(None, "~", Some(Path::new("/home/u")), None);
        assert_eq!(dir, PathBuf::from("/home/u"));
    }

    #[test]
    fn test_relative_directory_is_made_absolute() {
        let dir = resolve_start_directory(
            Some(Path::new("src")),
            ".",
            Some(Path::new("/home/u")),
            Some(Path::new("/work")),
        );
        assert_eq!(dir, PathBuf::from("/work/src"));
    }

    #[test]
    fn test_unresolvable_relative_directory_falls_back_to_home() {
        let dir = resolve_start_directory(None, ".", Some(Path::new("/home/u")), None);
        assert_eq!(dir, PathBuf::from("/home/u"));
    }

    #[test]
    fn test_tilde_inside_path_is_literal() {
        let dir = resolve_start_directory(None, "/data/~x", Some(Path::new("/home/u")), None);
        assert_eq!(dir, PathBuf::from("/data/~x"));
    }

    #[test]
    fn test_dot_file_toggle() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("toggle_dot_file");

        // Act + Assert
        assert!(!read_dot_file_toggle(&path));
        std::fs::write(&path, "true\n").expect("write");
        assert!(read_dot_file_toggle(&path));
        std::fs::write(&path, "false").expect("write");
        assert!(!read_dot_file_toggle(&path));
    }

    #[test]
    fn test_from_merge_separates_defaults_from_user_errors() {
        let bad: toml::de::Error = toml::from_str::<toml::Table>("x = ").expect_err("bad toml");
        let err = StartupError::from_merge(MergeError::Parse {
            document: DocumentKind::Hotkeys,
            source: bad,
        });
        assert!(matches!(err, StartupError::Malformed(_)));
    }
}
