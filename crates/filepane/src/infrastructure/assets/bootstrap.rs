//! First-run seeding and version-gated theme extraction.
//!
//! # Decision table
//!
//! | theme folder | marker file          | action                              |
//! |--------------|----------------------|-------------------------------------|
//! | missing      | any                  | create folder, extract all themes   |
//! | present      | == running version   | nothing (user edits are preserved)  |
//! | present      | missing or different | re-extract all themes (overwrite)   |
//!
//! Bundled themes are authoritative on upgrade: a bundled file overwrites a
//! same-named file on disk.  Themes the user created under other names are
//! never touched.
//!
//! Bootstrap is best-effort.  Per-file failures are logged and counted, and
//! the caller only logs a returned [`BootstrapError`]; loaders have their own
//! compiled-in fallbacks.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{theme_asset, AssetBundle, BundleEntry, BundleError, DefaultAssetSet, THEME_ASSET_DIR};
use crate::infrastructure::paths::ConfigPaths;
use crate::infrastructure::storage::{read_optional, write_bytes, ReadError};

/// Error type for a bootstrap run that had to stop early.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The bundle is missing a default document or the theme directory.
    #[error("incomplete asset bundle: {0}")]
    Bundle(#[from] BundleError),

    /// The version marker exists but could not be read.
    #[error("failed to read theme version marker: {0}")]
    Marker(#[source] ReadError),

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to the theme folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// The folder did not exist and was created.
    Fresh,
    /// The marker named another version (or was missing); themes were re-extracted.
    Upgraded { previous: Option<String> },
    /// The marker matched the running version; nothing was extracted.
    Current,
}

/// Summary of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub action: BootstrapAction,
    /// Default documents written because the user had none.
    pub seeded: Vec<PathBuf>,
    /// Theme files written into the theme folder.
    pub extracted: Vec<PathBuf>,
    /// Theme files that could not be read from the bundle or written.
    pub failed: usize,
    pub marker_updated: bool,
}

/// Guarantees the configuration tree exists and the bundled themes are current.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the run had to stop early.  Files written
/// before that point stay on disk.
pub fn bootstrap(
    bundle: &dyn AssetBundle,
    paths: &ConfigPaths,
    running_version: &str,
) -> Result<BootstrapReport, BootstrapError> {
    let defaults = DefaultAssetSet::from_bundle(bundle)?;

    create_dir(&paths.config_dir)?;
    create_dir(&paths.data_dir)?;
    let seeded = seed_documents(&defaults, paths);

    let marker = read_optional(&paths.theme_version_file).map_err(BootstrapError::Marker)?;
    let marker = marker.as_deref().map(str::trim);

    let action = if !paths.theme_dir.exists() {
        create_dir(&paths.theme_dir)?;
        BootstrapAction::Fresh
    } else if marker == Some(running_version) {
        debug!(version = running_version, "bundled themes are current");
        return Ok(BootstrapReport {
            action: BootstrapAction::Current,
            seeded,
            extracted: Vec::new(),
            failed: 0,
            marker_updated: false,
        });
    } else {
        BootstrapAction::Upgraded {
            previous: marker.map(str::to_string),
        }
    };

    let (extracted, failed) = extract_themes(bundle, &paths.theme_dir)?;

    // A partial extraction leaves the marker alone so the next launch retries.
    let marker_updated = failed == 0
        && match write_bytes(&paths.theme_version_file, running_version.as_bytes()) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to update theme version marker: {e}");
                false
            }
        };

    info!(
        ?action,
        extracted = extracted.len(),
        failed,
        "bundled themes extracted"
    );

    Ok(BootstrapReport {
        action,
        seeded,
        extracted,
        failed,
        marker_updated,
    })
}

fn create_dir(path: &Path) -> Result<(), BootstrapError> {
    std::fs::create_dir_all(path).map_err(|source| BootstrapError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the default settings and hotkeys documents where none exist yet.
fn seed_documents(defaults: &DefaultAssetSet, paths: &ConfigPaths) -> Vec<PathBuf> {
    let documents = [
        (&paths.config_file, &defaults.settings),
        (&paths.hotkeys_file, &defaults.hotkeys),
    ];

    let mut seeded = Vec::new();
    for (path, text) in documents {
        if path.exists() {
            continue;
        }
        match write_bytes(path, text.as_bytes()) {
            Ok(()) => {
                info!(path = %path.display(), "wrote default document");
                seeded.push(path.clone());
            }
            Err(e) => warn!("failed to seed default document: {e}"),
        }
    }
    seeded
}

/// Copies every file in the bundle's theme directory into `theme_dir`.
///
/// Nested directories are skipped.  Returns the written paths and the number
/// of files that failed.
fn extract_themes(
    bundle: &dyn AssetBundle,
    theme_dir: &Path,
) -> Result<(Vec<PathBuf>, usize), BootstrapError> {
    let mut extracted = Vec::new();
    let mut failed = 0;

    for entry in bundle.entries(THEME_ASSET_DIR)? {
        let name = match entry {
            BundleEntry::File(name) => name,
            BundleEntry::Dir(name) => {
                debug!(dir = %name, "skipping nested bundle directory");
                continue;
            }
        };

        let contents = match bundle.read(&theme_asset(&name)) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to read bundled theme: {e}");
                failed += 1;
                continue;
            }
        };

        let target = theme_dir.join(&name);
        match write_bytes(&target, &contents) {
            Ok(()) => extracted.push(target),
            Err(e) => {
                warn!("failed to extract theme: {e}");
                failed += 1;
            }
        }
    }

    Ok((extracted, failed))
}
