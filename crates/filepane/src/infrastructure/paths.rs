//! Platform-appropriate locations of every file the startup sequence touches.
//!
//! | Platform | Config dir                                  | Data dir                          |
//! |----------|---------------------------------------------|-----------------------------------|
//! | Linux    | `$XDG_CONFIG_HOME/filepane` (`~/.config`)   | `$XDG_DATA_HOME/filepane` (`~/.local/share`) |
//! | macOS    | `~/Library/Application Support/filepane`    | same as config                    |
//! | Windows  | `%APPDATA%\filepane`                        | same as config                    |
//!
//! Both directories can be overridden from the command line, which is also
//! how tests point the startup sequence at a scratch directory.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

const APP_DIR: &str = "filepane";

/// Error type for path resolution.
#[derive(Debug, Error)]
pub enum PathsError {
    /// Neither an override nor the platform environment yields a directory.
    #[error("could not determine platform {0} directory")]
    NoPlatformDir(&'static str),
}

/// Every on-disk path used during startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub config_file: PathBuf,
    pub hotkeys_file: PathBuf,
    pub theme_dir: PathBuf,
    /// One-line record of the version that last extracted `theme_dir`.
    pub theme_version_file: PathBuf,
    pub log_file: PathBuf,
    /// Persisted "show hidden files" toggle.
    pub toggle_dot_file: PathBuf,
}

impl ConfigPaths {
    /// Lays out all files under explicit config and data directories.
    pub fn from_dirs(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let data_dir = data_dir.into();
        Self {
            config_file: config_dir.join("config.toml"),
            hotkeys_file: config_dir.join("hotkeys.toml"),
            theme_dir: config_dir.join("theme"),
            theme_version_file: data_dir.join("theme_file_version"),
            log_file: data_dir.join("filepane.log"),
            toggle_dot_file: data_dir.join("toggle_dot_file"),
            config_dir,
            data_dir,
        }
    }

    /// Resolves paths from optional overrides, falling back to platform defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PathsError::NoPlatformDir`] when a directory has no override
    /// and cannot be derived from the environment.
    pub fn resolve(
        config_override: Option<&Path>,
        data_override: Option<&Path>,
    ) -> Result<Self, PathsError> {
        let config_dir = match config_override {
            Some(dir) => dir.to_path_buf(),
            None => platform_config_dir().ok_or(PathsError::NoPlatformDir("config"))?,
        };
        let data_dir = match data_override {
            Some(dir) => dir.to_path_buf(),
            None => platform_data_dir().ok_or(PathsError::NoPlatformDir("data"))?,
        };
        Ok(Self::from_dirs(config_dir, data_dir))
    }

    /// Path of the theme file for `name`.
    ///
    /// Returns `None` unless `name` is a single plain file name, so a theme
    /// name can never point outside the theme directory.
    pub fn theme_file(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => {
                Some(self.theme_dir.join(format!("{name}.toml")))
            }
            _ => None,
        }
    }
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join(APP_DIR))
    }

    #[cfg(target_os = "macos")]
    {
        home_dir().map(|h| h.join("Library").join("Application Support").join(APP_DIR))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|h| h.join(".config")))?;
        Some(base.join(APP_DIR))
    }
}

fn platform_data_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        platform_config_dir()
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|h| h.join(".local").join("share")))?;
        Some(base.join(APP_DIR))
    }
}
