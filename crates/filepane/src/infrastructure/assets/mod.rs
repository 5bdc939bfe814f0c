//! Compiled-in default assets and their extraction to disk.
//!
//! The bundle is a read-only virtual file system with this layout:
//!
//! ```text
//! config.toml
//! hotkeys.toml
//! theme/
//!   catppuccin.toml
//!   gruvbox.toml
//!   ...
//! ```
//!
//! # Testability
//!
//! The [`AssetBundle`] trait lets tests swap the compiled-in
//! [`embedded::EmbeddedBundle`] for a [`memory::MemoryBundle`] with arbitrary
//! (or missing) contents.

use std::borrow::Cow;

use filepane_core::ThemeDocument;
use thiserror::Error;

pub mod bootstrap;
pub mod embedded;
pub mod memory;

pub const CONFIG_ASSET: &str = "config.toml";
pub const HOTKEYS_ASSET: &str = "hotkeys.toml";
pub const THEME_ASSET_DIR: &str = "theme";

/// Error type for bundle lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("bundled asset not found: {0}")]
    NotFound(String),
    #[error("bundled asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// A direct child of a bundle directory, by file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BundleEntry {
    File(String),
    Dir(String),
}

/// Read-only access to the bundled default assets.
pub trait AssetBundle {
    /// Raw bytes of the file at `path` (relative to the bundle root).
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError>;

    /// Direct children of the directory at `dir`.
    fn entries(&self, dir: &str) -> Result<Vec<BundleEntry>, BundleError>;

    fn read_str(&self, path: &str) -> Result<String, BundleError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes.into_owned()).map_err(|_| BundleError::NotUtf8(path.to_string()))
    }
}

/// Path of a bundled theme file.
pub fn theme_asset(name: &str) -> String {
    format!("{THEME_ASSET_DIR}/{name}")
}

/// The three default documents every loader layers user files on top of.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultAssetSet {
    pub settings: Cow<'static, str>,
    pub hotkeys: Cow<'static, str>,
    /// Raw text of the default theme, used when the selected theme is unreadable.
    pub theme: Cow<'static, str>,
}

impl DefaultAssetSet {
    /// Reads the default documents from `bundle`.
    ///
    /// # Errors
    ///
    /// Returns the first [`BundleError`] encountered.
    pub fn from_bundle(bundle: &dyn AssetBundle) -> Result<Self, BundleError> {
        let default_theme = theme_asset(&format!("{}.toml", ThemeDocument::DEFAULT_NAME));
        Ok(Self {
            hotkeys: Cow::Owned(bundle.read_str(HOTKEYS_ASSET)?),
            settings: Cow::Owned(bundle.read_str(CONFIG_ASSET)?),
            theme: Cow::Owned(bundle.read_str(&default_theme)?),
        })
    }

    /// The same documents, compiled in as plain strings.
    pub fn builtin() -> Self {
        Self {
            settings: Cow::Borrowed(include_str!("../../../assets/config.toml")),
            hotkeys: Cow::Borrowed(include_str!("../../../assets/hotkeys.toml")),
            theme: Cow::Borrowed(include_str!("../../../assets/theme/catppuccin.toml")),
        }
    }
}
