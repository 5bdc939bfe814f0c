//! The production bundle: `assets/` compiled into the binary.

use std::borrow::Cow;
use std::path::Path;

use include_dir::{include_dir, Dir, DirEntry};

use super::{AssetBundle, BundleEntry, BundleError};

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// [`AssetBundle`] backed by the compiled-in `assets/` directory.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBundle {
    root: &'static Dir<'static>,
}

impl EmbeddedBundle {
    pub fn new() -> Self {
        Self { root: &ASSETS }
    }
}

impl Default for EmbeddedBundle {
    fn default() -> Self {
        Self::new()
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

impl AssetBundle for EmbeddedBundle {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        self.root
            .get_file(path)
            .map(|file| Cow::Borrowed(file.contents()))
            .ok_or_else(|| BundleError::NotFound(path.to_string()))
    }

    fn entries(&self, dir: &str) -> Result<Vec<BundleEntry>, BundleError> {
        let dir = self
            .root
            .get_dir(dir)
            .ok_or_else(|| BundleError::NotFound(dir.to_string()))?;
        let mut entries: Vec<BundleEntry> = dir
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                DirEntry::Dir(d) => file_name(d.path()).map(BundleEntry::Dir),
                DirEntry::File(f) => file_name(f.path()).map(BundleEntry::File),
            })
            .collect();
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::assets::{theme_asset, CONFIG_ASSET, THEME_ASSET_DIR};

    #[test]
    fn test_embedded_bundle_contains_config() {
        let bundle = EmbeddedBundle::new();
        let text = bundle.read_str(CONFIG_ASSET).expect("config.toml is bundled");
        assert!(text.contains("theme = \"catppuccin\""));
    }

    #[test]
    fn test_embedded_theme_dir_lists_default_theme() {
        let bundle = EmbeddedBundle::new();
        let entries = bundle.entries(THEME_ASSET_DIR).expect("theme dir is bundled");
        assert!(entries.contains(&BundleEntry::File("catppuccin.toml".to_string())));
        assert!(entries.iter().all(|e| matches!(e, BundleEntry::File(_))));
    }

    #[test]
    fn test_every_embedded_theme_is_readable() {
        let bundle = EmbeddedBundle::new();
        for entry in bundle.entries(THEME_ASSET_DIR).expect("theme dir") {
            if let BundleEntry::File(name) = entry {
                assert!(bundle.read(&theme_asset(&name)).is_ok(), "{name}");
            }
        }
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let err = EmbeddedBundle::new().read("nope.toml").expect_err("absent");
        assert_eq!(err, BundleError::NotFound("nope.toml".to_string()));
    }
}
