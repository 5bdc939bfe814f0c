//! In-memory bundle for unit and integration tests.
//!
//! Lets tests build bundles with missing files, nested directories or
//! arbitrary theme sets without touching the compiled-in assets.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use super::{AssetBundle, BundleEntry, BundleError};

/// An [`AssetBundle`] whose files live in a map keyed by `/`-separated path.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file.
    pub fn with_file(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), contents.into());
        self
    }

    /// Removes a file, e.g. to simulate an incomplete bundle.
    pub fn without_file(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }
}

impl AssetBundle for MemoryBundle {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        self.files
            .get(path)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or_else(|| BundleError::NotFound(path.to_string()))
    }

    fn entries(&self, dir: &str) -> Result<Vec<BundleEntry>, BundleError> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let mut entries = BTreeSet::new();
        for path in self.files.keys() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((child_dir, _)) => entries.insert(BundleEntry::Dir(child_dir.to_string())),
                None => entries.insert(BundleEntry::File(rest.to_string())),
            };
        }
        if entries.is_empty() {
            return Err(BundleError::NotFound(dir.to_string()));
        }
        Ok(entries.into_iter().collect())
    }
}
