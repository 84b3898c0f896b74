//! Plain-text store of the desired extension set (`extensions.txt`).

use crate::extension::{parse_lines, ExtensionId};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// One identifier per line, written sorted so diffs stay stable.
#[derive(Debug, Clone)]
pub struct ExtensionStore {
    path: PathBuf,
}

impl ExtensionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrites the store with `extensions`, sorted ascending.
    ///
    /// Returns the number of identifiers written.
    pub fn save(&self, extensions: &[ExtensionId]) -> Result<usize> {
        let mut sorted: Vec<&ExtensionId> = extensions.iter().collect();
        sorted.sort();

        let mut content = String::new();
        for id in &sorted {
            content.push_str(id.as_str());
            content.push('\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = sorted.len(), "saved extension list");
        Ok(sorted.len())
    }

    /// Reads identifiers in file order. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<ExtensionId>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(parse_lines(&content))
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        /// Property: save then load yields the same identifiers, in sorted order.
        #[test]
        fn save_then_load_round_trips(
            raw in prop::collection::vec("[a-z0-9-]{1,10}\\.[a-z0-9-]{1,10}(@[0-9.]{1,8})?", 0..20)
        ) {
            let dir = tempfile::tempdir().unwrap();
            let store = ExtensionStore::new(dir.path().join("extensions.txt"));
            let list: Vec<ExtensionId> = raw.iter().map(|s| ExtensionId::new(s.as_str())).collect();

            let written = store.save(&list).unwrap();
            let loaded = store.load().unwrap();

            prop_assert_eq!(written, list.len());
            let mut expected = list.clone();
            expected.sort();
            prop_assert_eq!(&loaded, &expected);

            let as_set: BTreeSet<_> = loaded.into_iter().collect();
            let original: BTreeSet<_> = list.into_iter().collect();
            prop_assert_eq!(as_set, original);
        }
    }
}
