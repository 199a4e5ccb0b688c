//! Snapshots of the canonical (base) translation tree.
//!
//! The base set is the application's original translations, used only as
//! the merge baseline for saves. It is rebuilt from disk on every call so
//! it always reflects the current canonical tree; nothing is cached
//! between operations.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::storage::Storage;
use crate::tree::TranslationTree;

/// Base trees keyed by locale, then by group identifier.
pub type BaseSnapshots = BTreeMap<String, BTreeMap<String, TranslationTree>>;

pub struct BaseTranslationIndex<'a, S: Storage> {
    storage: &'a S,
    lang_root: &'a Path,
    fallback_locale: &'a str,
}

impl<'a, S: Storage> BaseTranslationIndex<'a, S> {
    pub fn new(storage: &'a S, lang_root: &'a Path, fallback_locale: &'a str) -> Self {
        Self {
            storage,
            lang_root,
            fallback_locale,
        }
    }

    /// Load the base tree for every locale directory under the canonical
    /// root.
    ///
    /// Each sub-directory name is a locale; each group file directly
    /// inside it is loaded keyed by its file stem. An empty or missing
    /// file yields an empty tree, never an error. A locale directory with
    /// no group files at all inherits a copy of the fallback locale's
    /// groups.
    pub fn load(&self) -> Result<BaseSnapshots> {
        let mut snapshots = BaseSnapshots::new();

        for dir in self.storage.list_directories(self.lang_root)? {
            let Some(locale) = dir.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            let mut groups = BTreeMap::new();
            for file in self.storage.list_files(&dir)? {
                // group files sit directly inside the locale directory
                if file.relative_path.components().count() != 1 {
                    continue;
                }
                let tree = self.storage.read_tree(&file.path)?.unwrap_or_default();
                groups.insert(file.basename.clone(), tree);
            }
            snapshots.insert(locale.to_string(), groups);
        }

        let fallback_groups = snapshots
            .get(self.fallback_locale)
            .cloned()
            .unwrap_or_default();
        for groups in snapshots.values_mut() {
            if groups.is_empty() {
                *groups = fallback_groups.clone();
            }
        }

        Ok(snapshots)
    }

    /// Merge baseline for one (locale, group identifier).
    ///
    /// A locale missing from the index falls back to the configured
    /// fallback locale; when both are missing the baseline is empty.
    pub fn snapshot_for(
        &self,
        snapshots: &BaseSnapshots,
        locale: &str,
        group_identifier: &str,
    ) -> TranslationTree {
        snapshots
            .get(locale)
            .or_else(|| snapshots.get(self.fallback_locale))
            .and_then(|groups| groups.get(group_identifier))
            .cloned()
            .unwrap_or_default()
    }
}
