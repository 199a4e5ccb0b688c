//! The orchestrator tying codec, merge, path resolution, discovery and the
//! base index together.
//!
//! Every operation is a self-contained read-modify-write sequence against
//! the storage capability; no tree survives in memory between calls. Saves
//! always merge over the base snapshot, never replace it, so a single-key
//! edit cannot drop the keys around it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;

use crate::base::BaseTranslationIndex;
use crate::catalog::discover_groups;
use crate::config::Config;
use crate::group::Group;
use crate::loader::{TranslationLoader, WILDCARD};
use crate::paths::PathResolver;
use crate::storage::Storage;
use crate::tree::codec::{self, StructureWarning};
use crate::tree::merge::merge_trees;
use crate::tree::{FlatTranslations, sort_tree};

/// Outcome of a save: where the merged tree landed plus any structural
/// warnings produced while rebuilding the edited tree.
#[derive(Debug)]
pub struct SaveReport {
    pub path: PathBuf,
    pub warnings: Vec<StructureWarning>,
}

/// Outcome of promoting a locale's overrides into the base tree.
#[derive(Debug, Default)]
pub struct PromoteReport {
    /// Promoted groups with their destination under the canonical root.
    pub promoted: Vec<(Group, PathBuf)>,
    pub warnings: Vec<StructureWarning>,
}

pub struct TranslationManager<S: Storage, L: TranslationLoader> {
    storage: S,
    loader: L,
    resolver: PathResolver,
    lang_root: PathBuf,
    fallback_locale: String,
}

impl<S: Storage, L: TranslationLoader> TranslationManager<S, L> {
    pub fn new(storage: S, loader: L, config: &Config) -> Self {
        Self {
            resolver: PathResolver::new(&config.override_root),
            lang_root: PathBuf::from(&config.lang_root),
            fallback_locale: config.fallback_locale.clone(),
            storage,
            loader,
        }
    }

    /// Store a single edited key for (locale, group) in the override root,
    /// keeping every key the edit did not touch.
    ///
    /// The group identifier is assumed well-formed, as produced by
    /// [`Self::translation_groups`].
    pub fn save(
        &self,
        locale: &str,
        group: &str,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<SaveReport> {
        let group = Group::parse(group);
        self.resolver.ensure_locale_directory(&self.storage, locale)?;

        let current_path = self.resolver.resolve_group_path(locale, &group, None);
        let current = self.storage.read_tree(&current_path)?.unwrap_or_default();

        let mut flat = codec::flatten(&current);
        flat.insert(key.to_string(), value.into());

        self.persist(locale, &group, &flat, None)
    }

    /// The set of groups present under the canonical language root.
    pub fn translation_groups(&self) -> Result<Vec<Group>> {
        discover_groups(&self.storage, &self.lang_root)
    }

    /// Flat view of one group as the application currently resolves it.
    pub fn translations_for_group(&self, locale: &str, group: &str) -> Result<FlatTranslations> {
        let group = Group::parse(group);
        let tree = if group.is_single() {
            self.loader.load(locale, WILDCARD, Some(WILDCARD))?
        } else {
            self.loader
                .load(locale, &group.name, group.namespace.as_deref())?
        };
        Ok(codec::flatten(&tree))
    }

    /// Merge every non-empty override for `locale` into the canonical
    /// language root, promoting accumulated edits into the base tree.
    pub fn merge_overrides_into_base(&self, locale: &str) -> Result<PromoteReport> {
        let mut report = PromoteReport::default();

        for group in self.translation_groups()? {
            let override_path = self.resolver.resolve_group_path(locale, &group, None);
            let Some(tree) = self.storage.read_tree(&override_path)? else {
                continue;
            };
            if tree.is_empty() {
                continue;
            }

            let flat = codec::flatten(&tree);
            let saved = self.persist(locale, &group, &flat, Some(&self.lang_root))?;
            report.warnings.extend(saved.warnings);
            report.promoted.push((group, saved.path));
        }

        Ok(report)
    }

    /// Shared save pipeline: rebuild the edited tree from its flat form,
    /// merge it over the base snapshot (edited wins), normalize key order
    /// and write the result.
    fn persist(
        &self,
        locale: &str,
        group: &Group,
        flat: &FlatTranslations,
        root_override: Option<&Path>,
    ) -> Result<SaveReport> {
        let codec::UnflattenResult { tree, warnings } = codec::unflatten(flat);

        let path = self.resolver.resolve_group_path(locale, group, root_override);
        self.resolver
            .ensure_group_directory(&self.storage, locale, group, root_override)?;

        let index = self.base_index();
        let snapshots = index.load()?;
        let base = index.snapshot_for(&snapshots, locale, &group.to_string());

        let merged = sort_tree(&merge_trees(&base, &tree));
        self.storage.write_tree(&path, &merged)?;

        Ok(SaveReport { path, warnings })
    }

    /// Built fresh per operation; base snapshots are never cached across
    /// calls.
    fn base_index(&self) -> BaseTranslationIndex<'_, S> {
        BaseTranslationIndex::new(&self.storage, &self.lang_root, &self.fallback_locale)
    }
}
