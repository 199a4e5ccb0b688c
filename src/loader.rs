//! Read-only translation loading.
//!
//! The manager never resolves translations itself; it asks a
//! `TranslationLoader` for the tree an application would see. The
//! provided `ChainLoader` layers the override root over the canonical
//! root, so reads show base values with any saved edits applied on top.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::group::Group;
use crate::paths::{PathResolver, TREE_EXTENSION};
use crate::storage::Storage;
use crate::tree::{TranslationTree, merge::merge_trees};

/// Wildcard for "every group/namespace", used for the per-locale flat
/// catalogs.
pub const WILDCARD: &str = "*";

/// Supplies fully resolved translation trees.
pub trait TranslationLoader {
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<TranslationTree>;
}

/// Loader chaining the override root over the canonical language root.
pub struct ChainLoader<S: Storage> {
    storage: S,
    lang_root: PathBuf,
    resolver: PathResolver,
}

impl<S: Storage> ChainLoader<S> {
    pub fn new(
        storage: S,
        lang_root: impl Into<PathBuf>,
        override_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            storage,
            lang_root: lang_root.into(),
            resolver: PathResolver::new(override_root),
        }
    }

    /// Tree for (locale, group, namespace) under one root. Missing files
    /// read as empty trees.
    fn tree_at(
        &self,
        locale: &str,
        group: &str,
        namespace: Option<&str>,
        root_override: Option<&Path>,
    ) -> Result<TranslationTree> {
        let path = if group == WILDCARD {
            // the flat per-locale catalog sits directly at the root
            let root = root_override.unwrap_or_else(|| self.resolver.override_root());
            root.join(format!("{}.{}", locale, TREE_EXTENSION))
        } else {
            let group = match namespace {
                Some(namespace) => Group::namespaced(namespace, group),
                None => Group::plain(group),
            };
            self.resolver.resolve_group_path(locale, &group, root_override)
        };
        Ok(self.storage.read_tree(&path)?.unwrap_or_default())
    }
}

impl<S: Storage> TranslationLoader for ChainLoader<S> {
    fn load(&self, locale: &str, group: &str, namespace: Option<&str>) -> Result<TranslationTree> {
        let base = self.tree_at(locale, group, namespace, Some(&self.lang_root))?;
        let overrides = self.tree_at(locale, group, namespace, None)?;
        Ok(merge_trees(&base, &overrides))
    }
}
