//! On-disk location of translation group files.
//!
//! Plain groups live at `<root>/<locale>/<group>.json`; vendor groups at
//! `<root>/vendor/<namespace>/<locale>/<group>.json`. The root defaults to
//! the override storage root and can be redirected per call, which is how
//! promoted edits land in the canonical language root instead.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::group::Group;
use crate::storage::Storage;

/// File extension of translation documents.
pub const TREE_EXTENSION: &str = "json";

/// Directory holding vendor-namespaced translations.
pub const VENDOR_DIRECTORY: &str = "vendor";

#[derive(Debug, Clone)]
pub struct PathResolver {
    override_root: PathBuf,
}

impl PathResolver {
    pub fn new(override_root: impl Into<PathBuf>) -> Self {
        Self {
            override_root: override_root.into(),
        }
    }

    pub fn override_root(&self) -> &Path {
        &self.override_root
    }

    /// Path of the file holding (locale, group).
    ///
    /// `root_override` redirects resolution to another storage root.
    pub fn resolve_group_path(
        &self,
        locale: &str,
        group: &Group,
        root_override: Option<&Path>,
    ) -> PathBuf {
        let root = root_override.unwrap_or(&self.override_root);
        let file_name = format!("{}.{}", group.name, TREE_EXTENSION);
        match &group.namespace {
            Some(namespace) => root
                .join(VENDOR_DIRECTORY)
                .join(namespace)
                .join(locale)
                .join(file_name),
            None => root.join(locale).join(file_name),
        }
    }

    /// Create every missing ancestor of the group file. Repeat calls are a
    /// no-op; a creation failure propagates as a fatal error.
    pub fn ensure_group_directory<S: Storage>(
        &self,
        storage: &S,
        locale: &str,
        group: &Group,
        root_override: Option<&Path>,
    ) -> Result<()> {
        let path = self.resolve_group_path(locale, group, root_override);
        if let Some(parent) = path.parent()
            && !storage.exists(parent)
        {
            storage.make_directory(parent)?;
        }
        Ok(())
    }

    /// Create the bare per-locale directory under the override root.
    pub fn ensure_locale_directory<S: Storage>(&self, storage: &S, locale: &str) -> Result<()> {
        let dir = self.override_root.join(locale);
        if !storage.exists(&dir) {
            storage.make_directory(&dir)?;
        }
        Ok(())
    }
}
