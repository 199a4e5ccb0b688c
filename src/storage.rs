//! Filesystem capability behind the translation store.
//!
//! All disk access flows through the `Storage` trait so the rest of the
//! crate never reaches for ambient global state; the filesystem stays the
//! single source of truth and callers decide which roots are in play.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use walkdir::WalkDir;

use crate::tree::TranslationTree;

/// A file discovered under a storage root.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Path relative to the listing root.
    pub relative_path: PathBuf,
    /// File name without extension.
    pub basename: String,
    pub extension: Option<String>,
}

/// The filesystem operations the translation store needs.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors.
    ///
    /// Calling this for a directory that already exists is a no-op, not an
    /// error. A real failure (e.g. permission denied) propagates.
    fn make_directory(&self, path: &Path) -> Result<()>;

    /// Recursively list every file under `root`. A missing root yields an
    /// empty listing.
    fn list_files(&self, root: &Path) -> Result<Vec<FileInfo>>;

    /// Direct sub-directories of `root`, sorted. A missing root yields an
    /// empty listing.
    fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Read a translation document. A missing file is `None`; an empty
    /// file is an empty tree.
    fn read_tree(&self, path: &Path) -> Result<Option<TranslationTree>>;

    /// Write a document as pretty-printed JSON with a trailing newline.
    fn write_tree(&self, path: &Path, tree: &TranslationTree) -> Result<()>;
}

/// Production `Storage` over `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn make_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn list_files(&self, root: &Path) -> Result<Vec<FileInfo>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            let basename = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_string);

            files.push(FileInfo {
                path,
                relative_path,
                basename,
                extension,
            });
        }
        Ok(files)
    }

    fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        let entries = fs::read_dir(root)
            .with_context(|| format!("Failed to list directory: {}", root.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list directory: {}", root.display()))?
                .path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn read_tree(&self, path: &Path) -> Result<Option<TranslationTree>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Some(TranslationTree::new()));
        }

        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        match value {
            Value::Object(map) => Ok(Some(map)),
            _ => bail!("Root of translation file must be an object: {}", path.display()),
        }
    }

    fn write_tree(&self, path: &Path, tree: &TranslationTree) -> Result<()> {
        let content = serde_json::to_string_pretty(&Value::Object(tree.clone()))
            .context("Failed to serialize JSON")?;
        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
