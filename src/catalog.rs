//! Discovery of translation groups under a language root.
//!
//! Layout rules:
//! - `<root>/<locale>/<group>.json` — one file per group and locale.
//! - `<root>/<locale>.json` — the flat per-locale catalog, addressed as
//!   the single sentinel group.
//! - `vendor/<namespace>/...` sub-paths carry the same two layouts for
//!   vendor packages; the flat form counts as one group per vendor.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use crate::group::{Group, SINGLE_GROUP};
use crate::paths::VENDOR_DIRECTORY;
use crate::storage::Storage;

/// Walk every file under `lang_root` and derive the set of distinct
/// groups, deduplicated by identifier and sorted.
///
/// A group contributes one identifier no matter how many locale files
/// exist for it.
pub fn discover_groups<S: Storage>(storage: &S, lang_root: &Path) -> Result<Vec<Group>> {
    let mut identifiers = BTreeSet::new();

    for file in storage.list_files(lang_root)? {
        let components: Vec<String> = file
            .relative_path
            .components()
            .map(|part| part.as_os_str().to_string_lossy().into_owned())
            .collect();

        let (namespace, below_root) = match components.split_first() {
            Some((first, rest)) if first.as_str() == VENDOR_DIRECTORY => {
                match rest.split_first() {
                    // vendor files live under vendor/<namespace>/...
                    Some((namespace, rest)) if !rest.is_empty() => {
                        (Some(namespace.as_str()), rest)
                    }
                    // a file directly under vendor/ has no namespace to derive
                    _ => continue,
                }
            }
            Some(_) => (None, components.as_slice()),
            None => continue,
        };

        let identifier = if below_root.len() == 1 {
            // filename = locale: the flat locale-keyed catalog
            match namespace {
                Some(namespace) => namespace.to_string(),
                None => SINGLE_GROUP.to_string(),
            }
        } else {
            // a group definition file inside a locale directory; the
            // locale segment never becomes part of the identifier
            match namespace {
                Some(namespace) => format!("{}/{}", namespace, file.basename),
                None => file.basename.clone(),
            }
        };
        identifiers.insert(identifier);
    }

    Ok(identifiers
        .iter()
        .map(|identifier| Group::parse(identifier))
        .collect())
}
