//! Nested translation tree representation and transforms.
//!
//! A tree is a JSON object: a node is a branch when it is an object and a
//! leaf otherwise. `codec` converts between nested trees and dotted flat
//! maps, `merge` layers one tree over another.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub mod codec;
pub mod merge;

/// A nested translation document. Branches are objects, leaves are any
/// other JSON value.
pub type TranslationTree = Map<String, Value>;

/// Flattened translations keyed by dotted path.
///
/// A `BTreeMap` keeps iteration in sorted key order, which makes every
/// pass over the entries deterministic.
pub type FlatTranslations = BTreeMap<String, Value>;

/// Sort a tree's keys ascending, recursively.
///
/// This is the single normalization point for key order, applied right
/// before a tree is serialized to disk.
pub fn sort_tree(tree: &TranslationTree) -> TranslationTree {
    let mut entries: Vec<(&String, &Value)> = tree.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut sorted = TranslationTree::new();
    for (key, value) in entries {
        let value = match value {
            Value::Object(child) => Value::Object(sort_tree(child)),
            other => other.clone(),
        };
        sorted.insert(key.clone(), value);
    }
    sorted
}
