//! Converting nested translation trees to dotted flat maps and back.
//!
//! Flattening walks the tree depth-first and joins the segment names of
//! each leaf with `.`. Unflattening is the inverse, given that no segment
//! name contains a literal dot (dots are never escaped).

use serde_json::Value;

use super::{FlatTranslations, TranslationTree};

/// A structural problem found while rebuilding a tree from dotted keys.
///
/// Produced when two keys disagree about whether a segment is a leaf or a
/// branch (e.g. both `a` and `a.b` present). The later-processed entry
/// wins; the earlier structure at that node is discarded.
#[derive(Debug, Clone)]
pub struct StructureWarning {
    /// The dotted key whose insertion displaced existing structure.
    pub key: String,
    pub message: String,
}

/// Result of unflattening a dotted map.
#[derive(Debug, Default)]
pub struct UnflattenResult {
    pub tree: TranslationTree,
    pub warnings: Vec<StructureWarning>,
}

/// Flatten a nested tree into dotted-key/value pairs.
///
/// Every leaf in the input produces exactly one entry; branches contribute
/// no entry of their own. An empty tree flattens to an empty map.
pub fn flatten(tree: &TranslationTree) -> FlatTranslations {
    let mut flat = FlatTranslations::new();
    flatten_into(tree, String::new(), &mut flat);
    flat
}

fn flatten_into(tree: &TranslationTree, prefix: String, result: &mut FlatTranslations) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(child) => flatten_into(child, path, result),
            leaf => {
                result.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuild a nested tree from dotted-key/value pairs.
///
/// Entries are processed in sorted key order, so leaf/branch collisions
/// resolve the same way on every run. A collision is reported as a
/// data-quality warning in the result, never as an error.
pub fn unflatten(flat: &FlatTranslations) -> UnflattenResult {
    let mut result = UnflattenResult::default();
    for (key, value) in flat {
        let parts: Vec<&str> = key.split('.').collect();
        insert_nested(&mut result.tree, key, &parts, value.clone(), &mut result.warnings);
    }
    result
}

/// Insert a value at a nested path, creating intermediate objects as needed.
fn insert_nested(
    node: &mut TranslationTree,
    full_key: &str,
    path: &[&str],
    value: Value,
    warnings: &mut Vec<StructureWarning>,
) {
    // split('.') yields at least one segment, so path is never empty
    if path.len() == 1 {
        if matches!(node.get(path[0]), Some(Value::Object(_))) {
            warnings.push(StructureWarning {
                key: full_key.to_string(),
                message: format!("leaf value replaces the nested keys under '{}'", path[0]),
            });
        }
        node.insert(path[0].to_string(), value);
        return;
    }

    let next = node
        .entry(path[0].to_string())
        .or_insert_with(|| Value::Object(TranslationTree::new()));

    // If the existing value is not an object, replace it with an object
    if !next.is_object() {
        warnings.push(StructureWarning {
            key: full_key.to_string(),
            message: format!("'{}' held a leaf value and becomes a branch", path[0]),
        });
        *next = Value::Object(TranslationTree::new());
    }

    let child = next.as_object_mut().unwrap();
    insert_nested(child, full_key, &path[1..], value, warnings);
}
