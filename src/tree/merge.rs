//! Layering one translation tree over another.

use serde_json::Value;

use super::TranslationTree;

/// Deep-merge `overlay` into `base`, producing a new tree.
///
/// When both sides hold a branch at a key the merge recurses; when only
/// one side has the key that side's value is taken; in every other case
/// the overlay's value replaces the base's outright (a scalar is never
/// partially merged with a branch). Keys absent from the overlay are
/// preserved unchanged, so an edit to one key can never discard its
/// untouched siblings.
pub fn merge_trees(base: &TranslationTree, overlay: &TranslationTree) -> TranslationTree {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        let value = match (merged.get(key), overlay_value) {
            (Some(Value::Object(base_child)), Value::Object(overlay_child)) => {
                Value::Object(merge_trees(base_child, overlay_child))
            }
            (_, other) => other.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
