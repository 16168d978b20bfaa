//! Merge policies for layering option values

use serde_json::Value;
use tmpl_meta::Values;

/// How a higher-precedence layer combines with the layers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Each key present in the higher layer replaces the lower value wholly.
    #[default]
    Replace,
    /// Objects are merged recursively; arrays and scalars are replaced.
    Deep,
}

impl MergePolicy {
    /// Apply `layer` on top of `target`.
    pub fn apply(self, target: &mut Values, layer: &Values) {
        for (key, value) in layer {
            if self == MergePolicy::Deep {
                if let Some(base) = target.get_mut(key) {
                    deep_merge_value(base, value);
                    continue;
                }
            }
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Deep merge two JSON values
///
/// If both values are objects, merge them recursively with `other` taking precedence.
/// Otherwise, `other` replaces `base`.
fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
