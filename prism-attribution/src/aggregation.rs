//! Cost aggregation: group breakdown rows by slice identity, sum raw costs,
//! normalize into contribution weights.

use std::collections::BTreeMap;

use prism_core::models::CostEntry;

/// Separator between dimension name and value in a slice identity key.
pub const KEY_SEPARATOR: char = '=';

/// Slice identity key for one dimension-value pair, `name=value`.
pub fn slice_key(name: &str, value: &str) -> String {
    format!("{name}{KEY_SEPARATOR}{value}")
}

/// Normalize raw breakdown costs into contribution weights per identity.
///
/// Entries sharing an identity are summed before normalization; overlapping
/// dimension explorations are additive, never overwritten. A zero cost
/// total yields all-zero weights rather than an error. Iteration order of
/// the returned map is sorted by identity and determines scoring output
/// order downstream.
pub fn normalized_weights(entries: &[CostEntry]) -> BTreeMap<String, f64> {
    let mut weights: BTreeMap<String, f64> = BTreeMap::new();
    for entry in entries {
        let key = slice_key(&entry.dimension_name, &entry.dimension_value);
        *weights.entry(key).or_insert(0.0) += entry.cost;
    }

    let total: f64 = weights.values().sum();
    if total == 0.0 {
        for weight in weights.values_mut() {
            *weight = 0.0;
        }
        return weights;
    }

    for weight in weights.values_mut() {
        *weight /= total;
    }
    weights
}
