use serde_json::{Map, Value};

/// Merges configuration layers by flat key replacement.
pub struct LayerMerger;

impl LayerMerger {
    /// Merge `layers` in ascending precedence.
    ///
    /// A key from a later layer replaces the earlier value entirely;
    /// nested objects are not merged.
    pub fn merge(layers: &[&Map<String, Value>]) -> Map<String, Value> {
        let mut merged = Map::new();
        for layer in layers {
            for (key, value) in layer.iter() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}
