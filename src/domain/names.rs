//! Name normalization for batch resolution requests

use serde_json::Value;

/// Turns the raw `names` payload field into a deduplicated,
/// order-preserving list of query strings.
///
/// The field is untrusted and may be any JSON value; anything that is not
/// an array yields an empty list rather than an error. Within an array,
/// only string elements survive: they are trimmed, empties dropped, and
/// duplicates removed by exact string equality with the first occurrence
/// winning. The result is deterministic and normalizing an already
/// normalized list is a no-op.
pub fn normalize_names(names: &Value) -> Vec<String> {
    let Some(items) = names.as_array() else {
        return Vec::new();
    };

    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let Some(raw) = item.as_str() else { continue };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing| existing == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}
