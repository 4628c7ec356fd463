//! Golden-report helpers shared by the CLI tests and `xtask conform`.
//!
//! Lives in its own crate so `xtask` can call it outside of `#[cfg(test)]`.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only when the
///    *root* object looks like a report envelope (`schema`, `tool`, `verdict`, `findings`).
///    Finding `data` payloads that happen to carry a `tool` object are left alone.
///
/// 2. **Recursive**: `started_at` / `finished_at` are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
