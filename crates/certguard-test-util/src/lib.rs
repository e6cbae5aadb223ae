//! Shared test utilities for the certguard workspace.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["generated_at", "finished_at"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object is a report
/// envelope (has `schema`, `tool`, `summary` and `decisions`). Timestamp keys are replaced with
/// `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "summary", "decisions"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps(&mut value);
    value
}

fn normalize_timestamps(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            map.values_mut().for_each(normalize_timestamps);
        }
        Value::Array(arr) => arr.iter_mut().for_each(normalize_timestamps),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope() {
        let v = json!({
            "schema": "certguard.report.v1",
            "tool": {"name": "certguard", "version": "1.2.3"},
            "generated_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "summary": {"total": 0},
            "decisions": []
        });
        let n = normalize_nondeterministic(v);
        assert_eq!(n["tool"]["version"], "__VERSION__");
        assert_eq!(n["tool"]["name"], "certguard");
        assert_eq!(n["generated_at"], "__TIMESTAMP__");
        assert_eq!(n["finished_at"], "__TIMESTAMP__");
    }

    #[test]
    fn leaves_version_of_non_envelope() {
        let v = json!({"tool": {"version": "1.2.3"}, "decisions": []});
        let n = normalize_nondeterministic(v);
        assert_eq!(n["tool"]["version"], "1.2.3");
    }

    #[test]
    fn normalizes_nested_timestamps() {
        let v = json!([{"inner": {"generated_at": "x"}}]);
        let n = normalize_nondeterministic(v);
        assert_eq!(n[0]["inner"]["generated_at"], "__TIMESTAMP__");
    }
}
