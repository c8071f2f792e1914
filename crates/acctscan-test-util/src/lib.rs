//! Shared test utilities for the acctscan workspace.
//!
//! A regular crate (not a `#[cfg(test)]` module) so integration tests in other crates can use it.

use serde_json::Value;

/// Keys whose values depend on the scan time.
const TIMESTAMP_KEYS: [&str; 2] = ["scannedAt", "lastScan"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Scan timestamps (`scannedAt`, `lastScan`) are replaced with `"__TIMESTAMP__"` at any depth.
/// Account timestamps (`lastLogin`, `createdAt`, ...) are inputs and stay untouched.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replaces_scan_timestamps_at_any_depth() {
        let input = json!({
            "summary": { "lastScan": "2025-06-01T00:00:00Z", "totalAccounts": 1 },
            "accounts": [
                {
                    "id": "1",
                    "lastLogin": "2025-05-30T10:00:00Z",
                    "scanResults": { "scannedAt": "2025-06-01T00:00:00Z", "issues": [] }
                }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["summary"]["lastScan"], "__TIMESTAMP__");
        assert_eq!(result["summary"]["totalAccounts"], 1);
        assert_eq!(
            result["accounts"][0]["scanResults"]["scannedAt"],
            "__TIMESTAMP__"
        );
        assert_eq!(result["accounts"][0]["lastLogin"], "2025-05-30T10:00:00Z");
    }

    #[test]
    fn leaves_values_without_timestamps_alone() {
        let input = json!([1, "two", { "three": null }]);
        assert_eq!(normalize_nondeterministic(input.clone()), input);
    }
}
