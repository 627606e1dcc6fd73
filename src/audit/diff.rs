//! Diff generation for audit logging
//!
//! Generates human-readable diffs between before and after values
//! for audit log entries.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns a string describing the changes in a user-friendly format.
/// Only includes top-level field changes for readability.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            // Check for modified and removed fields
            for (key, before_val) in before_obj {
                if let Some(after_val) = after_obj.get(key) {
                    if before_val != after_val {
                        changes.push(format!(
                            "{}: {} -> {}",
                            key,
                            format_value(before_val),
                            format_value(after_val)
                        ));
                    }
                } else {
                    changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    ));
                }
            }

            // Check for added fields
            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ => {
            // For non-object values, just show the change
            if before != after {
                Some(format!(
                    "{} -> {}",
                    format_value(before),
                    format_value(after)
                ))
            } else {
                None
            }
        }
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Truncate long strings
            if s.len() > 50 {
                format!("\"{}...\"", &s[..47])
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"amount": 5000, "category": "Food"});
        let after = json!({"amount": 7500, "category": "Food"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("amount: 5000 -> 7500"));
        assert!(!diff.contains("category")); // unchanged field
    }

    #[test]
    fn test_string_field_change() {
        let before = json!({"description": "groceries"});
        let after = json!({"description": "weekly groceries"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("description: \"groceries\" -> \"weekly groceries\""));
    }

    #[test]
    fn test_field_added() {
        let before = json!({"payday": 1});
        let after = json!({"payday": 1, "monthly_budget": 100000});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("monthly_budget: (added) -> 100000"));
    }

    #[test]
    fn test_field_removed() {
        let before = json!({"payday": 1, "old_field": "value"});
        let after = json!({"payday": 1});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old_field: \"value\" -> (removed)"));
    }

    #[test]
    fn test_no_changes() {
        let before = json!({"amount": 5000, "category": "Food"});
        let after = json!({"amount": 5000, "category": "Food"});

        let diff = generate_diff(&before, &after);
        assert!(diff.is_none());
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"a": 1, "b": 2, "c": 3});
        let after = json!({"a": 10, "b": 2, "c": 30});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> 10"));
        assert!(diff.contains("c: 3 -> 30"));
        assert!(!diff.contains("b:")); // unchanged
    }

    #[test]
    fn test_null_handling() {
        let before = json!({"value": null});
        let after = json!({"value": 100});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("value: null -> 100"));
    }

    #[test]
    fn test_long_string_truncation() {
        let long_string = "a".repeat(100);
        let before = json!({"description": long_string});
        let after = json!({"description": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
