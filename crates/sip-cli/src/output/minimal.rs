use serde_json::Value;

use super::display_value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Unwrap the "result" envelope, then the summary inside a projection
    let mut target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);
    if let Some(summary) = target.get("summary") {
        target = summary;
    }

    // Priority list of key output fields
    let priority_keys = ["total_value", "estimated_returns", "total_invested"];

    if let Value::Object(map) = target {
        // Try priority keys first (skip null values)
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", display_value(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", display_value(target));
}
