use serde_json::Value;

/// Pretty-print a projection result as JSON to stdout. The default format,
/// and the one that keeps the exact decimal values.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
