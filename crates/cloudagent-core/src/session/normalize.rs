//! Response-shape normalization for successful gateway results.

use cloudagent_types::command::CommandResult;
use serde_json::Value;

/// Classify a raw backend result for display.
///
/// - object with a string `response` field: that string, verbatim
/// - any other object or array: structured, shown pretty-printed
/// - string: the string itself
/// - number, bool, null: their JSON text (`42`, `true`, `null`)
pub fn normalize_result(raw: Value) -> CommandResult {
    if let Some(text) = raw.get("response").and_then(Value::as_str) {
        return CommandResult::Text(text.to_string());
    }

    match raw {
        value @ (Value::Object(_) | Value::Array(_)) => CommandResult::Structured(value),
        Value::String(text) => CommandResult::Text(text),
        other => CommandResult::Text(other.to_string()),
    }
}
