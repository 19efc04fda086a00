//! Record fixtures for creating in-memory JSON documents.

use serde_json::{json, Map, Value};

/// Returns the two widget records used across seeding tests.
///
/// # Returns
/// - `Vec<Value>` - `[{"a":1},{"a":2}]`
pub fn widgets() -> Vec<Value> {
    vec![json!({ "a": 1 }), json!({ "a": 2 })]
}

/// Converts a JSON object value into its ordered map.
///
/// # Panics
/// Panics when `value` is not a JSON object; fixtures are always objects.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture record is not an object: {other}"),
    }
}

/// Converts a list of JSON object values into ordered maps.
pub fn objects(values: Vec<Value>) -> Vec<Map<String, Value>> {
    values.into_iter().map(object).collect()
}
