use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert arbitrary JSON values into sanitized strings.
///
/// The console backend is inconsistent about ids: some endpoints send numbers,
/// others strings. Both end up as the same string here.
pub fn value_to_string(value: Value) -> String {
    let raw = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    sanitize(raw)
}

fn sanitize(s: String) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Deserialize an optional field that may arrive as a string or a number.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| !v.is_null())
        .map(value_to_string))
}
