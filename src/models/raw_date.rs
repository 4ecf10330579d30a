use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a record's date field as raw text.
///
/// Services do not agree on a date shape: next to strings we see epoch
/// milliseconds and `{"_seconds": ..}` timestamp objects. Those are kept in
/// their JSON form so the record still reaches the aggregator, which rejects
/// it with the raw value.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
