//! Field-by-field decoding for persisted records.
//!
//! A saved config may carry values this build cannot read: an enum token
//! it does not know, a string where a number belongs. Loading keeps every
//! field that decodes and drops the rest, so one bad value costs only that
//! value instead of the whole page.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Decode `overrides` laid over `base`, skipping override fields that
/// do not decode. Skipped fields keep their `base` value, or the type's
/// default when `base` has none.
pub fn decode_lenient<T>(base: Map<String, Value>, overrides: Map<String, Value>, what: &str) -> T
where
    T: Default + DeserializeOwned,
{
    let mut accepted = base;
    let mut candidate = accepted.clone();
    candidate.extend(overrides.clone());
    if let Ok(value) = serde_json::from_value(Value::Object(candidate)) {
        return value;
    }

    for (key, value) in overrides {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value);
        match serde_json::from_value::<T>(Value::Object(candidate.clone())) {
            Ok(_) => accepted = candidate,
            Err(err) => warn!(field = %key, error = %err, "dropping unreadable {} field", what),
        }
    }
    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

/// Serialized fields of `value`, empty when it is not a JSON object
pub fn to_fields<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    }
}

/// `deserialize_with` for record lists: each element decodes leniently,
/// non-object elements are dropped.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Err(serde::de::Error::custom("expected a list"));
    };
    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(fields) => Some(decode_lenient(Map::new(), fields, "item")),
            other => {
                warn!(value = %other, "dropping list entry that is not a record");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        name: String,
        count: u8,
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(fields) => fields,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_bad_field_keeps_base_value() {
        let parsed: Sample = decode_lenient(
            fields(json!({ "count": 4 })),
            fields(json!({ "name": "kept", "count": "four" })),
            "test",
        );
        assert_eq!(
            parsed,
            Sample {
                name: "kept".to_string(),
                count: 4
            }
        );
    }

    #[test]
    fn test_bad_field_without_base_uses_default() {
        let parsed: Sample = decode_lenient(Map::new(), fields(json!({ "count": -1 })), "test");
        assert_eq!(parsed, Sample::default());
    }
}
