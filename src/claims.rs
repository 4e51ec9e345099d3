//! Helpers over the JSON claim object.
//!
//! Claims live in a `serde_json::Map`, which keeps keys sorted; the
//! compact dump of that map is therefore deterministic, which the
//! encoder relies on.

use crate::error::{Error, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// String view of a claim.
///
/// String values are borrowed. Any other present value is rendered as
/// its compact JSON text, so a numeric claim reads back as `"42"`.
/// Absent keys are `None`.
pub(crate) fn get_string<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<Cow<'a, str>> {
    match obj.get(key)? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => serde_json::to_string(other).ok().map(Cow::Owned),
    }
}

/// Integer view of a claim. Absent or non-integer values are `None`.
pub(crate) fn get_int(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}

/// Parse a JSON object, last-wins on duplicate keys. Non-object roots
/// are rejected.
pub(crate) fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>> {
    serde_json::from_slice(bytes).map_err(|_| Error::Invalid)
}

struct ObjectRejectingDuplicates;

impl<'de> Visitor<'de> for ObjectRejectingDuplicates {
    type Value = Map<String, Value>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object without duplicate keys")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut obj = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if obj.contains_key(&key) {
                return Err(de::Error::custom("duplicate key"));
            }
            obj.insert(key, value);
        }
        Ok(obj)
    }
}

/// Strict parse for bulk claim import: the root must be an object and
/// top-level keys must be unique.
pub(crate) fn parse_object_strict(json: &str) -> Result<Map<String, Value>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let obj = de
        .deserialize_map(ObjectRejectingDuplicates)
        .map_err(|_| Error::Invalid)?;
    de.end().map_err(|_| Error::Invalid)?;
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn string_values_are_borrowed() {
        let claims = obj(json!({"iss": "example.com"}));
        assert!(matches!(
            get_string(&claims, "iss"),
            Some(Cow::Borrowed("example.com"))
        ));
    }

    #[test]
    fn non_string_values_are_stringified() {
        let claims = obj(json!({"iat": 1475980545, "admin": true}));
        assert_eq!(get_string(&claims, "iat").unwrap(), "1475980545");
        assert_eq!(get_string(&claims, "admin").unwrap(), "true");
        assert_eq!(get_string(&claims, "missing"), None);
    }

    #[test]
    fn integer_getter_requires_integers() {
        let claims = obj(json!({"iat": 1475980545, "iss": "x", "pi": 3.5}));
        assert_eq!(get_int(&claims, "iat"), Some(1475980545));
        assert_eq!(get_int(&claims, "iss"), None);
        assert_eq!(get_int(&claims, "pi"), None);
        assert_eq!(get_int(&claims, "missing"), None);
    }

    #[test]
    fn strict_parse_rejects_duplicates() {
        assert!(parse_object_strict(r#"{"a":1,"b":2}"#).is_ok());
        assert_eq!(
            parse_object_strict(r#"{"a":1,"a":2}"#),
            Err(Error::Invalid)
        );
    }

    #[test]
    fn strict_parse_rejects_non_objects() {
        assert_eq!(parse_object_strict("[1,2]"), Err(Error::Invalid));
        assert_eq!(parse_object_strict("\"x\""), Err(Error::Invalid));
        assert_eq!(parse_object_strict("{\"a\":1} trailing"), Err(Error::Invalid));
    }

    #[test]
    fn lenient_parse_takes_last_duplicate() {
        let parsed = parse_object(br#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(parsed.get("a"), Some(&json!(2)));
        assert_eq!(parse_object(b"[]"), Err(Error::Invalid));
    }
}
