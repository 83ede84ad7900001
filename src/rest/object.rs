//! Schema-less API objects.
//!
//! [`ApiObject`] wraps whatever JSON document the API returned. Values are
//! reached with dotted paths (`"meta.name"`, `"items.0.title"`) and the
//! document can be re-serialized as compact or pretty JSON with sorted keys.
//!
//! # Example
//!
//! ```rust
//! use kapi::rest::ApiObject;
//! use serde_json::json;
//!
//! let object = ApiObject::from(json!({
//!     "meta": {"personality": "me", "name": "cv"},
//!     "resume": {"title": "Engineer"}
//! }));
//!
//! assert_eq!(object.get_str("meta.name"), Some("cv"));
//! assert_eq!(object.json(), r#"{"meta":{"name":"cv","personality":"me"},"resume":{"title":"Engineer"}}"#);
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dynamically-keyed JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiObject(Value);

impl ApiObject {
    /// Parses an object from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `json` is not valid JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self)
    }

    /// Returns the value at a dotted path.
    ///
    /// Each component indexes an object by key, or an array by position.
    /// An empty path returns the whole document.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.0);
        }
        path.split('.').try_fold(&self.0, |value, key| match value {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Returns the string at a dotted path.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Returns the sub-document at a dotted path, unless it is missing or null.
    #[must_use]
    pub fn get_object(&self, path: &str) -> Option<Self> {
        self.get(path)
            .filter(|value| !value.is_null())
            .cloned()
            .map(Self)
    }

    /// Returns `true` if the dotted path resolves to a value.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the object and returns the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns the document as a plain map, if it is a JSON object.
    #[must_use]
    pub fn to_map(&self) -> Option<Map<String, Value>> {
        self.0.as_object().cloned()
    }

    /// Serializes to compact JSON with sorted keys.
    #[must_use]
    pub fn json(&self) -> String {
        serde_json::to_string(&sorted(&self.0)).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serializes to JSON with sorted keys and a four-space indent.
    #[must_use]
    pub fn json_pretty(&self) -> String {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        if sorted(&self.0).serialize(&mut serializer).is_err() {
            return "{}".to_string();
        }
        String::from_utf8(buf).unwrap_or_else(|_| "{}".to_string())
    }

    /// Returns the Rust debug rendering of the document.
    #[must_use]
    pub fn debug(&self) -> String {
        format!("{:#?}", self.0)
    }

    /// Returns the pretty JSON rendering of the document.
    #[must_use]
    pub fn debug_json(&self) -> String {
        self.json_pretty()
    }
}

/// Rebuilds `value` with every object's keys in sorted order.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, sorted(v))).collect();
            Value::Object(ordered.into_iter().map(|(k, v)| (k.clone(), v)).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

impl From<Value> for ApiObject {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Map<String, Value>> for ApiObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}

impl From<ApiObject> for Value {
    fn from(object: ApiObject) -> Self {
        object.0
    }
}

impl Index<&str> for ApiObject {
    type Output = Value;

    /// Indexes a top-level key, yielding `Value::Null` when absent.
    fn index(&self, key: &str) -> &Value {
        &self.0[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ApiObject {
        ApiObject::from(json!({
            "meta": {"personality": "me", "name": "cv"},
            "resume": {"jobs": [{"title": "Engineer"}, {"title": "Lead"}]},
            "avail": null
        }))
    }

    #[test]
    fn test_dotted_lookup() {
        let object = sample();
        assert_eq!(object.get_str("meta.personality"), Some("me"));
        assert_eq!(object.get_str("resume.jobs.1.title"), Some("Lead"));
        assert!(object.get("meta.missing").is_none());
        assert!(object.get("resume.jobs.9").is_none());
        assert!(object.get("meta.name.deeper").is_none());
    }

    #[test]
    fn test_empty_path_returns_document() {
        let object = sample();
        assert_eq!(object.get(""), Some(object.as_value()));
    }

    #[test]
    fn test_get_object_skips_null() {
        let object = sample();
        assert!(object.get_object("avail").is_none());
        assert!(object.contains("avail"));
        let resume = object.get_object("resume").unwrap();
        assert_eq!(resume.get_str("jobs.0.title"), Some("Engineer"));
    }

    #[test]
    fn test_index_top_level_key() {
        let object = sample();
        assert_eq!(object["meta"]["name"], "cv");
        assert!(object["nothing"].is_null());
    }

    #[test]
    fn test_json_sorts_keys() {
        let object = ApiObject::from(json!({"b": 1, "a": {"d": 2, "c": 3}}));
        assert_eq!(object.json(), r#"{"a":{"c":3,"d":2},"b":1}"#);
    }

    #[test]
    fn test_json_pretty_uses_four_space_indent() {
        let object = ApiObject::from(json!({"b": 1, "a": 2}));
        assert_eq!(object.json_pretty(), "{\n    \"a\": 2,\n    \"b\": 1\n}");
        assert_eq!(object.debug_json(), object.json_pretty());
    }

    #[test]
    fn test_compact_json_roundtrip() {
        let object = sample();
        let reparsed = ApiObject::from_json_str(&object.json()).unwrap();
        assert_eq!(reparsed, object);
    }

    #[test]
    fn test_to_map_only_for_objects() {
        assert_eq!(sample().to_map().unwrap().len(), 3);
        assert!(ApiObject::from(json!([1, 2])).to_map().is_none());
    }

    #[test]
    fn test_scalar_documents_are_accepted() {
        let object = ApiObject::from_json_str("42").unwrap();
        assert_eq!(object.json(), "42");
        assert!(object.get("anything").is_none());
    }

    #[test]
    fn test_debug_rendering_mentions_values() {
        let debug = sample().debug();
        assert!(debug.contains("personality"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let object = ApiObject::from(json!({"x": [1, 2]}));
        assert_eq!(serde_json::to_value(&object).unwrap(), json!({"x": [1, 2]}));
    }
}
