use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Parameters parsed from one query string
///
/// Keys are unique and the first value seen for a key is the one kept. A
/// value of `None` marks a bare key (`foo`), `Some("")` an empty one (`foo=`).
/// Iteration and serialization follow the order in which keys first appeared.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, Option<String>>,
    order: Vec<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` unless it is already present
    ///
    /// Returns `true` when the entry was added, `false` when an earlier
    /// occurrence of the key was kept instead.
    pub fn insert_first(&mut self, key: String, value: Option<String>) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.order.push(key.clone());
        self.values.insert(key, value);
        true
    }

    /// Look up a key. The outer `Option` is presence, the inner one the value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.values.get(key).map(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.order.iter().filter_map(move |k| {
            self.values
                .get_key_value(k.as_str())
                .map(|(k, v)| (k.as_str(), v.as_deref()))
        })
    }

    pub fn into_map(self) -> HashMap<String, Option<String>> {
        self.values
    }

    /// JSON object form, with bare keys mapped to `null`
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| {
                    let value = v.map_or(Value::Null, |s| Value::String(s.to_string()));
                    (k.to_string(), value)
                })
                .collect(),
        )
    }
}

impl PartialEq for QueryParams {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for QueryParams {}

impl PartialEq<HashMap<String, Option<String>>> for QueryParams {
    fn eq(&self, other: &HashMap<String, Option<String>>) -> bool {
        &self.values == other
    }
}

impl FromIterator<(String, Option<String>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert_first(key, value);
        }
        params
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}
