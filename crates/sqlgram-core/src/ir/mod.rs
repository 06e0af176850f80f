//! Intermediate representation of a parsed statement.
//!
//! A [`ParseResult`] is an ordered mapping from clause names to [`Value`]s
//! with a mandatory `command` key. It serializes to plain JSON objects,
//! arrays, strings and booleans. Numbers are kept as their canonical decimal
//! text.

mod lower;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A node of the intermediate representation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Names, keywords and literal text.
    Text(String),
    /// Flags such as `unique` or `if_not_exists`.
    Bool(bool),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Nested mapping.
    Map(Fields),
}

impl Value {
    /// Returns the text, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the flag, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the items, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the fields, if this is a [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&Fields> {
        match self {
            Self::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up `key` when this is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|fields| fields.get(key))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Self::Map(fields)
    }
}

/// Insertion-ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, Value)>);

impl Fields {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Sets `key` and returns the mapping.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` when `value` is present.
    #[must_use]
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Sets `key` to `true` when `flag` is set; absent otherwise.
    #[must_use]
    pub fn with_flag(self, key: impl Into<String>, flag: bool) -> Self {
        self.with_opt(key, flag.then_some(true))
    }

    /// Sets `key` to the list when it is not empty.
    #[must_use]
    pub fn with_list(self, key: impl Into<String>, items: Vec<Value>) -> Self {
        self.with_opt(key, (!items.is_empty()).then_some(items))
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The result of parsing one statement.
///
/// Always carries a `command` key naming the statement kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ParseResult {
    fields: Fields,
}

impl ParseResult {
    /// Returns the `command` value, e.g. `drop_table`.
    #[must_use]
    pub fn command(&self) -> &str {
        self.fields
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the underlying mapping.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the result, returning the underlying mapping.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Renders the mapping as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which cannot occur for string keys.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Renders the mapping as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which cannot occur for string keys.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let fields = Fields::new()
            .with("command", "drop_table")
            .with("target", vec![Value::from("dishes")])
            .with("drop_behavior", "cascade");
        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["command", "target", "drop_behavior"]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut fields = Fields::new().with("a", "1").with("b", "2");
        fields.insert("a", "3");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&Value::from("3")));
        assert_eq!(fields.keys().next(), Some("a"));
    }

    #[test]
    fn test_optional_setters_omit_absent_values() {
        let fields = Fields::new()
            .with_opt::<&str>("alias", None)
            .with_flag("unique", false)
            .with_list("columns", vec![])
            .with_flag("if_not_exists", true);
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["if_not_exists"]);
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let result = ParseResult {
            fields: Fields::new()
                .with("command", "drop_index")
                .with("target", vec![Value::from("i")])
                .with("flag", true),
        };
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"command":"drop_index","target":["i"],"flag":true}"#
        );
        assert_eq!(result.command(), "drop_index");
    }
}
