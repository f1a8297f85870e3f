//! Validated configuration tree
//!
//! An ordered mapping from field keys to values. Trees are produced once by
//! the validator and treated as read-only afterwards.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Bool(bool),
    Str(String),
    /// Duration in milliseconds
    Duration(u32),
    /// Reference to a declared object
    Id(Id),
    List(Vec<Value>),
    Tree(ConfigTree),
}

impl Value {
    /// Build a list of string values from labels
    pub fn str_list(labels: &[&str]) -> Self {
        Value::List(labels.iter().map(|l| Value::Str(String::from(*l))).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&ConfigTree> {
        match self {
            Value::Tree(t) => Some(t),
            _ => None,
        }
    }
}

/// Ordered key/value configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigTree {
    entries: Vec<(String, Value)>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: &str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((String::from(key), value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Key presence, independent of the value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Value of a key the validator always fills in
    ///
    /// Required, defaulted and generated fields are never absent from a
    /// validated tree. Debug builds panic when one is missing.
    pub fn validated(&self, key: &str) -> Option<&Value> {
        let value = self.get(key);
        debug_assert!(value.is_some(), "validated key `{}` is missing", key);
        value
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_tree(&self, key: &str) -> Option<&ConfigTree> {
        self.get(key).and_then(Value::as_tree)
    }

    pub fn get_id(&self, key: &str) -> Option<&Id> {
        match self.get(key)? {
            Value::Id(id) => Some(id),
            _ => None,
        }
    }

    pub fn get_duration_ms(&self, key: &str) -> Option<u32> {
        match self.get(key)? {
            Value::Duration(ms) => Some(*ms),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Value)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value)>>(iter: I) -> Self {
        let mut tree = ConfigTree::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let tree = ConfigTree::new()
            .with("b", Value::Bool(true))
            .with("a", Value::Duration(3))
            .with("b", Value::Bool(false));

        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(tree.get_bool("b"), Some(false));
    }

    #[test]
    fn test_presence_is_not_truthiness() {
        let tree = ConfigTree::new()
            .with("empty", Value::Tree(ConfigTree::new()))
            .with("off", Value::Bool(false));

        assert!(tree.contains_key("empty"));
        assert!(tree.contains_key("off"));
        assert!(!tree.contains_key("missing"));
    }

    #[test]
    fn test_typed_getters() {
        let tree = ConfigTree::new()
            .with("name", Value::Str(String::from("AC")))
            .with("update_interval", Value::Duration(60_000));

        assert_eq!(tree.get_str("name"), Some("AC"));
        assert_eq!(tree.get_duration_ms("update_interval"), Some(60_000));
        assert_eq!(tree.get_bool("name"), None);
    }

    #[test]
    fn test_remove() {
        let mut tree = ConfigTree::new()
            .with("a", Value::Bool(true))
            .with("b", Value::Bool(false));
        assert_eq!(tree.remove("a"), Some(Value::Bool(true)));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.remove("a"), None);
    }

    #[test]
    fn test_validated_returns_present_values() {
        let tree = ConfigTree::new().with("flag", Value::Bool(false));
        assert_eq!(tree.validated("flag"), Some(&Value::Bool(false)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "validated key `flag` is missing")]
    fn test_validated_panics_on_missing_key() {
        ConfigTree::new().validated("flag");
    }
}
