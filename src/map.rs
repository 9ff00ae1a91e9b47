//! Map and set types for EDN values.
//!
//! [`ValueMap`] and [`ValueSet`] wrap [`IndexMap`] and [`IndexSet`]. Storage keeps
//! insertion order, which is convenient when building and inspecting values, but
//! the renderer never relies on it: maps and sets are always printed in canonical
//! order (see [`crate::order`]), so two equal collections render identically no
//! matter how they were built.
//!
//! ## Examples
//!
//! ```rust
//! use serde_edn_pretty::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.insert(Value::keyword("b"), Value::from(2));
//! map.insert(Value::keyword("a"), Value::from(1));
//!
//! let keys: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.clone()).collect();
//! assert_eq!(keys, vec![Value::keyword("a"), Value::keyword("b")]);
//! ```

use crate::order::rank;
use crate::Value;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// A map from values to values with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueMap(IndexMap<Value, Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained an equal key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_edn_pretty::{Value, ValueMap};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert(Value::keyword("k"), Value::from(42)).is_none());
    /// assert!(map.insert(Value::keyword("k"), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns the entries sorted by key in canonical order.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&Value, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| rank(a, b));
        entries
    }
}

impl From<HashMap<Value, Value>> for ValueMap {
    fn from(map: HashMap<Value, Value>) -> Self {
        ValueMap(map.into_iter().collect())
    }
}

impl IntoIterator for ValueMap {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}

/// A set of unique values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueSet(IndexSet<Value>);

impl ValueSet {
    #[must_use]
    pub fn new() -> Self {
        ValueSet(IndexSet::new())
    }

    /// Adds a value, returning `false` if an equal value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        self.0.insert(value)
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements, in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns the elements in canonical order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Value> {
        let mut elements: Vec<_> = self.0.iter().collect();
        elements.sort_by(|a, b| rank(a, b));
        elements
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = indexmap::set::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ValueSet(IndexSet::from_iter(iter))
    }
}
