//! Values that have a Vim script literal form.
//!
//! The set is closed: numbers, strings, lists and dictionaries. Anything
//! else is rejected when it crosses into [`Value`] (see [`Value::from_serialize`]
//! and the `TryFrom<serde_json::Value>` impl).

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

/// A value with a Vim script literal representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Dict(Dict),
}

impl Value {
    /// Convert any serializable value.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedType`] if the value (or anything nested in it)
    /// is a boolean, null/unit or `None`, and [`Error::Json`] if serde cannot
    /// produce a value at all (e.g. map keys that are not strings).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value)?;
        Self::try_from(json)
    }

    /// Name of the variant, used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match json {
            Json::Null => Err(Error::UnsupportedType { type_name: "null" }),
            Json::Bool(_) => Err(Error::UnsupportedType { type_name: "bool" }),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else {
                    // u64 above i64::MAX falls through to a float
                    n.as_f64()
                        .map(Self::Float)
                        .ok_or(Error::UnsupportedType { type_name: "number" })
                }
            }
            Json::String(s) => Ok(Self::Str(s)),
            Json::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Json::Object(map) => {
                let mut dict = Dict::with_capacity(map.len());
                for (key, value) in map {
                    dict.insert(key, Self::try_from(value)?);
                }
                Ok(Self::Dict(dict))
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Self::Dict(dict)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// A dictionary key.
///
/// Vim only accepts Numbers and Strings as keys (Numbers are converted to
/// Strings), so the key set is narrower than [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl From<i64> for Key {
    fn from(k: i64) -> Self {
        Self::Int(k)
    }
}

impl From<i32> for Key {
    fn from(k: i32) -> Self {
        Self::Int(i64::from(k))
    }
}

impl From<u32> for Key {
    fn from(k: u32) -> Self {
        Self::Int(i64::from(k))
    }
}

impl From<&str> for Key {
    fn from(k: &str) -> Self {
        Self::Str(k.to_owned())
    }
}

impl From<String> for Key {
    fn from(k: String) -> Self {
        Self::Str(k)
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(Self::Int(i)),
            Value::Str(s) => Ok(Self::Str(s)),
            other => Err(Error::UnsupportedType {
                type_name: other.type_name(),
            }),
        }
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(i) => Self::Int(i),
            Key::Str(s) => Self::Str(s),
        }
    }
}

/// Insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: IndexMap<Key, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}
