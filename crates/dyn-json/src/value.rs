//! The [`Value`] tagged union and its structural accessors.
//!
//! A `Value` tree exclusively owns its children: no sharing, no
//! back-references, no cycles. Mutation replaces the targeted subtree in
//! place through `&mut self`; readers of a cloned snapshot are unaffected.
//!
//! Two access styles are provided for array reads:
//!
//! - `value[i]` ([`std::ops::Index`]) treats misuse as a programmer bug and
//!   panics on a non-array or an out-of-bounds index, matching slice
//!   indexing semantics.
//! - [`Value::at`] returns `None` instead, for callers that want to recover.
//!
//! Writes ([`Value::set`], [`Value::set_at`]) are silent no-ops when the
//! value is not the matching composite variant.

use std::collections::HashMap;
use std::ops::Index;

/// A dynamically-typed JSON value.
///
/// The six variants form a closed union covering every JSON datum. There is
/// no separate integer type: all numbers are `f64`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A double-precision number. Integers and floats both land here.
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// An ordered sequence. Element order is significant and preserved.
    Array(Vec<Value>),
    /// A string-keyed mapping with unique keys. Iteration order is NOT
    /// guaranteed — the backing store is a plain `HashMap`, never an
    /// ordered map.
    Object(HashMap<String, Value>),
    /// The explicit null value, distinct from an absent key.
    #[default]
    Null,
}

impl Value {
    /// Returns `true` iff this is [`Value::Null`]. `Number(0.0)`,
    /// `Bool(false)` and `String("")` are all non-null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` iff this is a [`Value::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` iff this is a [`Value::String`].
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` iff this is a [`Value::Bool`].
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` iff this is a [`Value::Array`].
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` iff this is a [`Value::Object`].
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The number payload, or `None` for every other variant. No coercion
    /// happens across variants: `String("42")` does not count as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, or `None` for every other variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, or `None` for every other variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The array payload, or `None` for every other variant.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the array payload.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object payload, or `None` for every other variant.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the object payload.
    pub fn as_object_mut(&mut self) -> Option<&mut HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in an object. Returns `None` when this value is not
    /// an object or the key is absent — "missing" is distinct from an
    /// explicit [`Value::Null`] stored under the key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable variant of [`Value::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// Inserts or overwrites `key` in an object. Silently does nothing
    /// when this value is not an object. Removal is a separate operation,
    /// see [`Value::remove`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Value::Object(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    /// Removes `key` from an object, returning the removed child. Returns
    /// `None` when this value is not an object or the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.remove(key),
            _ => None,
        }
    }

    /// Borrows the element at `index` in an array. Returns `None` when
    /// this value is not an array or the index is out of bounds — the
    /// recovering counterpart to `value[index]`.
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Mutable variant of [`Value::at`].
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Replaces the element at `index` in an array. Silently does nothing
    /// when this value is not an array or the index is out of bounds.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) {
        if let Value::Array(items) = self {
            if let Some(slot) = items.get_mut(index) {
                *slot = value.into();
            }
        }
    }

    /// Short variant name used in panic messages.
    fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Null => "null",
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Fail-fast array indexing.
    ///
    /// # Panics
    ///
    /// Panics when this value is not an array, or when `index` is out of
    /// bounds. Use [`Value::at`] for a recoverable lookup.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => match items.get(index) {
                Some(child) => child,
                None => panic!(
                    "index {index} out of bounds for array of length {}",
                    items.len()
                ),
            },
            other => panic!("cannot index into a {} with {index}", other.kind()),
        }
    }
}
