//! Arena-backed JSON value tree
//!
//! `ArenaValue` mirrors [`JsonValue`](super::JsonValue) but borrows every
//! string and container from an [`Arena`](crate::memory::Arena). The whole
//! tree is `Copy`; its lifetime is the borrow of the arena that backs it, so
//! the borrow checker rejects any use after `Arena::clear`.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::value::JsonValue;

/// Arena-backed JSON value; all payloads borrow from the backing arena
#[derive(Debug, Clone, Copy, Default)]
pub enum ArenaValue<'a> {
    /// JSON `null`
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// Number without fractional part or exponent
    Integer(i64),
    /// Number with fractional part and/or exponent
    Float(f64),
    /// Decoded string resident in the arena
    String(&'a str),
    /// Ordered sequence backed by an arena slice
    Array(&'a [ArenaValue<'a>]),
    /// Key/value members backed by an arena slice; slot order is not a
    /// contract, only the key set and per-key values are
    Object(&'a [(&'a str, ArenaValue<'a>)]),
}

impl<'a> ArenaValue<'a> {
    /// Name of the active variant, used in `TypeMismatch` errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Get the boolean payload if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload if this is an `Integer`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float payload if this is a `Float`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string payload if this is a `String`
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the element slice if this is an `Array`
    pub fn as_array(&self) -> Option<&'a [ArenaValue<'a>]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the member slice if this is an `Object`
    pub fn as_object(&self) -> Option<&'a [(&'a str, ArenaValue<'a>)]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Extract a boolean, failing with `TypeMismatch` otherwise
    pub fn try_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch("bool", self.type_name()))
    }

    /// Extract an integer, failing with `TypeMismatch` otherwise
    pub fn try_i64(&self) -> Result<i64> {
        self.as_i64()
            .ok_or_else(|| Error::type_mismatch("integer", self.type_name()))
    }

    /// Extract a float, failing with `TypeMismatch` otherwise
    pub fn try_f64(&self) -> Result<f64> {
        self.as_f64()
            .ok_or_else(|| Error::type_mismatch("float", self.type_name()))
    }

    /// Extract a string slice, failing with `TypeMismatch` otherwise
    pub fn try_str(&self) -> Result<&'a str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch("string", self.type_name()))
    }

    /// Extract the element slice, failing with `TypeMismatch` otherwise
    pub fn try_array(&self) -> Result<&'a [ArenaValue<'a>]> {
        self.as_array()
            .ok_or_else(|| Error::type_mismatch("array", self.type_name()))
    }

    /// Extract the member slice, failing with `TypeMismatch` otherwise
    pub fn try_object(&self) -> Result<&'a [(&'a str, ArenaValue<'a>)]> {
        self.as_object()
            .ok_or_else(|| Error::type_mismatch("object", self.type_name()))
    }

    /// Look up an object member by key
    pub fn get(&self, key: &str) -> Option<ArenaValue<'a>> {
        match self {
            Self::Object(members) => members
                .iter()
                .find(|(member_key, _)| *member_key == key)
                .map(|(_, value)| *value),
            _ => None,
        }
    }

    /// Look up an array element by index
    pub fn get_index(&self, index: usize) -> Option<ArenaValue<'a>> {
        match self {
            Self::Array(items) => items.get(index).copied(),
            _ => None,
        }
    }

    /// Deep-copy this tree into an owned [`JsonValue`], detaching it from the
    /// arena so it can outlive the next `clear`
    pub fn to_owned_value(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Integer(i) => JsonValue::Integer(*i),
            Self::Float(f) => JsonValue::Float(*f),
            Self::String(s) => JsonValue::String((*s).to_string()),
            Self::Array(items) => {
                JsonValue::Array(items.iter().map(ArenaValue::to_owned_value).collect())
            }
            Self::Object(members) => {
                let map: HashMap<String, JsonValue> = members
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), value.to_owned_value()))
                    .collect();
                JsonValue::Object(map)
            }
        }
    }
}

impl PartialEq for ArenaValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                // Keys are unique within one object, so equal length plus a
                // per-key lookup gives order-insensitive set equality.
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .find(|(other_key, _)| other_key == key)
                            .is_some_and(|(_, other_value)| value == other_value)
                    })
            }
            _ => false,
        }
    }
}
