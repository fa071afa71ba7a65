//! Owned JSON value tree
//!
//! `JsonValue` is the heap-backed result of `parse` and the type callers
//! construct directly from literals. Each node owns its children; object
//! member order is not part of the contract.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Owned JSON value with exactly one active variant at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsonValue {
    /// JSON `null`
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// Number without fractional part or exponent
    Integer(i64),
    /// Number with fractional part and/or exponent
    Float(f64),
    /// Decoded string
    String(String),
    /// Ordered sequence of values
    Array(Vec<JsonValue>),
    /// String-keyed mapping; iteration order is unspecified
    Object(HashMap<String, JsonValue>),
}

impl JsonValue {
    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Create an integer value
    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// Create a float value
    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an array value
    pub fn array(values: Vec<JsonValue>) -> Self {
        Self::Array(values)
    }

    /// Create an object value
    pub fn object(members: HashMap<String, JsonValue>) -> Self {
        Self::Object(members)
    }

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

    /// Check if value is an integer or a float
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
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
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the element vector if this is an `Array`
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the member map if this is an `Object`
    pub fn as_object(&self) -> Option<&HashMap<String, JsonValue>> {
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
    pub fn try_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch("string", self.type_name()))
    }

    /// Extract the element vector, failing with `TypeMismatch` otherwise
    pub fn try_array(&self) -> Result<&Vec<JsonValue>> {
        self.as_array()
            .ok_or_else(|| Error::type_mismatch("array", self.type_name()))
    }

    /// Extract the member map, failing with `TypeMismatch` otherwise
    pub fn try_object(&self) -> Result<&HashMap<String, JsonValue>> {
        self.as_object()
            .ok_or_else(|| Error::type_mismatch("object", self.type_name()))
    }

    /// Look up an object member by key
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            Self::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Look up an array element by index
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        Self::Array(values)
    }
}

impl From<HashMap<String, JsonValue>> for JsonValue {
    fn from(members: HashMap<String, JsonValue>) -> Self {
        Self::Object(members)
    }
}
