//! Value construction seam between the grammar driver and the two value
//! representations
//!
//! The grammar is written once; a `ValueBuilder` decides where the finished
//! nodes live. `OwnedBuilder` produces heap-backed [`JsonValue`] trees,
//! `ArenaBuilder` copies strings and container slices into an [`Arena`].
//! Duplicate object keys resolve last-write-wins in both.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::Result;
use crate::memory::Arena;
use crate::value::{ArenaValue, JsonValue};

/// Scratch buffer for array elements while a production is in flight
pub(crate) type Elements<V> = SmallVec<[V; 8]>;
/// Scratch buffer for object members while a production is in flight
pub(crate) type Members<S, V> = SmallVec<[(S, V); 8]>;

/// Storage strategy for parsed values
pub(crate) trait ValueBuilder {
    /// Finished value type
    type Value;
    /// Object key representation
    type Str;

    fn null(&mut self) -> Self::Value;
    fn boolean(&mut self, value: bool) -> Self::Value;
    fn integer(&mut self, value: i64) -> Self::Value;
    fn float(&mut self, value: f64) -> Self::Value;
    fn string(&mut self, text: &str) -> Result<Self::Value>;
    fn key(&mut self, text: &str) -> Result<Self::Str>;
    fn array(&mut self, items: Elements<Self::Value>) -> Result<Self::Value>;
    fn object(&mut self, members: Members<Self::Str, Self::Value>) -> Result<Self::Value>;
}

/// Builder producing heap-owned values
pub(crate) struct OwnedBuilder;

impl ValueBuilder for OwnedBuilder {
    type Value = JsonValue;
    type Str = String;

    fn null(&mut self) -> JsonValue {
        JsonValue::Null
    }

    fn boolean(&mut self, value: bool) -> JsonValue {
        JsonValue::Bool(value)
    }

    fn integer(&mut self, value: i64) -> JsonValue {
        JsonValue::Integer(value)
    }

    fn float(&mut self, value: f64) -> JsonValue {
        JsonValue::Float(value)
    }

    fn string(&mut self, text: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(text.to_string()))
    }

    fn key(&mut self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn array(&mut self, items: Elements<JsonValue>) -> Result<JsonValue> {
        Ok(JsonValue::Array(items.into_vec()))
    }

    fn object(&mut self, members: Members<String, JsonValue>) -> Result<JsonValue> {
        let mut map = HashMap::with_capacity(members.len());
        for (key, value) in members {
            // Last write wins on duplicate keys.
            map.insert(key, value);
        }
        Ok(JsonValue::Object(map))
    }
}

/// Builder routing string and container storage through an arena
pub(crate) struct ArenaBuilder<'a> {
    pub arena: &'a Arena,
}

impl<'a> ValueBuilder for ArenaBuilder<'a> {
    type Value = ArenaValue<'a>;
    type Str = &'a str;

    fn null(&mut self) -> ArenaValue<'a> {
        ArenaValue::Null
    }

    fn boolean(&mut self, value: bool) -> ArenaValue<'a> {
        ArenaValue::Bool(value)
    }

    fn integer(&mut self, value: i64) -> ArenaValue<'a> {
        ArenaValue::Integer(value)
    }

    fn float(&mut self, value: f64) -> ArenaValue<'a> {
        ArenaValue::Float(value)
    }

    fn string(&mut self, text: &str) -> Result<ArenaValue<'a>> {
        Ok(ArenaValue::String(self.arena.alloc_str(text)?))
    }

    fn key(&mut self, text: &str) -> Result<&'a str> {
        self.arena.alloc_str(text)
    }

    fn array(&mut self, items: Elements<ArenaValue<'a>>) -> Result<ArenaValue<'a>> {
        Ok(ArenaValue::Array(self.arena.alloc_slice_copy(&items)?))
    }

    fn object(
        &mut self,
        members: Members<&'a str, ArenaValue<'a>>,
    ) -> Result<ArenaValue<'a>> {
        // Last write wins on duplicate keys; the surviving member keeps the
        // slot of its first occurrence.
        let mut resolved: Members<&'a str, ArenaValue<'a>> =
            SmallVec::with_capacity(members.len());
        for (key, value) in members {
            match resolved.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => resolved.push((key, value)),
            }
        }
        Ok(ArenaValue::Object(self.arena.alloc_slice_copy(&resolved)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_owned_object_duplicate_keys_last_write_wins() {
        let mut builder = OwnedBuilder;
        let members: Members<String, JsonValue> = smallvec![
            ("k".to_string(), JsonValue::Integer(1)),
            ("k".to_string(), JsonValue::Integer(2)),
        ];
        let value = builder.object(members).unwrap();
        assert_eq!(value.get("k"), Some(&JsonValue::Integer(2)));
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_arena_object_duplicate_keys_last_write_wins() {
        let arena = Arena::with_capacity(1024).unwrap();
        let mut builder = ArenaBuilder { arena: &arena };

        let k1 = builder.key("k").unwrap();
        let k2 = builder.key("k").unwrap();
        let members: Members<&str, ArenaValue<'_>> = smallvec![
            (k1, ArenaValue::Integer(1)),
            (k2, ArenaValue::Integer(2)),
        ];
        let value = builder.object(members).unwrap();
        assert_eq!(value.get("k"), Some(ArenaValue::Integer(2)));
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_arena_builder_copies_into_arena() {
        let arena = Arena::with_capacity(1024).unwrap();
        let mut builder = ArenaBuilder { arena: &arena };

        let value = builder.string("hello").unwrap();
        assert!(arena.used_bytes() >= 5);
        assert_eq!(value.as_str(), Some("hello"));
    }
}
