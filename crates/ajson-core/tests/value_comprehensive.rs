//! Comprehensive value model tests
//!
//! Covers construction, variant predicates, typed accessors, navigation and
//! conversions for the owned value type.

use std::collections::HashMap;

use ajson_rs::{Error, JsonValue};
use maplit::hashmap;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_named_constructors_select_variants() {
    assert_eq!(JsonValue::null(), JsonValue::Null);
    assert_eq!(JsonValue::bool(true), JsonValue::Bool(true));
    assert_eq!(JsonValue::integer(-3), JsonValue::Integer(-3));
    assert_eq!(JsonValue::float(2.5), JsonValue::Float(2.5));
    assert_eq!(JsonValue::string("hi"), JsonValue::String("hi".to_string()));
}

#[test]
fn test_default_is_null() {
    assert!(JsonValue::default().is_null());
}

#[test]
fn test_from_conversions() {
    assert_eq!(JsonValue::from(false), JsonValue::Bool(false));
    assert_eq!(JsonValue::from(7i32), JsonValue::Integer(7));
    assert_eq!(JsonValue::from(7i64), JsonValue::Integer(7));
    assert_eq!(JsonValue::from(1.5f32), JsonValue::Float(1.5));
    assert_eq!(JsonValue::from(1.5f64), JsonValue::Float(1.5));
    assert_eq!(JsonValue::from("text"), JsonValue::string("text"));
    assert_eq!(
        JsonValue::from("text".to_string()),
        JsonValue::string("text")
    );
}

#[test]
fn test_container_construction_with_literals() {
    let value = JsonValue::object(hashmap! {
        "items".to_string() => JsonValue::array(vec![
            JsonValue::integer(1),
            JsonValue::integer(2),
        ]),
        "label".to_string() => JsonValue::string("batch"),
    });

    assert!(value.is_object());
    assert_eq!(value.try_object().unwrap().len(), 2);
    assert_eq!(
        value.get("items").unwrap().get_index(0),
        Some(&JsonValue::Integer(1))
    );
}

// ============================================================================
// Predicates and Accessors
// ============================================================================

#[test]
fn test_integer_and_float_are_distinct_variants() {
    let int = JsonValue::integer(2);
    let float = JsonValue::float(2.0);

    assert!(int.is_integer() && !int.is_float());
    assert!(float.is_float() && !float.is_integer());
    assert!(int.is_number() && float.is_number());
    assert_ne!(int, float);
}

#[test]
fn test_as_accessors_are_non_consuming() {
    let value = JsonValue::string("payload");
    assert_eq!(value.as_str(), Some("payload"));
    // Still usable afterwards.
    assert_eq!(value.as_str(), Some("payload"));
    assert_eq!(value.as_i64(), None);
    assert_eq!(value.as_array(), None);
}

#[test]
fn test_try_accessors_name_both_sides_of_the_mismatch() {
    let value = JsonValue::array(vec![]);
    assert_eq!(
        value.try_bool().unwrap_err(),
        Error::TypeMismatch {
            expected: "bool",
            actual: "array"
        }
    );
    assert_eq!(
        JsonValue::Null.try_object().unwrap_err(),
        Error::TypeMismatch {
            expected: "object",
            actual: "null"
        }
    );
}

#[test]
fn test_type_names_cover_all_variants() {
    assert_eq!(JsonValue::Null.type_name(), "null");
    assert_eq!(JsonValue::bool(true).type_name(), "bool");
    assert_eq!(JsonValue::integer(0).type_name(), "integer");
    assert_eq!(JsonValue::float(0.0).type_name(), "float");
    assert_eq!(JsonValue::string("").type_name(), "string");
    assert_eq!(JsonValue::array(vec![]).type_name(), "array");
    assert_eq!(JsonValue::object(HashMap::new()).type_name(), "object");
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_get_on_non_object_is_none() {
    assert_eq!(JsonValue::integer(1).get("key"), None);
    assert_eq!(JsonValue::array(vec![]).get("key"), None);
}

#[test]
fn test_get_index_on_non_array_is_none() {
    assert_eq!(JsonValue::integer(1).get_index(0), None);
    assert_eq!(JsonValue::object(HashMap::new()).get_index(0), None);
}

#[test]
fn test_nested_navigation_chain() {
    let doc = JsonValue::object(hashmap! {
        "outer".to_string() => JsonValue::object(hashmap! {
            "inner".to_string() => JsonValue::array(vec![
                JsonValue::Null,
                JsonValue::string("found"),
            ]),
        }),
    });

    let found = doc
        .get("outer")
        .and_then(|v| v.get("inner"))
        .and_then(|v| v.get_index(1))
        .unwrap();
    assert_eq!(found.try_str().unwrap(), "found");
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_deep_equality_is_structural() {
    let a = JsonValue::object(hashmap! {
        "k".to_string() => JsonValue::array(vec![JsonValue::float(1.5)]),
    });
    let b = JsonValue::object(hashmap! {
        "k".to_string() => JsonValue::array(vec![JsonValue::float(1.5)]),
    });
    assert_eq!(a, b);

    let c = JsonValue::object(hashmap! {
        "k".to_string() => JsonValue::array(vec![JsonValue::float(1.6)]),
    });
    assert_ne!(a, c);
}
