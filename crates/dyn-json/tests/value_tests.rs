use std::collections::HashMap;

use dyn_json::{value, Value};

// ============================================================================
// Equality
// ============================================================================

#[test]
fn array_equality_is_order_sensitive() {
    assert_eq!(value!([1, 2]), value!([1, 2]));
    assert_ne!(value!([1, 2]), value!([2, 1]));
}

#[test]
fn object_equality_ignores_key_order() {
    let mut forward = HashMap::new();
    forward.insert("a".to_owned(), value!(1));
    forward.insert("b".to_owned(), value!(2));

    let mut reverse = HashMap::new();
    reverse.insert("b".to_owned(), value!(2));
    reverse.insert("a".to_owned(), value!(1));

    assert_eq!(Value::Object(forward), Value::Object(reverse));
}

#[test]
fn object_equality_is_structural() {
    assert_ne!(value!({"a": 1}), value!({"a": 2}));
    assert_ne!(value!({"a": 1}), value!({"b": 1}));
    assert_ne!(value!({"a": 1}), value!({"a": 1, "b": 2}));
}

#[test]
fn cross_variant_values_are_never_equal() {
    assert_ne!(value!(0), Value::Null);
    assert_ne!(value!(false), Value::Null);
    assert_ne!(value!(""), Value::Null);
    assert_ne!(value!(1), value!("1"));
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn is_null_true_only_for_null() {
    assert!(Value::Null.is_null());
    assert!(!value!(0).is_null());
    assert!(!value!(false).is_null());
    assert!(!value!("").is_null());
    assert!(!value!([]).is_null());
    assert!(!value!({}).is_null());
}

#[test]
fn default_value_is_null() {
    assert!(Value::default().is_null());
}

#[test]
fn variant_predicates() {
    assert!(value!(1.5).is_number());
    assert!(value!("x").is_string());
    assert!(value!(true).is_bool());
    assert!(value!([1]).is_array());
    assert!(value!({"k": 1}).is_object());
}

// ============================================================================
// Typed coercion getters — exact variant only, no cross-coercion
// ============================================================================

#[test]
fn as_number_returns_payload() {
    assert_eq!(value!(2.5).as_number(), Some(2.5));
    assert_eq!(value!(0).as_number(), Some(0.0));
}

#[test]
fn as_number_does_not_coerce_digit_strings() {
    assert_eq!(value!("42").as_number(), None);
}

#[test]
fn as_number_does_not_coerce_bools() {
    assert_eq!(value!(true).as_number(), None);
}

#[test]
fn as_str_returns_payload() {
    assert_eq!(value!("hello").as_str(), Some("hello"));
    assert_eq!(value!(42).as_str(), None);
    assert_eq!(Value::Null.as_str(), None);
}

#[test]
fn as_bool_returns_payload() {
    assert_eq!(value!(false).as_bool(), Some(false));
    assert_eq!(value!(1).as_bool(), None);
    assert_eq!(value!("true").as_bool(), None);
}

#[test]
fn as_array_and_as_object() {
    let v = value!([1, 2]);
    assert_eq!(v.as_array().map(Vec::len), Some(2));
    assert_eq!(v.as_object(), None);

    let v = value!({"a": 1});
    assert_eq!(v.as_object().map(HashMap::len), Some(1));
    assert_eq!(v.as_array(), None);
}

#[test]
fn as_array_mut_allows_in_place_growth() {
    let mut v = value!([1]);
    v.as_array_mut().unwrap().push(value!(2));
    assert_eq!(v, value!([1, 2]));
}

// ============================================================================
// Integer indexing — fail-fast reads, recovering `at`, silent writes
// ============================================================================

#[test]
fn index_reads_array_element() {
    let v = value!([10, 20, 30]);
    assert_eq!(v[0], value!(10));
    assert_eq!(v[2], value!(30));
}

#[test]
#[should_panic(expected = "index 5 out of bounds for array of length 3")]
fn index_out_of_bounds_panics() {
    let v = value!([1, 2, 3]);
    let _ = &v[5];
}

#[test]
#[should_panic(expected = "cannot index into a number")]
fn index_on_non_array_panics() {
    let v = value!(1);
    let _ = &v[0];
}

#[test]
fn at_recovers_where_index_would_panic() {
    let v = value!([1, 2, 3]);
    assert_eq!(v.at(1), Some(&value!(2)));
    assert_eq!(v.at(5), None);
    assert_eq!(value!(1).at(0), None);
    assert_eq!(Value::Null.at(0), None);
}

#[test]
fn at_mut_replaces_through_the_borrow() {
    let mut v = value!([1, 2]);
    *v.at_mut(0).unwrap() = value!("swapped");
    assert_eq!(v, value!(["swapped", 2]));
}

#[test]
fn set_at_replaces_element() {
    let mut v = value!([1, 2, 3]);
    v.set_at(1, "two");
    assert_eq!(v, value!([1, "two", 3]));
}

#[test]
fn set_at_on_non_array_is_a_silent_no_op() {
    let mut v = value!(1);
    v.set_at(0, 99);
    assert_eq!(v, value!(1));
}

#[test]
fn set_at_out_of_bounds_is_a_silent_no_op() {
    let mut v = value!([1]);
    v.set_at(7, 99);
    assert_eq!(v, value!([1]));
}

// ============================================================================
// Keyed access — recovering reads, silent writes, explicit remove
// ============================================================================

#[test]
fn get_returns_child_value() {
    let v = value!({"a": 1, "b": "x"});
    assert_eq!(v.get("a"), Some(&value!(1)));
    assert_eq!(v.get("b"), Some(&value!("x")));
}

#[test]
fn get_missing_key_returns_none() {
    let v = value!({"a": 1});
    assert_eq!(v.get("missing"), None);
}

#[test]
fn get_on_non_object_returns_none() {
    assert_eq!(value!(1).get("a"), None);
    assert_eq!(value!([1]).get("a"), None);
    assert_eq!(Value::Null.get("a"), None);
}

#[test]
fn get_distinguishes_explicit_null_from_missing() {
    let v = value!({"present": null});
    assert_eq!(v.get("present"), Some(&Value::Null));
    assert_eq!(v.get("absent"), None);
}

#[test]
fn get_mut_replaces_through_the_borrow() {
    let mut v = value!({"a": 1});
    *v.get_mut("a").unwrap() = value!([1, 2]);
    assert_eq!(v, value!({"a": [1, 2]}));
}

#[test]
fn set_inserts_and_overwrites() {
    let mut v = value!({"a": 1});
    v.set("b", 2);
    v.set("a", "replaced");
    assert_eq!(v, value!({"a": "replaced", "b": 2}));
}

#[test]
fn set_on_non_object_is_a_silent_no_op() {
    let mut v = value!(1);
    v.set("a", 2);
    assert_eq!(v, value!(1));

    let mut v = value!([1]);
    v.set("a", 2);
    assert_eq!(v, value!([1]));
}

#[test]
fn remove_returns_the_removed_child() {
    let mut v = value!({"a": 1, "b": 2});
    assert_eq!(v.remove("a"), Some(value!(1)));
    assert_eq!(v, value!({"b": 2}));
}

#[test]
fn remove_missing_key_returns_none() {
    let mut v = value!({"a": 1});
    assert_eq!(v.remove("b"), None);
    assert_eq!(v, value!({"a": 1}));
}

#[test]
fn remove_on_non_object_returns_none() {
    let mut v = value!([1, 2]);
    assert_eq!(v.remove("a"), None);
    assert_eq!(v, value!([1, 2]));
}

#[test]
fn removed_key_is_missing_not_null() {
    let mut v = value!({"a": null});
    v.remove("a");
    assert_eq!(v.get("a"), None);
    assert_eq!(v, value!({}));
}
