//! Object prototype words and prototype-chain behavior.

use plorth_runtime::{ErrorKind, Value};

use super::{assert_error, assert_stack, assert_top, boolean, eval_stack, int, string};

#[test]
fn keys_in_insertion_order() {
    assert_top(
        r#"{"b": 1, "a": 2} keys nip"#,
        super::array(vec![string("b"), string("a")]),
    );
}

#[test]
fn values_in_insertion_order() {
    assert_top(
        r#"{"b": 1, "a": 2} values nip"#,
        super::array(vec![int(1), int(2)]),
    );
}

#[test]
fn has_own_property() {
    assert_top(r#""a" {"a": 1} has? nip"#, boolean(true));
    assert_top(r#""b" {"a": 1} has? nip"#, boolean(false));
}

#[test]
fn has_sees_the_prototype_chain() {
    // Every object inherits from the object prototype, which carries
    // `keys` among others.
    assert_top(r#""keys" {} has? nip"#, boolean(true));
}

#[test]
fn property_access() {
    assert_stack(
        r#""a" {"a": 42} @ nip"#,
        &[int(42)],
    );
}

#[test]
fn missing_property_is_a_reference_error() {
    assert_error(r#""nope" {"a": 1} @"#, ErrorKind::Reference);
}

#[test]
fn property_set_returns_a_new_object() {
    let values = eval_stack(r#"2 "b" {"a": 1} !"#);

    match &values[0] {
        Value::Object(object) => {
            assert_eq!(object.get("a"), Some(&int(1)));
            assert_eq!(object.get("b"), Some(&int(2)));
        }
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn objects_compare_structurally() {
    assert_top(r#"{"a": 1} {"a": 1} ="#, boolean(true));
    assert_top(r#"{"a": 1} {"a": 2} ="#, boolean(false));
    assert_top(r#"{"a": 1} {"b": 1} ="#, boolean(false));
}

#[test]
fn explicit_proto_supplies_inherited_properties() {
    // A `__proto__` property names the parent explicitly; lookups walk
    // the chain.
    assert_stack(
        r#""greeting" {"__proto__": {"greeting": "hi"}, "x": 1} @ nip"#,
        &[string("hi")],
    );
}

#[test]
fn prototype_references_are_first_class() {
    // Each type name resolves to an object exposing the prototype.
    let values = eval_stack(r#"array"#);

    assert_eq!(values.len(), 1);
    match &values[0] {
        Value::Object(object) => assert!(object.get("prototype").is_some()),
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn inherited_words_resolve_through_the_stack_top() {
    // `keys` is defined on the object prototype and found through the
    // prototype chain of the object on top of the stack.
    let values = eval_stack(r#"{"a": 1} keys nip"#);

    assert_eq!(values, vec![super::array(vec![string("a")])]);
}
