//! Literal values: numbers, strings, arrays, objects, quotes, constants.

use plorth_runtime::Value;

use super::{array, assert_stack, assert_top, boolean, eval_stack, int, real, string};

#[test]
fn integer_literals() {
    assert_stack("1 2 3", &[int(1), int(2), int(3)]);
    assert_stack("-7 +9", &[int(-7), int(9)]);
}

#[test]
fn real_literals() {
    assert_stack("2.5 -0.5 1e3", &[real(2.5), real(-0.5), real(1000.0)]);
}

#[test]
fn string_literals() {
    assert_stack(r#""hello" "wor\tld""#, &[string("hello"), string("wor\tld")]);
}

#[test]
fn constants() {
    assert_stack("true false null", &[boolean(true), boolean(false), Value::Null]);
    assert_top("inf", real(f64::INFINITY));
    assert_top("-inf", real(f64::NEG_INFINITY));
}

#[test]
fn nan_is_a_number_but_not_equal_to_itself() {
    assert_top("nan nan =", boolean(false));
    assert_top("nan number?", boolean(true));
}

#[test]
fn pi_and_e() {
    assert_top("pi", real(std::f64::consts::PI));
    assert_top("e", real(std::f64::consts::E));
}

#[test]
fn array_literals_evaluate_their_elements() {
    assert_stack("[1 2 3]", &[ints_123()]);
    assert_stack("[1, 2, 3,]", &[ints_123()]);
    assert_top("[true null \"x\"]", array(vec![boolean(true), Value::Null, string("x")]));
}

fn ints_123() -> Value {
    array(vec![int(1), int(2), int(3)])
}

#[test]
fn nested_array_literals() {
    assert_top(
        "[[1 2] [3]]",
        array(vec![array(vec![int(1), int(2)]), array(vec![int(3)])]),
    );
}

#[test]
fn object_literals() {
    let values = eval_stack(r#"{"a": 1, "b": [2 3]}"#);

    assert_eq!(values.len(), 1);
    match &values[0] {
        Value::Object(object) => {
            assert_eq!(object.get("a"), Some(&int(1)));
            assert_eq!(object.get("b"), Some(&array(vec![int(2), int(3)])));
        }
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn quote_literals_are_inert_until_called() {
    let values = eval_stack("(1 2 +)");

    assert_eq!(values.len(), 1);
    assert!(matches!(&values[0], Value::Quote(_)));
}

#[test]
fn calling_a_quote_literal() {
    assert_stack("(1 2 +) call", &[int(3)]);
}

#[test]
fn comments_are_ignored() {
    assert_stack("1 # a comment\n2", &[int(1), int(2)]);
    assert_stack("1 (* block *) 2", &[int(1), int(2)]);
}
