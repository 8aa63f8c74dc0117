//! Source round-trip and idempotence laws.

use plorth_runtime::Value;

use super::{assert_top, boolean, eval_stack};

/// For any non-native value, `>source >quote call` must reproduce the
/// value on the stack.
fn assert_source_round_trip(source: &str) {
    let original = eval_stack(source);
    let program = format!("{} >source >quote call", source);
    let round_tripped = eval_stack(&program);

    assert_eq!(
        original, round_tripped,
        "source round trip changed the value of '{}'",
        source
    );
}

#[test]
fn scalars_round_trip() {
    assert_source_round_trip("42");
    assert_source_round_trip("-7");
    assert_source_round_trip("2.5");
    assert_source_round_trip("true");
    assert_source_round_trip("false");
    assert_source_round_trip("null");
}

#[test]
fn strings_round_trip() {
    assert_source_round_trip(r#""hello""#);
    assert_source_round_trip(r#""with \"escapes\" and \\ slashes""#);
    assert_source_round_trip(r#""tabs\tand\nnewlines""#);
    assert_source_round_trip(r#""ä ö ß €""#);
}

#[test]
fn containers_round_trip() {
    assert_source_round_trip("[1 2 3]");
    assert_source_round_trip(r#"[[1 2] [3] []]"#);
    assert_source_round_trip(r#"{"a": 1, "b": [true null]}"#);
}

#[test]
fn quotes_round_trip() {
    assert_source_round_trip("(1 2 +)");
    assert_source_round_trip("((nested) quotes)");
}

#[test]
fn infinities_round_trip() {
    assert_source_round_trip("inf");
    assert_source_round_trip("-inf");
}

#[test]
fn equality_is_reflexive() {
    for source in ["42", "2.5", r#""s""#, "[1 [2]]", r#"{"k": 1}"#, "(dup *)", "null", "true"] {
        let program = format!("{} dup =", source);

        assert_top(&program, boolean(true));
    }
}

#[test]
fn boolean_conversion_is_idempotent() {
    assert_top("[1] >boolean >boolean", boolean(true));
}

#[test]
fn json_projection_of_a_program() {
    let values = eval_stack(r#"[1 "two" {"three": 3}]"#);
    let json = values[0].to_json();

    assert_eq!(
        serde_json::to_string(&json).unwrap(),
        r#"[1,"two",{"three":3}]"#
    );
}

#[test]
fn compiled_quotes_are_equal_to_themselves() {
    let values = eval_stack("(1 2 +) dup");

    assert_eq!(values[0], values[1]);
    assert!(matches!(&values[0], Value::Quote(_)));
}
