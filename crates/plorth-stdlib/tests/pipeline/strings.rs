//! String prototype words and the global conversions.

use plorth_runtime::{ErrorKind, Value};

use super::{assert_error, assert_error_message, assert_stack, assert_top, boolean, int, string};

#[test]
fn string_to_quote_compiles_source() {
    assert_stack(r#""1 2 +" >quote call"#, &[int(3)]);
}

#[test]
fn string_to_quote_reports_syntax_errors() {
    assert_error(r#""( unterminated" >quote"#, ErrorKind::Syntax);
}

#[test]
fn string_to_symbol() {
    let values = super::eval_stack(r#""swap" >symbol"#);

    match &values[0] {
        Value::Symbol(symbol) => assert_eq!(symbol.id(), "swap"),
        other => panic!("expected symbol, got {:?}", other),
    }
}

#[test]
fn empty_string_to_symbol_is_a_value_error() {
    assert_error_message(
        r#""" >symbol"#,
        ErrorKind::Value,
        "Cannot construct empty symbol.",
    );
}

#[test]
fn whitespace_in_symbol_text_is_a_value_error() {
    assert_error(r#""two words" >symbol"#, ErrorKind::Value);
    assert_error(r#""br[ckets" >symbol"#, ErrorKind::Value);
}

#[test]
fn symbol_round_trip_through_call() {
    assert_stack(r#"1 2 "swap" >symbol call"#, &[int(2), int(1)]);
}

#[test]
fn to_string_conversion() {
    assert_top("42 >string", string("42"));
    assert_top("2.5 >string", string("2.5"));
    assert_top("null >string", string(""));
    assert_top("true >string", string("true"));
    assert_top("[1 2] >string", string("1, 2"));
}

#[test]
fn to_source_conversion() {
    assert_top(r#""x" >source"#, string("\"x\""));
    assert_top("null >source", string("null"));
    assert_top("[1 2] >source", string("[1, 2]"));
    assert_top("nan >source", string("nan"));
    assert_top("inf >source", string("inf"));
    assert_top("-inf >source", string("-inf"));
}

#[test]
fn to_boolean_conversion() {
    assert_top("null >boolean", boolean(false));
    assert_top("false >boolean", boolean(false));
    assert_top("true >boolean", boolean(true));
    assert_top("0 >boolean", boolean(true));
    assert_top(r#""" >boolean"#, boolean(true));
}

#[test]
fn to_boolean_is_idempotent() {
    assert_top("42 >boolean >boolean", boolean(true));
    assert_top("null >boolean >boolean", boolean(false));
}

#[test]
fn strings_are_equal_by_content() {
    assert_top(r#""abc" "abc" ="#, boolean(true));
    assert_top(r#""abc" "abd" ="#, boolean(false));
}

#[test]
fn unicode_strings_survive_the_pipeline() {
    assert_top(r#""päivää""#, string("päivää"));
    assert_top(r#""ä""#, string("ä"));
}
