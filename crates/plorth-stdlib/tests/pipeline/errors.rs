//! Error values: constructors, accessors, throw, boundary behaviors.

use plorth_runtime::{ErrorKind, Value};

use super::{assert_error, assert_error_message, assert_top, boolean, eval_stack, int, string};

#[test]
fn error_constructors_build_errors() {
    for (source, code) in [
        (r#""oops" syntax-error"#, 1),
        (r#""oops" reference-error"#, 2),
        (r#""oops" type-error"#, 3),
        (r#""oops" value-error"#, 4),
        (r#""oops" range-error"#, 5),
        (r#""oops" import-error"#, 6),
        (r#""oops" io-error"#, 7),
        (r#""oops" unknown-error"#, 8),
    ] {
        let program = format!("{} code nip", source);

        assert_top(&program, int(code));
    }
}

#[test]
fn error_constructor_accepts_null_message() {
    assert_top("null type-error message nip", Value::Null);
}

#[test]
fn error_constructor_rejects_other_messages() {
    assert_error("42 type-error", ErrorKind::Type);
}

#[test]
fn message_accessor() {
    assert_top(r#""boom" value-error message nip"#, string("boom"));
}

#[test]
fn errors_are_first_class_values() {
    assert_top(r#""x" range-error error?"#, boolean(true));
}

#[test]
fn throw_installs_the_error() {
    assert_error_message(r#""boom" value-error throw"#, ErrorKind::Value, "boom");
}

#[test]
fn thrown_errors_are_catchable() {
    assert_top(
        r#"("boom" value-error throw) (message nip) try"#,
        string("boom"),
    );
}

#[test]
fn caught_errors_carry_a_position() {
    // The error was raised while executing a symbol, so it knows where.
    let values = eval_stack("(no-such-word) (position nip) try");

    assert_eq!(values.len(), 1);
    match &values[0] {
        Value::Object(object) => {
            assert_eq!(object.get("line"), Some(&int(1)));
            assert!(object.get("file").is_some());
            assert!(object.get("column").is_some());
        }
        other => panic!("expected position object, got {:?}", other),
    }
}

#[test]
fn errors_compare_by_kind_and_message() {
    assert_top(
        r#""x" type-error "x" type-error ="#,
        boolean(true),
    );
    assert_top(
        r#""x" type-error "y" type-error ="#,
        boolean(false),
    );
    assert_top(
        r#""x" type-error "x" value-error ="#,
        boolean(false),
    );
}

#[test]
fn error_display_forms() {
    assert_top(
        r#""Stack underflow." range-error >string"#,
        string("Range error: Stack underflow."),
    );
    assert_top(
        r#"null range-error >string"#,
        string("Range error"),
    );
    assert_top(
        r#"null unknown-error >source"#,
        string("<Unknown error>"),
    );
}

#[test]
fn stack_height_unchanged_after_failed_typed_pop() {
    // Concatenation pops its array operand, then fails on the string; the
    // failed pop must leave the remaining operands in place.
    assert_top(r#"1 "x" ([1] +) (drop depth) try"#, int(2));
}

#[test]
fn wrong_type_messages() {
    assert_error_message(
        r#"5 {"a": 1} has?"#,
        ErrorKind::Type,
        "Expected string, got number instead.",
    );
}

#[test]
fn unrecognized_word_message() {
    assert_error_message(
        "frobnicate",
        ErrorKind::Reference,
        "Unrecognized word: `frobnicate'",
    );
}
