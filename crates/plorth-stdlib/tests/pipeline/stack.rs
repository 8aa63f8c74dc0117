//! Stack manipulation words.

use plorth_runtime::ErrorKind;

use super::{assert_error_message, assert_stack, assert_top, int, string};

#[test]
fn dup() {
    assert_stack("1 dup", &[int(1), int(1)]);
}

#[test]
fn drop() {
    assert_stack("1 2 drop", &[int(1)]);
}

#[test]
fn drop2() {
    assert_stack("1 2 3 2drop", &[int(1)]);
}

#[test]
fn dup2() {
    assert_stack("1 2 2dup", &[int(1), int(2), int(1), int(2)]);
}

#[test]
fn swap() {
    assert_stack("1 2 swap", &[int(2), int(1)]);
}

#[test]
fn swap_strings() {
    // "Hello" "World" swap leaves "Hello" on top.
    assert_stack(
        r#""Hello" "World" swap"#,
        &[string("World"), string("Hello")],
    );
}

#[test]
fn nip() {
    assert_stack("1 2 nip", &[int(2)]);
}

#[test]
fn over() {
    assert_stack("1 2 over", &[int(1), int(2), int(1)]);
}

#[test]
fn rot() {
    // ( a b c -- b c a )
    assert_stack("1 2 3 rot", &[int(2), int(3), int(1)]);
}

#[test]
fn tuck() {
    // ( a b -- b a b )
    assert_stack("1 2 tuck", &[int(2), int(1), int(2)]);
}

#[test]
fn depth() {
    assert_stack("depth", &[int(0)]);
    assert_stack("1 2 depth", &[int(1), int(2), int(2)]);
}

#[test]
fn clear() {
    assert_stack("1 2 3 clear", &[]);
    assert_stack("1 2 3 clear depth", &[int(0)]);
}

#[test]
fn nop_does_nothing() {
    assert_stack("1 nop nop", &[int(1)]);
}

#[test]
fn dup_drop_is_identity() {
    assert_stack("42 dup drop", &[int(42)]);
}

#[test]
fn swap_swap_is_identity() {
    assert_stack("1 2 swap swap", &[int(1), int(2)]);
}

#[test]
fn underflow_messages() {
    assert_error_message("drop", ErrorKind::Range, "Stack underflow.");
    assert_error_message("dup", ErrorKind::Range, "Stack underflow.");
    assert_error_message("1 swap", ErrorKind::Range, "Stack underflow.");
}

#[test]
fn type_predicates_keep_the_value() {
    assert_stack("42 number?", &[int(42), super::boolean(true)]);
    assert_stack("42 string?", &[int(42), super::boolean(false)]);
    assert_top(r#""x" string?"#, super::boolean(true));
    assert_top("null null?", super::boolean(true));
    assert_top("[1] array?", super::boolean(true));
    assert_top("(1) quote?", super::boolean(true));
    assert_top("true boolean?", super::boolean(true));
}

#[test]
fn typeof_names_the_type() {
    assert_top("42 typeof", string("number"));
    assert_top(r#""x" typeof"#, string("string"));
    assert_top("[1] typeof", string("array"));
}
