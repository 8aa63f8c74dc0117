//! End-to-end compilation and execution tests.
//!
//! These tests verify the complete source → compile → execute path.
//! Tests are organized into modules by functionality.

use plorth_runtime::{ErrorKind, Value};

mod arrays;
mod errors;
mod io;
mod literals;
mod objects;
mod roundtrip;
mod stack;
mod strings;
mod words;

// ============================================================================
// Test Helpers
// ============================================================================

/// Evaluate source and returns the stack, panicking on any error.
pub fn eval_stack(source: &str) -> Vec<Value> {
    plorth_stdlib::eval(source)
        .unwrap_or_else(|error| panic!("eval failed for '{}': {}", source, error))
}

/// Assert the final stack, bottom to top.
pub fn assert_stack(source: &str, expected: &[Value]) {
    let actual = eval_stack(source);

    assert_eq!(
        actual, expected,
        "stack mismatch for '{}': expected {:?}, got {:?}",
        source, expected, actual
    );
}

/// Assert the topmost value of the final stack.
pub fn assert_top(source: &str, expected: Value) {
    let actual = eval_stack(source);

    assert_eq!(
        actual.last(),
        Some(&expected),
        "top mismatch for '{}': expected {:?}, got {:?}",
        source,
        expected,
        actual
    );
}

/// Assert that evaluation fails with the given error kind.
pub fn assert_error(source: &str, kind: ErrorKind) {
    match plorth_stdlib::eval(source) {
        Ok(stack) => panic!("expected {:?} for '{}', got stack {:?}", kind, source, stack),
        Err(error) => assert_eq!(
            error.kind(),
            kind,
            "wrong error kind for '{}': expected {:?}, got {}",
            source,
            kind,
            error
        ),
    }
}

/// Assert that evaluation fails with the given error kind and message.
pub fn assert_error_message(source: &str, kind: ErrorKind, message: &str) {
    match plorth_stdlib::eval(source) {
        Ok(stack) => panic!("expected {:?} for '{}', got stack {:?}", kind, source, stack),
        Err(error) => {
            assert_eq!(error.kind(), kind, "wrong error kind for '{}'", source);
            assert_eq!(error.message(), message, "wrong message for '{}'", source);
        }
    }
}

pub fn int(value: i64) -> Value {
    Value::from(value)
}

pub fn real(value: f64) -> Value {
    Value::from(value)
}

pub fn string(value: &str) -> Value {
    Value::from(value)
}

pub fn boolean(value: bool) -> Value {
    Value::from(value)
}

pub fn array(values: Vec<Value>) -> Value {
    Value::from(values)
}

pub fn ints(values: &[i64]) -> Value {
    array(values.iter().map(|&v| int(v)).collect())
}
