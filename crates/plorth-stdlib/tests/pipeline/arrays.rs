//! Array prototype words.

use plorth_runtime::{ErrorKind, Value};

use super::{array, assert_error, assert_error_message, assert_stack, assert_top, int, ints, string};

#[test]
fn length_keeps_the_array() {
    assert_stack("[1 2 3] length", &[ints(&[1, 2, 3]), int(3)]);
    assert_stack("[] length", &[ints(&[]), int(0)]);
}

#[test]
fn map_multiplies() {
    // Receiver-first spelling: the quote is on top when `map` resolves.
    assert_top("[1 2 3] (2 *) map", ints(&[2, 4, 6]));
    // Quote-first spelling dispatches through the array prototype.
    assert_top("(2 *) [1 2 3] map", ints(&[2, 4, 6]));
}

#[test]
fn map_preserves_integers() {
    let values = super::eval_stack("[1 2 3] (2 *) map");

    match &values[0] {
        Value::Array(elements) => {
            assert!(elements
                .iter()
                .all(|value| matches!(value, Value::Number(n) if n.is_int())));
        }
        other => panic!("expected array, got {:?}", other),
    }
}

#[test]
fn filter_keeps_matching_elements() {
    assert_top("[1 2 3 4] (2 % 0 =) filter", ints(&[2, 4]));
}

#[test]
fn for_each_pushes_every_element() {
    assert_stack("[1 2 3] (1 +) for-each", &[int(2), int(3), int(4)]);
}

#[test]
fn reduce_folds_from_the_first_element() {
    assert_top("[1 2 3 4] (+) reduce", int(10));
    assert_top("[42] (+) reduce", int(42));
}

#[test]
fn reduce_empty_array_is_a_range_error() {
    assert_error_message(
        "[] (+) reduce",
        ErrorKind::Range,
        "Cannot reduce empty array.",
    );
}

#[test]
fn flatten_is_deep() {
    assert_top("[1 [2 [3 4]] 5] >flatten", ints(&[1, 2, 3, 4, 5]));
}

#[test]
fn reverse() {
    assert_top("[1 2 3] >reverse", ints(&[3, 2, 1]));
}

#[test]
fn reverse_twice_is_identity() {
    assert_top("[1 2 3] >reverse >reverse", ints(&[1, 2, 3]));
}

#[test]
fn array_to_quote_executes_elements() {
    assert_stack("[1 2] >quote call", &[int(1), int(2)]);
}

#[test]
fn concat() {
    assert_top("[1 2] [3 4] +", ints(&[1, 2, 3, 4]));
    assert_top("[] [1] +", ints(&[1]));
}

#[test]
fn repeat() {
    assert_top("2 [1 2] *", ints(&[1, 2, 1, 2]));
    assert_top("0 [1 2] *", ints(&[]));
}

#[test]
fn repeat_negative_count_is_a_range_error() {
    assert_error_message("-1 [1 2] *", ErrorKind::Range, "Invalid repeat count.");
}

#[test]
fn intersection_orders_from_the_right_operand() {
    assert_top("[1 2 3] [3 2 5] &", ints(&[3, 2]));
    assert_top("[1] [2] &", ints(&[]));
}

#[test]
fn intersection_deduplicates() {
    assert_top("[1 2] [2 2 1] &", ints(&[2, 1]));
}

#[test]
fn union_orders_right_operand_first() {
    assert_top("[1 2] [2 3] |", ints(&[2, 3, 1]));
}

#[test]
fn union_deduplicates() {
    assert_top("[1 1] [2 2] |", ints(&[2, 1]));
}

#[test]
fn mixed_element_types() {
    assert_top(
        r#"[1 "a"] [true] +"#,
        array(vec![int(1), string("a"), super::boolean(true)]),
    );
}

#[test]
fn map_propagates_errors_from_the_quote() {
    assert_error("[1 2] (no-such-word) map", ErrorKind::Reference);
}

#[test]
fn length_on_a_number_does_not_resolve() {
    assert_error("5 length", ErrorKind::Reference);
}

#[test]
fn concat_with_a_non_array_operand_is_a_type_error() {
    assert_error_message(
        "5 [1] +",
        ErrorKind::Type,
        "Expected array, got number instead.",
    );
}
