//! Word declarations, dictionaries and the symbol/word prototypes.

use plorth_runtime::{ErrorKind, Value};

use super::{assert_error, assert_error_message, assert_stack, assert_top, boolean, eval_stack, int};

#[test]
fn word_declaration_binds_locally() {
    assert_stack(": square ( dup * ) ; 7 square", &[int(49)]);
    assert_stack(": square dup * ; 7 square", &[int(49)]);
}

#[test]
fn words_can_build_on_words() {
    assert_stack(
        ": double 2 * ; : quadruple double double ; 3 quadruple",
        &[int(12)],
    );
}

#[test]
fn recursive_word() {
    // Classic countdown: n n-1 ... 1
    assert_stack(
        ": countdown dup 0 > ( dup 1 - countdown ) if ; 3 countdown",
        &[int(3), int(2), int(1), int(0)],
    );
}

#[test]
fn local_words_shadow_globals() {
    assert_stack(": depth 42 ; depth", &[int(42)]);
}

#[test]
fn locals_projects_the_local_dictionary() {
    let values = eval_stack(": answer 42 ; locals");

    match values.last() {
        Some(Value::Object(object)) => assert!(object.get("answer").is_some()),
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn globals_projects_the_global_dictionary() {
    let values = eval_stack("globals");

    match values.last() {
        Some(Value::Object(object)) => {
            assert!(object.get("dup").is_some());
            assert!(object.get("if").is_some());
        }
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn symbol_to_word_and_define() {
    assert_stack(r#"42 "answer" >symbol >word define answer"#, &[int(42)]);
}

#[test]
fn word_symbol_extracts_the_symbol() {
    let values = eval_stack(r#""x" >symbol >word symbol"#);

    assert_eq!(values.len(), 2);
    assert!(matches!(&values[0], Value::Word(w) if w.id() == "x"));
    assert!(matches!(&values[1], Value::Symbol(s) if s.id() == "x"));
}

#[test]
fn delete_removes_a_binding() {
    assert_error(
        r#": gone 1 ; "gone" >symbol >word delete gone"#,
        ErrorKind::Reference,
    );
}

#[test]
fn delete_without_binding_is_a_reference_error() {
    assert_error_message(
        r#""missing" >symbol >word delete"#,
        ErrorKind::Reference,
        "Unrecognized word: `missing'",
    );
}

#[test]
fn word_predicate() {
    assert_top(r#""x" >symbol >word word?"#, boolean(true));
    assert_top(r#""x" >symbol word?"#, boolean(false));
}

#[test]
fn symbol_predicate() {
    assert_top(r#""x" >symbol symbol?"#, boolean(true));
}

#[test]
fn symbols_compare_by_identifier() {
    assert_top(r#""x" >symbol "x" >symbol ="#, boolean(true));
    assert_top(r#""x" >symbol "y" >symbol ="#, boolean(false));
}

#[test]
fn symbols_built_from_strings_have_no_position() {
    let values = eval_stack(r#""foo" >symbol position"#);

    assert_eq!(values, vec![Value::Null]);
}

#[test]
fn declaration_leaves_the_surrounding_stack_alone() {
    assert_stack("42 : seven 7 ; seven", &[int(42), int(7)]);
}
