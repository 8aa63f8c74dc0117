//! The `read` and `write` words against embedder-provided handles.

use std::sync::Arc;

use plorth_runtime::{BufferOutput, Context, ErrorKind, QueueInput, Value};

use super::int;

fn context_with_io(
    input: Option<Box<dyn plorth_runtime::Input + Send>>,
    output: Option<Box<dyn plorth_runtime::Output + Send>>,
) -> Context {
    Context::new(Arc::new(plorth_stdlib::runtime_with_io(input, output)))
}

#[test]
fn write_sends_the_top_value_to_the_output() {
    let buffer = BufferOutput::new();
    let mut ctx = context_with_io(None, Some(Box::new(buffer.clone())));

    plorth_stdlib::eval_in(&mut ctx, r#""hello" write 42 write"#).unwrap();
    assert_eq!(buffer.values(), vec![Value::from("hello"), Value::from(42)]);
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn write_without_output_is_an_io_error() {
    let error = plorth_stdlib::eval("1 write").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.message(), "No output available.");
}

#[test]
fn read_takes_values_from_the_input() {
    let input = QueueInput::new([Value::from(1), Value::from(2)]);
    let mut ctx = context_with_io(Some(Box::new(input)), None);

    let values = plorth_stdlib::eval_in(&mut ctx, "read read +").unwrap();
    assert_eq!(values, vec![int(3)]);
}

#[test]
fn read_past_the_end_is_an_io_error() {
    let input = QueueInput::new([]);
    let mut ctx = context_with_io(Some(Box::new(input)), None);

    let error = plorth_stdlib::eval_in(&mut ctx, "read").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.message(), "Reading from input failed.");
}

#[test]
fn read_without_input_is_an_io_error() {
    let error = plorth_stdlib::eval("read").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(error.message(), "No input available.");
}

#[test]
fn failed_writes_are_catchable() {
    let mut ctx = context_with_io(None, None);

    let values =
        plorth_stdlib::eval_in(&mut ctx, r#"(1 write) (code nip) try"#).unwrap();
    assert_eq!(values, vec![int(7)]);
}
