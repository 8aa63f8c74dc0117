//! Words of the error prototype.

use plorth_runtime::{Context, DictionaryDefinition, Outcome, Value};

use crate::symbol::position_to_object;

/// `code` ( error -- error number )
///
/// Extract the numeric error code, keeping the error on the stack.
fn cmd_code(ctx: &mut Context) -> Outcome {
    let error = ctx.pop_error()?;
    let code = error.kind().code();

    ctx.push(Value::Error(error));
    ctx.push(code);
    Ok(())
}

/// `message` ( error -- error string|null )
///
/// Extract the error message, or null when the error has none.
fn cmd_message(ctx: &mut Context) -> Outcome {
    let error = ctx.pop_error()?;
    let message = if error.message().is_empty() {
        Value::Null
    } else {
        Value::from(error.message())
    };

    ctx.push(Value::Error(error));
    ctx.push(message);
    Ok(())
}

/// `position` ( error -- error object|null )
///
/// Give the position where the error was raised as an object with
/// `file`, `line` and `column` properties, or null.
fn cmd_position(ctx: &mut Context) -> Outcome {
    let error = ctx.pop_error()?;
    let position = match error.position() {
        Some(position) => Value::from(position_to_object(position)),
        None => Value::Null,
    };

    ctx.push(Value::Error(error));
    ctx.push(position);
    Ok(())
}

/// `throw` ( error -- )
///
/// Install the error into the context's error slot.
fn cmd_throw(ctx: &mut Context) -> Outcome {
    let error = ctx.pop_error()?;

    Err(ctx.throw(error))
}

pub const DEFINITION: DictionaryDefinition = &[
    ("code", cmd_code),
    ("message", cmd_message),
    ("position", cmd_position),
    ("throw", cmd_throw),
];
