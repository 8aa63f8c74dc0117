//! Words of the symbol prototype.

use std::sync::Arc;

use plorth_core::Position;
use plorth_runtime::{Context, DictionaryDefinition, Object, Outcome, Value};

pub(crate) fn position_to_object(position: &Position) -> Object {
    Object::from_properties([
        (Arc::from("file"), Value::from(position.file())),
        (Arc::from("line"), Value::from(i64::from(position.line()))),
        (
            Arc::from("column"),
            Value::from(i64::from(position.column())),
        ),
    ])
}

/// `position` ( symbol -- object|null )
///
/// Give the position in source code where the symbol was encountered as
/// an object with `file`, `line` and `column` properties, or null when no
/// such information is available.
fn cmd_position(ctx: &mut Context) -> Outcome {
    let symbol = ctx.pop_symbol()?;

    match symbol.position() {
        Some(position) => ctx.push(Value::from(position_to_object(position))),
        None => ctx.push(Value::Null),
    }

    Ok(())
}

/// `call` ( symbol -- )
///
/// Resolve the symbol against the stack, the dictionaries and the number
/// grammar, exactly like a symbol encountered in a compiled quote, and
/// executes the result.
fn cmd_call(ctx: &mut Context) -> Outcome {
    let symbol = ctx.pop_symbol()?;

    ctx.exec(&Value::Symbol(symbol))
}

/// `>word` ( symbol -- word )
fn cmd_to_word(ctx: &mut Context) -> Outcome {
    let symbol = ctx.pop_symbol()?;

    ctx.push(Value::Word(symbol));
    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    // Getters.
    ("position", cmd_position),
    // Methods.
    ("call", cmd_call),
    // Converters.
    (">word", cmd_to_word),
];
