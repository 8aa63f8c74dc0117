//! Words of the word prototype.

use plorth_runtime::{Context, DictionaryDefinition, ErrorKind, Outcome, Value};

/// `symbol` ( word -- word symbol )
///
/// Extract the symbol the word wraps, keeping the word on the stack.
fn cmd_symbol(ctx: &mut Context) -> Outcome {
    let word = ctx.pop_word()?;

    ctx.push(Value::Word(word.clone()));
    ctx.push(Value::Symbol(word));
    Ok(())
}

/// `define` ( any word -- )
///
/// Bind the value in the local dictionary under the word's identifier.
fn cmd_define(ctx: &mut Context) -> Outcome {
    let word = ctx.pop_word()?;
    let value = ctx.pop()?;

    ctx.define(word.id(), value);
    Ok(())
}

/// `delete` ( word -- )
///
/// Remove the local binding named by the word. Raises a reference error
/// when no such binding exists.
fn cmd_delete(ctx: &mut Context) -> Outcome {
    let word = ctx.pop_word()?;

    if ctx.undefine(word.id()).is_none() {
        return Err(ctx.error(
            ErrorKind::Reference,
            format!("Unrecognized word: `{}'", word.id()),
        ));
    }

    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    ("symbol", cmd_symbol),
    ("define", cmd_define),
    ("delete", cmd_delete),
];
