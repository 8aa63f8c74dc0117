//! Words of the string prototype.

use plorth_core::is_word_char;
use plorth_runtime::value::format_json_string;
use plorth_runtime::{Context, DictionaryDefinition, ErrorKind, Outcome, Symbol, Value};

/// `>quote` ( string -- quote )
///
/// Compile the string as Plorth source code.
fn cmd_to_quote(ctx: &mut Context) -> Outcome {
    let source = ctx.pop_string()?;
    let quote = ctx.compile(&source)?;

    ctx.push(quote);
    Ok(())
}

/// `>symbol` ( string -- symbol )
///
/// Convert the string into a symbol. Raises a value error when the
/// string is empty or contains characters that cannot appear in a
/// symbol.
fn cmd_to_symbol(ctx: &mut Context) -> Outcome {
    let text = ctx.pop_string()?;

    if text.is_empty() {
        return Err(ctx.error(ErrorKind::Value, "Cannot construct empty symbol."));
    }
    if text.chars().any(|c| !is_word_char(c)) {
        return Err(ctx.error(
            ErrorKind::Value,
            format!("Cannot convert {} into symbol.", format_json_string(&text)),
        ));
    }

    ctx.push(Value::from(Symbol::new(text.as_ref(), None)));
    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    // Converters.
    (">quote", cmd_to_quote),
    (">symbol", cmd_to_symbol),
];
