//! Words of the global dictionary: constants, control flow, stack
//! manipulation, type predicates, conversions, error constructors and I/O.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use plorth_runtime::{
    Context, DictionaryDefinition, ErrorKind, ErrorValue, Object, Outcome, Value, ValueKind,
};

use crate::combinators;

// ----------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------

/// `true` ( -- boolean )
fn cmd_true(ctx: &mut Context) -> Outcome {
    ctx.push(true);
    Ok(())
}

/// `false` ( -- boolean )
fn cmd_false(ctx: &mut Context) -> Outcome {
    ctx.push(false);
    Ok(())
}

/// `null` ( -- null )
fn cmd_null(ctx: &mut Context) -> Outcome {
    ctx.push(Value::Null);
    Ok(())
}

/// `e` ( -- number ) - Euler's number.
fn cmd_e(ctx: &mut Context) -> Outcome {
    ctx.push(std::f64::consts::E);
    Ok(())
}

/// `pi` ( -- number )
fn cmd_pi(ctx: &mut Context) -> Outcome {
    ctx.push(std::f64::consts::PI);
    Ok(())
}

/// `inf` ( -- number )
fn cmd_inf(ctx: &mut Context) -> Outcome {
    ctx.push(f64::INFINITY);
    Ok(())
}

/// `-inf` ( -- number )
fn cmd_negative_inf(ctx: &mut Context) -> Outcome {
    ctx.push(f64::NEG_INFINITY);
    Ok(())
}

/// `nan` ( -- number )
fn cmd_nan(ctx: &mut Context) -> Outcome {
    ctx.push(f64::NAN);
    Ok(())
}

// ----------------------------------------------------------------------
// Control flow
// ----------------------------------------------------------------------

/// `nop` ( -- )
///
/// Does nothing. Can be used to construct empty quotes.
fn cmd_nop(_: &mut Context) -> Outcome {
    Ok(())
}

/// `if` ( boolean quote -- )
///
/// Call the quote when the boolean is true.
fn cmd_if(ctx: &mut Context) -> Outcome {
    let quote = ctx.pop_quote()?;
    let condition = ctx.pop_boolean()?;

    if condition {
        quote.call(ctx)?;
    }

    Ok(())
}

/// `if-else` ( boolean quote quote -- )
///
/// Call the first quote when the boolean is true, the second otherwise.
fn cmd_if_else(ctx: &mut Context) -> Outcome {
    let else_quote = ctx.pop_quote()?;
    let then_quote = ctx.pop_quote()?;
    let condition = ctx.pop_boolean()?;

    if condition {
        then_quote.call(ctx)
    } else {
        else_quote.call(ctx)
    }
}

/// `while` ( quote quote -- )
///
/// Call the second quote for as long as the first quote leaves true.
fn cmd_while(ctx: &mut Context) -> Outcome {
    let body = ctx.pop_quote()?;
    let test = ctx.pop_quote()?;

    loop {
        test.call(ctx)?;
        if !ctx.pop_boolean()? {
            return Ok(());
        }
        body.call(ctx)?;
    }
}

/// `try` ( quote quote -- )
///
/// Call the first quote; when it raises, the error is moved from the
/// error slot onto the stack and the second quote is called.
fn cmd_try(ctx: &mut Context) -> Outcome {
    let catch = ctx.pop_quote()?;
    let body = ctx.pop_quote()?;

    if body.call(ctx).is_err() {
        if let Some(error) = ctx.take_error() {
            ctx.push(Value::Error(error));
        }
        catch.call(ctx)?;
    }

    Ok(())
}

/// `try-else` ( quote quote quote -- )
///
/// Like `try`, but the third quote is called when the first one did not
/// raise.
fn cmd_try_else(ctx: &mut Context) -> Outcome {
    let else_quote = ctx.pop_quote()?;
    let catch = ctx.pop_quote()?;
    let body = ctx.pop_quote()?;

    if body.call(ctx).is_err() {
        if let Some(error) = ctx.take_error() {
            ctx.push(Value::Error(error));
        }
        catch.call(ctx)
    } else {
        else_quote.call(ctx)
    }
}

// ----------------------------------------------------------------------
// Stack manipulation
// ----------------------------------------------------------------------

/// `depth` ( -- number )
fn cmd_depth(ctx: &mut Context) -> Outcome {
    ctx.push(ctx.depth() as i64);
    Ok(())
}

/// `clear` ( ... -- )
fn cmd_clear(ctx: &mut Context) -> Outcome {
    ctx.clear();
    Ok(())
}

/// `drop` ( a -- )
fn cmd_drop(ctx: &mut Context) -> Outcome {
    ctx.pop()?;
    Ok(())
}

/// `2drop` ( a b -- )
fn cmd_drop2(ctx: &mut Context) -> Outcome {
    ctx.pop()?;
    ctx.pop()?;
    Ok(())
}

/// `dup` ( a -- a a )
fn cmd_dup(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;

    ctx.push(value.clone());
    ctx.push(value);
    Ok(())
}

/// `2dup` ( a b -- a b a b )
fn cmd_dup2(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(a.clone());
    ctx.push(b.clone());
    ctx.push(a);
    ctx.push(b);
    Ok(())
}

/// `nip` ( a b -- b )
fn cmd_nip(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;

    ctx.pop()?;
    ctx.push(b);
    Ok(())
}

/// `over` ( a b -- a b a )
fn cmd_over(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(a.clone());
    ctx.push(b);
    ctx.push(a);
    Ok(())
}

/// `rot` ( a b c -- b c a )
fn cmd_rot(ctx: &mut Context) -> Outcome {
    let c = ctx.pop()?;
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(b);
    ctx.push(c);
    ctx.push(a);
    Ok(())
}

/// `swap` ( a b -- b a )
fn cmd_swap(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(b);
    ctx.push(a);
    Ok(())
}

/// `tuck` ( a b -- b a b )
fn cmd_tuck(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(b.clone());
    ctx.push(a);
    ctx.push(b);
    Ok(())
}

// ----------------------------------------------------------------------
// Type predicates
// ----------------------------------------------------------------------

/// Shared body of the `<type>?` predicates: the inspected value stays on
/// the stack.
fn type_test(ctx: &mut Context, kind: ValueKind) -> Outcome {
    let value = ctx.pop()?;
    let matches = value.is(kind);

    ctx.push(value);
    ctx.push(matches);
    Ok(())
}

/// `array?` ( any -- any boolean )
fn cmd_is_array(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Array)
}

/// `boolean?` ( any -- any boolean )
fn cmd_is_boolean(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Boolean)
}

/// `error?` ( any -- any boolean )
fn cmd_is_error(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Error)
}

/// `null?` ( any -- any boolean )
fn cmd_is_null(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Null)
}

/// `number?` ( any -- any boolean )
fn cmd_is_number(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Number)
}

/// `object?` ( any -- any boolean )
fn cmd_is_object(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Object)
}

/// `quote?` ( any -- any boolean )
fn cmd_is_quote(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Quote)
}

/// `string?` ( any -- any boolean )
fn cmd_is_string(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::String)
}

/// `symbol?` ( any -- any boolean )
fn cmd_is_symbol(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Symbol)
}

/// `word?` ( any -- any boolean )
fn cmd_is_word(ctx: &mut Context) -> Outcome {
    type_test(ctx, ValueKind::Word)
}

/// `typeof` ( any -- any string )
///
/// Push the name of the topmost value's type.
fn cmd_typeof(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;
    let name = value.kind().name();

    ctx.push(value);
    ctx.push(name);
    Ok(())
}

// ----------------------------------------------------------------------
// Dictionaries
// ----------------------------------------------------------------------

fn dictionary_to_object(
    entries: impl Iterator<Item = (Arc<str>, Value)>,
) -> Object {
    Object::from_properties(entries)
}

/// `globals` ( -- object )
///
/// Project the runtime's global dictionary to an object.
fn cmd_globals(ctx: &mut Context) -> Outcome {
    let entries: Vec<_> = ctx
        .runtime()
        .dictionary()
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ctx.push(dictionary_to_object(entries.into_iter()));
    Ok(())
}

/// `locals` ( -- object )
///
/// Project the context's local dictionary to an object.
fn cmd_locals(ctx: &mut Context) -> Outcome {
    let entries: Vec<_> = ctx
        .dictionary()
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ctx.push(dictionary_to_object(entries.into_iter()));
    Ok(())
}

// ----------------------------------------------------------------------
// I/O
// ----------------------------------------------------------------------

/// `write` ( any -- )
///
/// Write the topmost value to the runtime's output. Raises an I/O error
/// when no output is available or the write fails.
fn cmd_write(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;
    let runtime = ctx.runtime().clone();

    match runtime.write(&value) {
        Some(true) => Ok(()),
        Some(false) => Err(ctx.error(ErrorKind::Io, "Writing to output failed.")),
        None => Err(ctx.error(ErrorKind::Io, "No output available.")),
    }
}

/// `read` ( -- any )
///
/// Read one value from the runtime's input. Raises an I/O error when no
/// input is available or the read fails.
fn cmd_read(ctx: &mut Context) -> Outcome {
    let runtime = ctx.runtime().clone();

    match runtime.read() {
        Some(Some(value)) => {
            ctx.push(value);
            Ok(())
        }
        Some(None) => Err(ctx.error(ErrorKind::Io, "Reading from input failed.")),
        None => Err(ctx.error(ErrorKind::Io, "No input available.")),
    }
}

// ----------------------------------------------------------------------
// Utilities
// ----------------------------------------------------------------------

/// `rand` ( -- number )
///
/// Push a random integer.
fn cmd_rand(ctx: &mut Context) -> Outcome {
    ctx.push(rand::random::<i64>());
    Ok(())
}

/// `now` ( -- number )
///
/// Push the number of whole seconds since the Unix epoch.
fn cmd_now(ctx: &mut Context) -> Outcome {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);

    ctx.push(seconds);
    Ok(())
}

// ----------------------------------------------------------------------
// Operators
// ----------------------------------------------------------------------

/// `=` ( any any -- boolean )
fn cmd_eq(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(a == b);
    Ok(())
}

/// `!=` ( any any -- boolean )
fn cmd_ne(ctx: &mut Context) -> Outcome {
    let b = ctx.pop()?;
    let a = ctx.pop()?;

    ctx.push(a != b);
    Ok(())
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

/// `>boolean` ( any -- boolean )
///
/// Null and false convert to false, everything else to true.
fn cmd_to_boolean(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;

    match value {
        Value::Boolean(_) => ctx.push(value),
        Value::Null => ctx.push(false),
        _ => ctx.push(true),
    }

    Ok(())
}

/// `>string` ( any -- string )
///
/// Null converts to an empty string.
fn cmd_to_string(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;

    ctx.push(value.to_string());
    Ok(())
}

/// `>source` ( any -- string )
fn cmd_to_source(ctx: &mut Context) -> Outcome {
    let value = ctx.pop()?;

    ctx.push(value.to_source());
    Ok(())
}

// ----------------------------------------------------------------------
// Error constructors
// ----------------------------------------------------------------------

/// Shared body of the error constructor words: pop an optional message
/// (string or null) and push an error raised at the current position.
fn construct_error(ctx: &mut Context, kind: ErrorKind) -> Outcome {
    let value = ctx.pop()?;
    let message = match &value {
        Value::String(text) => text.to_string(),
        Value::Null => String::new(),
        other => {
            let got = other.kind();

            return Err(ctx.error(
                ErrorKind::Type,
                format!("Expected a string, got {} instead.", got),
            ));
        }
    };
    let position = if ctx.position().line() > 0 {
        Some(ctx.position().clone())
    } else {
        None
    };

    ctx.push(Value::Error(Arc::new(ErrorValue::new(kind, message, position))));
    Ok(())
}

/// `syntax-error` ( string|null -- error )
fn cmd_syntax_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Syntax)
}

/// `reference-error` ( string|null -- error )
fn cmd_reference_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Reference)
}

/// `type-error` ( string|null -- error )
fn cmd_type_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Type)
}

/// `value-error` ( string|null -- error )
fn cmd_value_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Value)
}

/// `range-error` ( string|null -- error )
fn cmd_range_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Range)
}

/// `import-error` ( string|null -- error )
fn cmd_import_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Import)
}

/// `io-error` ( string|null -- error )
fn cmd_io_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Io)
}

/// `unknown-error` ( string|null -- error )
fn cmd_unknown_error(ctx: &mut Context) -> Outcome {
    construct_error(ctx, ErrorKind::Unknown)
}

pub const DEFINITION: DictionaryDefinition = &[
    // Constants.
    ("true", cmd_true),
    ("false", cmd_false),
    ("null", cmd_null),
    ("e", cmd_e),
    ("pi", cmd_pi),
    ("inf", cmd_inf),
    ("-inf", cmd_negative_inf),
    ("nan", cmd_nan),
    // Control flow.
    ("nop", cmd_nop),
    ("if", cmd_if),
    ("if-else", cmd_if_else),
    ("while", cmd_while),
    ("try", cmd_try),
    ("try-else", cmd_try_else),
    // Stack manipulation.
    ("depth", cmd_depth),
    ("clear", cmd_clear),
    ("drop", cmd_drop),
    ("2drop", cmd_drop2),
    ("dup", cmd_dup),
    ("2dup", cmd_dup2),
    ("nip", cmd_nip),
    ("over", cmd_over),
    ("rot", cmd_rot),
    ("swap", cmd_swap),
    ("tuck", cmd_tuck),
    // Type predicates.
    ("array?", cmd_is_array),
    ("boolean?", cmd_is_boolean),
    ("error?", cmd_is_error),
    ("null?", cmd_is_null),
    ("number?", cmd_is_number),
    ("object?", cmd_is_object),
    ("quote?", cmd_is_quote),
    ("string?", cmd_is_string),
    ("symbol?", cmd_is_symbol),
    ("word?", cmd_is_word),
    ("typeof", cmd_typeof),
    // Iteration words double as globals so that programs can keep the
    // receiver below the quote; see the combinators module.
    ("for-each", combinators::cmd_for_each),
    ("map", combinators::cmd_map),
    ("filter", combinators::cmd_filter),
    ("reduce", combinators::cmd_reduce),
    ("times", combinators::cmd_times),
    // Dictionaries.
    ("globals", cmd_globals),
    ("locals", cmd_locals),
    // I/O.
    ("write", cmd_write),
    ("read", cmd_read),
    // Utilities.
    ("rand", cmd_rand),
    ("now", cmd_now),
    // Operators.
    ("=", cmd_eq),
    ("!=", cmd_ne),
    // Conversions.
    (">boolean", cmd_to_boolean),
    (">string", cmd_to_string),
    (">source", cmd_to_source),
    // Error constructors.
    ("syntax-error", cmd_syntax_error),
    ("reference-error", cmd_reference_error),
    ("type-error", cmd_type_error),
    ("value-error", cmd_value_error),
    ("range-error", cmd_range_error),
    ("import-error", cmd_import_error),
    ("io-error", cmd_io_error),
    ("unknown-error", cmd_unknown_error),
];
