//! Words of the array prototype.

use plorth_runtime::{Context, DictionaryDefinition, ErrorKind, Outcome, Quote, Value};

use crate::combinators;

/// `length` ( array -- array number )
///
/// Push the number of elements, keeping the array on the stack.
fn cmd_length(ctx: &mut Context) -> Outcome {
    let array = ctx.pop_array()?;
    let length = array.len() as i64;

    ctx.push(Value::Array(array));
    ctx.push(length);
    Ok(())
}

fn flatten_into(elements: &[Value], output: &mut Vec<Value>) {
    for element in elements {
        match element {
            Value::Array(nested) => flatten_into(nested, output),
            other => output.push(other.clone()),
        }
    }
}

/// `>flatten` ( array -- array )
///
/// Recursively inlines nested arrays into a single flat array.
fn cmd_to_flatten(ctx: &mut Context) -> Outcome {
    let array = ctx.pop_array()?;
    let mut result = Vec::with_capacity(array.len());

    flatten_into(&array, &mut result);
    ctx.push(result);
    Ok(())
}

/// `>reverse` ( array -- array )
fn cmd_to_reverse(ctx: &mut Context) -> Outcome {
    let array = ctx.pop_array()?;
    let result: Vec<Value> = array.iter().rev().cloned().collect();

    ctx.push(result);
    Ok(())
}

/// `>quote` ( array -- quote )
///
/// Convert the array into an executable quote.
fn cmd_to_quote(ctx: &mut Context) -> Outcome {
    let array = ctx.pop_array()?;

    ctx.push(Quote::compiled(array.to_vec()));
    Ok(())
}

/// `+` ( array array -- array )
///
/// Concatenate two arrays, earlier push first.
fn cmd_concat(ctx: &mut Context) -> Outcome {
    let b = ctx.pop_array()?;
    let a = ctx.pop_array()?;
    let mut result = Vec::with_capacity(a.len() + b.len());

    result.extend(a.iter().cloned());
    result.extend(b.iter().cloned());
    ctx.push(result);
    Ok(())
}

/// `*` ( number array -- array )
///
/// Repeat the array the given number of times. Zero gives an empty
/// array; a negative count raises a range error.
fn cmd_repeat(ctx: &mut Context) -> Outcome {
    let array = ctx.pop_array()?;
    let count = ctx.pop_number()?.int_value();

    if count < 0 {
        return Err(ctx.error(ErrorKind::Range, "Invalid repeat count."));
    }

    let mut result = Vec::with_capacity(array.len() * count as usize);

    for _ in 0..count {
        result.extend(array.iter().cloned());
    }
    ctx.push(result);
    Ok(())
}

fn contains(haystack: &[Value], needle: &Value) -> bool {
    haystack.iter().any(|value| value == needle)
}

/// `&` ( array array -- array )
///
/// Set intersection: unique elements common to both arrays, ordered as
/// they appear in the topmost operand.
fn cmd_intersect(ctx: &mut Context) -> Outcome {
    let b = ctx.pop_array()?;
    let a = ctx.pop_array()?;
    let mut result: Vec<Value> = Vec::new();

    for element in b.iter() {
        if contains(&a, element) && !contains(&result, element) {
            result.push(element.clone());
        }
    }

    ctx.push(result);
    Ok(())
}

/// `|` ( array array -- array )
///
/// Set union: unique elements of both arrays, topmost operand first.
fn cmd_union(ctx: &mut Context) -> Outcome {
    let b = ctx.pop_array()?;
    let a = ctx.pop_array()?;
    let mut result: Vec<Value> = Vec::new();

    for element in b.iter().chain(a.iter()) {
        if !contains(&result, element) {
            result.push(element.clone());
        }
    }

    ctx.push(result);
    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    // Getters.
    ("length", cmd_length),
    // Iteration.
    ("for-each", combinators::cmd_for_each),
    ("map", combinators::cmd_map),
    ("filter", combinators::cmd_filter),
    ("reduce", combinators::cmd_reduce),
    // Converters.
    (">flatten", cmd_to_flatten),
    (">reverse", cmd_to_reverse),
    (">quote", cmd_to_quote),
    // Operators.
    ("+", cmd_concat),
    ("*", cmd_repeat),
    ("&", cmd_intersect),
    ("|", cmd_union),
];
