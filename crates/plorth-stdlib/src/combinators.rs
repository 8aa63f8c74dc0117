//! Iteration words shared between the prototypes and the global
//! dictionary.
//!
//! A combinator takes a receiver (an array, or a count for `times`) and a
//! quote. Name resolution goes through the prototype of the topmost value,
//! so `(2 *) [1 2 3] map` dispatches through the array prototype, while
//! the receiver-first spelling `[1 2 3] (2 *) map` leaves the quote on
//! top. These words therefore accept the pair in either stacking order
//! and are registered both on the receiver's prototype and in the global
//! dictionary.

use std::sync::Arc;

use plorth_core::Number;
use plorth_runtime::{Context, ErrorKind, Outcome, Quote, Value};

/// Pop a quote/array pair, whichever of the two is on top.
fn pop_quote_and_array(ctx: &mut Context) -> Outcome<(Arc<Quote>, Arc<[Value]>)> {
    if matches!(ctx.peek(), Some(Value::Quote(_))) {
        let quote = ctx.pop_quote()?;
        let array = ctx.pop_array()?;

        Ok((quote, array))
    } else {
        let array = ctx.pop_array()?;
        let quote = ctx.pop_quote()?;

        Ok((quote, array))
    }
}

/// Pop a quote/number pair, whichever of the two is on top.
fn pop_quote_and_number(ctx: &mut Context) -> Outcome<(Arc<Quote>, Number)> {
    if matches!(ctx.peek(), Some(Value::Quote(_))) {
        let quote = ctx.pop_quote()?;
        let number = ctx.pop_number()?;

        Ok((quote, number))
    } else {
        let number = ctx.pop_number()?;
        let quote = ctx.pop_quote()?;

        Ok((quote, number))
    }
}

/// `for-each` ( array quote -- )
///
/// Call the quote once for every element of the array.
pub fn cmd_for_each(ctx: &mut Context) -> Outcome {
    let (quote, array) = pop_quote_and_array(ctx)?;

    for element in array.iter() {
        ctx.push(element.clone());
        quote.call(ctx)?;
    }

    Ok(())
}

/// `map` ( array quote -- array )
///
/// Call the quote once for every element and collects the results into a
/// new array.
pub fn cmd_map(ctx: &mut Context) -> Outcome {
    let (quote, array) = pop_quote_and_array(ctx)?;
    let mut result = Vec::with_capacity(array.len());

    for element in array.iter() {
        ctx.push(element.clone());
        quote.call(ctx)?;
        result.push(ctx.pop()?);
    }

    ctx.push(result);
    Ok(())
}

/// `filter` ( array quote -- array )
///
/// Keep the elements for which the quote leaves true.
pub fn cmd_filter(ctx: &mut Context) -> Outcome {
    let (quote, array) = pop_quote_and_array(ctx)?;
    let mut result = Vec::new();

    for element in array.iter() {
        ctx.push(element.clone());
        quote.call(ctx)?;
        if ctx.pop_boolean()? {
            result.push(element.clone());
        }
    }

    ctx.push(result);
    Ok(())
}

/// `reduce` ( array quote -- any )
///
/// Fold the array with the quote, seeding the accumulator with the first
/// element. Reducing an empty array raises a range error.
pub fn cmd_reduce(ctx: &mut Context) -> Outcome {
    let (quote, array) = pop_quote_and_array(ctx)?;

    let Some(first) = array.first() else {
        return Err(ctx.error(ErrorKind::Range, "Cannot reduce empty array."));
    };
    let mut accumulator = first.clone();

    for element in &array[1..] {
        ctx.push(accumulator);
        ctx.push(element.clone());
        quote.call(ctx)?;
        accumulator = ctx.pop()?;
    }

    ctx.push(accumulator);
    Ok(())
}

/// `times` ( number quote -- )
///
/// Call the quote the given number of times. A negative count behaves
/// like its absolute value.
pub fn cmd_times(ctx: &mut Context) -> Outcome {
    let (quote, number) = pop_quote_and_number(ctx)?;
    let mut count = number.int_value().unsigned_abs();

    while count > 0 {
        count -= 1;
        quote.call(ctx)?;
    }

    Ok(())
}
