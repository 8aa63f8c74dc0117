//! Words of the number prototype.

use plorth_core::Number;
use plorth_runtime::{Context, DictionaryDefinition, Outcome, Value};

use crate::combinators;

/// `range` ( number number -- array )
///
/// Build an array of numbers from the first operand (inclusive) up to
/// the second (exclusive).
fn cmd_range(ctx: &mut Context) -> Outcome {
    let limit = ctx.pop_number()?;
    let start = ctx.pop_number()?;
    let mut result = Vec::new();

    if start.is_real() || limit.is_real() {
        let mut current = start.real_value();
        let limit = limit.real_value();

        while current < limit {
            result.push(Value::from(current));
            current += 1.0;
        }
    } else {
        let mut current = start.int_value();
        let limit = limit.int_value();

        while current < limit {
            result.push(Value::from(current));
            current += 1;
        }
    }

    ctx.push(result);
    Ok(())
}

/// Shared body of `+`, `-` and `*`: with `a b op`, `a` is the earlier
/// push. Promotion to a real happens on overflow or when either operand
/// is a real.
fn binary_op(ctx: &mut Context, op: fn(Number, Number) -> Number) -> Outcome {
    let b = ctx.pop_number()?;
    let a = ctx.pop_number()?;

    ctx.push(op(a, b));
    Ok(())
}

/// `+` ( number number -- number )
fn cmd_add(ctx: &mut Context) -> Outcome {
    binary_op(ctx, Number::add)
}

/// `-` ( number number -- number )
fn cmd_sub(ctx: &mut Context) -> Outcome {
    binary_op(ctx, Number::sub)
}

/// `*` ( number number -- number )
fn cmd_mul(ctx: &mut Context) -> Outcome {
    binary_op(ctx, Number::mul)
}

/// `/` ( number number -- number )
///
/// Always divides in the real domain; dividing by zero yields an
/// infinity.
fn cmd_div(ctx: &mut Context) -> Outcome {
    binary_op(ctx, Number::div)
}

/// `%` ( number number -- number )
///
/// Floor modulo: the result takes the sign of the divisor.
fn cmd_mod(ctx: &mut Context) -> Outcome {
    binary_op(ctx, Number::rem)
}

/// Shared body of the bitwise operators, which work on coerced integers.
fn bit_op(ctx: &mut Context, op: fn(i64, i64) -> i64) -> Outcome {
    let b = ctx.pop_number()?.int_value();
    let a = ctx.pop_number()?.int_value();

    ctx.push(op(a, b));
    Ok(())
}

/// `&` ( number number -- number )
fn cmd_bit_and(ctx: &mut Context) -> Outcome {
    bit_op(ctx, |a, b| a & b)
}

/// `|` ( number number -- number )
fn cmd_bit_or(ctx: &mut Context) -> Outcome {
    bit_op(ctx, |a, b| a | b)
}

/// `^` ( number number -- number )
fn cmd_bit_xor(ctx: &mut Context) -> Outcome {
    bit_op(ctx, |a, b| a ^ b)
}

/// `<<` ( number number -- number )
fn cmd_shift_left(ctx: &mut Context) -> Outcome {
    bit_op(ctx, |a, b| a.wrapping_shl(b as u32))
}

/// `>>` ( number number -- number )
fn cmd_shift_right(ctx: &mut Context) -> Outcome {
    bit_op(ctx, |a, b| a.wrapping_shr(b as u32))
}

/// `~` ( number -- number )
///
/// Flip the bits of the coerced integer value.
fn cmd_bit_not(ctx: &mut Context) -> Outcome {
    let a = ctx.pop_number()?.int_value();

    ctx.push(!a);
    Ok(())
}

/// Shared body of the comparison operators: integer comparison unless
/// either operand is a real.
fn compare_op(ctx: &mut Context, int_op: fn(i64, i64) -> bool, real_op: fn(f64, f64) -> bool) -> Outcome {
    let b = ctx.pop_number()?;
    let a = ctx.pop_number()?;

    let result = if a.is_real() || b.is_real() {
        real_op(a.real_value(), b.real_value())
    } else {
        int_op(a.int_value(), b.int_value())
    };

    ctx.push(result);
    Ok(())
}

/// `<` ( number number -- boolean )
fn cmd_lt(ctx: &mut Context) -> Outcome {
    compare_op(ctx, |a, b| a < b, |a, b| a < b)
}

/// `>` ( number number -- boolean )
fn cmd_gt(ctx: &mut Context) -> Outcome {
    compare_op(ctx, |a, b| a > b, |a, b| a > b)
}

/// `<=` ( number number -- boolean )
fn cmd_le(ctx: &mut Context) -> Outcome {
    compare_op(ctx, |a, b| a <= b, |a, b| a <= b)
}

/// `>=` ( number number -- boolean )
fn cmd_ge(ctx: &mut Context) -> Outcome {
    compare_op(ctx, |a, b| a >= b, |a, b| a >= b)
}

pub const DEFINITION: DictionaryDefinition = &[
    ("range", cmd_range),
    ("times", combinators::cmd_times),
    // Arithmetic.
    ("+", cmd_add),
    ("-", cmd_sub),
    ("*", cmd_mul),
    ("/", cmd_div),
    ("%", cmd_mod),
    // Bit operations.
    ("&", cmd_bit_and),
    ("|", cmd_bit_or),
    ("^", cmd_bit_xor),
    ("<<", cmd_shift_left),
    (">>", cmd_shift_right),
    ("~", cmd_bit_not),
    // Comparison.
    ("<", cmd_lt),
    (">", cmd_gt),
    ("<=", cmd_le),
    (">=", cmd_ge),
];
