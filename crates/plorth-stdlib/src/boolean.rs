//! Words of the boolean prototype.

use plorth_runtime::{Context, DictionaryDefinition, Outcome};

/// `and` ( boolean boolean -- boolean )
fn cmd_and(ctx: &mut Context) -> Outcome {
    let a = ctx.pop_boolean()?;
    let b = ctx.pop_boolean()?;

    ctx.push(a && b);
    Ok(())
}

/// `or` ( boolean boolean -- boolean )
fn cmd_or(ctx: &mut Context) -> Outcome {
    let a = ctx.pop_boolean()?;
    let b = ctx.pop_boolean()?;

    ctx.push(a || b);
    Ok(())
}

/// `xor` ( boolean boolean -- boolean )
fn cmd_xor(ctx: &mut Context) -> Outcome {
    let a = ctx.pop_boolean()?;
    let b = ctx.pop_boolean()?;

    ctx.push(a != b);
    Ok(())
}

/// `not` ( boolean -- boolean )
fn cmd_not(ctx: &mut Context) -> Outcome {
    let a = ctx.pop_boolean()?;

    ctx.push(!a);
    Ok(())
}

/// `?` ( any any boolean -- any )
///
/// Select between two values: the first when the boolean is true, the
/// second when it is false.
///
///     "greater" "less" 5 6 > ?  #=> "less"
fn cmd_select(ctx: &mut Context) -> Outcome {
    let condition = ctx.pop_boolean()?;
    let false_value = ctx.pop()?;
    let true_value = ctx.pop()?;

    ctx.push(if condition { true_value } else { false_value });
    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    ("and", cmd_and),
    ("or", cmd_or),
    ("xor", cmd_xor),
    ("not", cmd_not),
    ("?", cmd_select),
];
