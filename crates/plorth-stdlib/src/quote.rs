//! Words of the quote prototype.

use plorth_runtime::{Context, DictionaryDefinition, Outcome};

/// `call` ( quote -- )
///
/// Execute the quote.
fn cmd_call(ctx: &mut Context) -> Outcome {
    let quote = ctx.pop_quote()?;

    quote.call(ctx)
}

pub const DEFINITION: DictionaryDefinition = &[("call", cmd_call)];
