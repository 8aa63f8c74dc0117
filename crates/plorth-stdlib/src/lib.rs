//! The Plorth standard word library.
//!
//! One module per dictionary:
//! - `global`: constants, control flow, stack manipulation, predicates,
//!   conversions, error constructors, I/O
//! - `array`, `boolean`, `error`, `number`, `object`, `quote`, `string`,
//!   `symbol`, `word`: the per-type prototypes
//! - `combinators`: iteration words shared between prototypes and the
//!   global dictionary
//!
//! [`definitions`] assembles the full set; [`runtime`] and
//! [`runtime_with_io`] build a ready-to-use runtime from it, and [`eval`]
//! is the one-call embedding helper:
//!
//! ```
//! let values = plorth_stdlib::eval("1 2 +").unwrap();
//! assert_eq!(values, vec![plorth_runtime::Value::from(3)]);
//! ```

pub mod array;
pub mod boolean;
mod combinators;
pub mod error;
pub mod global;
pub mod number;
pub mod object;
pub mod quote;
pub mod string;
pub mod symbol;
pub mod word;

use std::sync::Arc;

use plorth_runtime::{
    Context, Definitions, ErrorKind, ErrorValue, Input, Output, Runtime, Value,
};

/// The complete standard library definition set.
pub fn definitions() -> Definitions {
    Definitions {
        array: array::DEFINITION,
        boolean: boolean::DEFINITION,
        error: error::DEFINITION,
        number: number::DEFINITION,
        object: object::DEFINITION,
        quote: quote::DEFINITION,
        string: string::DEFINITION,
        symbol: symbol::DEFINITION,
        word: word::DEFINITION,
        global: global::DEFINITION,
    }
}

/// Build a runtime with the standard library and no I/O handles.
pub fn runtime() -> Runtime {
    Runtime::new(&definitions())
}

/// Build a runtime with the standard library and the given I/O handles.
pub fn runtime_with_io(
    input: Option<Box<dyn Input + Send>>,
    output: Option<Box<dyn Output + Send>>,
) -> Runtime {
    Runtime::with_io(&definitions(), input, output)
}

/// Compile and runs source in an existing context. On success the whole
/// stack is returned, bottom to top; on failure the error value that was
/// left in the context's error slot.
pub fn eval_in(context: &mut Context, source: &str) -> Result<Vec<Value>, Arc<ErrorValue>> {
    let executed = context.compile(source).and_then(|compiled| {
        match &compiled {
            Value::Quote(quote) => quote.clone().call(context),
            // compile always yields a quote; anything else would be a
            // runtime bug, not a user error.
            _ => Ok(()),
        }
    });

    match executed {
        Ok(()) => Ok(context.stack().to_vec()),
        Err(_) => Err(context.take_error().unwrap_or_else(|| {
            Arc::new(ErrorValue::new(ErrorKind::Unknown, "Unknown error.", None))
        })),
    }
}

/// Evaluate source in a fresh context over a fresh standard-library
/// runtime.
pub fn eval(source: &str) -> Result<Vec<Value>, Arc<ErrorValue>> {
    let mut context = Context::new(Arc::new(runtime()));

    eval_in(&mut context, source)
}
