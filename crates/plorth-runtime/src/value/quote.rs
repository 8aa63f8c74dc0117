//! Quotes: first-class executable code.

use std::fmt;
use std::sync::Arc;

use crate::context::{Context, Outcome};
use crate::value::Value;

/// Callback type backing native quotes.
pub type NativeCallback = Arc<dyn Fn(&mut Context) -> Outcome + Send + Sync>;

/// A quote is either a native callback or a compiled sequence of values.
#[derive(Clone)]
pub enum Quote {
    Native(NativeCallback),
    Compiled(Vec<Value>),
}

impl Quote {
    /// Wrap a callback into a native quote.
    pub fn native(callback: impl Fn(&mut Context) -> Outcome + Send + Sync + 'static) -> Self {
        Quote::Native(Arc::new(callback))
    }

    /// Wrap a sequence of values into a compiled quote.
    pub fn compiled(values: Vec<Value>) -> Self {
        Quote::Compiled(values)
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Quote::Native(_))
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, Quote::Compiled(_))
    }

    /// Execute the quote against a context. A native quote succeeds iff
    /// the error slot is still empty after its callback; a compiled quote
    /// executes its elements in order, stopping at the first failure.
    pub fn call(&self, context: &mut Context) -> Outcome {
        match self {
            Quote::Native(callback) => {
                callback.as_ref()(context)?;
                context.guard()
            }
            Quote::Compiled(values) => {
                for value in values {
                    context.exec(value)?;
                }

                Ok(())
            }
        }
    }
}

/// Native quotes compare by callback identity (callbacks cannot be compared
/// structurally); compiled quotes compare element-wise. A native and a
/// compiled quote are never equal.
impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Quote::Native(a), Quote::Native(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const u8, Arc::as_ptr(b) as *const u8)
            }
            (Quote::Compiled(a), Quote::Compiled(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Native(_) => f.write_str("Quote::Native(..)"),
            Quote::Compiled(values) => f.debug_tuple("Quote::Compiled").field(values).finish(),
        }
    }
}
