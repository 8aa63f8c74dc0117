//! The executor: side-effecting execution of compiled values.
//!
//! Symbols resolve through four layers (the prototype chain of the current
//! top of stack, the local dictionary, the global dictionary and the number
//! literal fallback) before raising a reference error. Words bind; every
//! other value evaluates and pushes.

use std::sync::Arc;

use plorth_core::Number;

use crate::context::{Caught, Context, Outcome};
use crate::value::{ErrorKind, Symbol, Value};

impl Context {
    /// Execute one value against this context. Once the error slot is
    /// occupied, execution short-circuits until the slot is cleared.
    pub fn exec(&mut self, value: &Value) -> Outcome {
        if self.has_error() {
            return Err(Caught);
        }

        match value {
            Value::Symbol(symbol) => self.exec_symbol(symbol),
            Value::Word(symbol) => {
                let value = self.pop()?;

                self.define(symbol.id(), value);
                Ok(())
            }
            other => {
                let result = self.eval(other)?;

                self.push(result);
                Ok(())
            }
        }
    }

    fn exec_symbol(&mut self, symbol: &Arc<Symbol>) -> Outcome {
        // Track where we are, for diagnostics raised further down.
        if let Some(position) = symbol.position() {
            self.set_position(position.clone());
        }

        let id = symbol.id();

        // Prototype chain of the current top of stack.
        let found = match self.peek() {
            Some(top) => top
                .prototype(self.runtime())
                .and_then(|prototype| prototype.property(self.runtime(), id)),
            None => None,
        };
        if let Some(value) = found {
            return self.call_or_push(value);
        }

        // Local dictionary.
        if let Some(value) = self.dictionary().get(id).cloned() {
            return self.call_or_push(value);
        }

        // Global dictionary.
        if let Some(value) = self.runtime().dictionary().get(id).cloned() {
            return self.call_or_push(value);
        }

        // Number literal fallback.
        if Number::is_valid(id) {
            self.push(Number::from_literal(id));
            return Ok(());
        }

        log::trace!("unresolved symbol `{}'", id);
        let message = format!("Unrecognized word: `{}'", id);
        let position = symbol.position().cloned();

        Err(self.error_at(ErrorKind::Reference, message, position))
    }

    /// Dictionary and prototype hits dispatch the same way: quotes are
    /// called, anything else is pushed.
    fn call_or_push(&mut self, value: Value) -> Outcome {
        if let Value::Quote(quote) = &value {
            return quote.clone().call(self);
        }
        self.push(value);

        Ok(())
    }
}
