//! The evaluator: value in, value out.
//!
//! Evaluation constructs a fresh value by resolving any embedded symbols.
//! It never calls quotes; that is the executor's job.

use std::sync::Arc;

use plorth_core::Number;

use crate::context::{Context, Outcome};
use crate::value::{ErrorKind, Object, Symbol, Value};

impl Context {
    /// Evaluate a value. Arrays and objects are rebuilt with every element
    /// evaluated, symbols resolve to the value they name, words raise a
    /// syntax error and everything else passes through unchanged.
    pub fn eval(&mut self, value: &Value) -> Outcome<Value> {
        match value {
            Value::Array(elements) => {
                let mut result = Vec::with_capacity(elements.len());

                for element in elements.iter() {
                    result.push(self.eval(element)?);
                }

                Ok(Value::from(result))
            }
            Value::Object(object) => {
                let mut result = Object::new();

                for (key, property) in object.iter() {
                    result.insert(key.clone(), self.eval(property)?);
                }

                Ok(Value::from(result))
            }
            Value::Symbol(symbol) => self.eval_symbol(symbol),
            Value::Word(_) => Err(self.error(
                ErrorKind::Syntax,
                "Unexpected word declaration; Missing value.",
            )),
            other => Ok(other.clone()),
        }
    }

    fn eval_symbol(&mut self, symbol: &Arc<Symbol>) -> Outcome<Value> {
        let id = symbol.id();

        match id {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            // Deliberate convenience: `drop` inside a literal evaluates to
            // the value it pops off the stack.
            "drop" => self.pop(),
            _ if Number::is_valid(id) => Ok(Value::from(Number::from_literal(id))),
            _ => {
                let message = format!("Unexpected `{}'; Missing value.", id);
                let position = symbol.position().cloned();

                Err(self.error_at(ErrorKind::Syntax, message, position))
            }
        }
    }
}
