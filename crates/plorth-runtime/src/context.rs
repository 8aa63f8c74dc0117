//! Execution context: data stack, local dictionary, error slot, position.

use std::sync::Arc;

use plorth_core::{Number, Position};

use crate::runtime::{Dictionary, Runtime};
use crate::value::{ErrorKind, ErrorValue, Object, Quote, Symbol, Value, ValueKind};

/// Marker for an interrupted operation. The error value lives in the
/// context's error slot; callers propagate the interruption with `?`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Caught;

/// Result type of every interpreter operation.
pub type Outcome<T = ()> = Result<T, Caught>;

/// Per-execution state. A context is single-owner and never shared
/// between threads.
pub struct Context {
    runtime: Arc<Runtime>,
    stack: Vec<Value>,
    dictionary: Dictionary,
    error: Option<Arc<ErrorValue>>,
    position: Position,
}

impl Context {
    pub fn new(runtime: Arc<Runtime>) -> Self {
        Self {
            runtime,
            stack: Vec::new(),
            dictionary: Dictionary::new(),
            error: None,
            position: Position::new("", 0, 0),
        }
    }

    pub fn runtime(&self) -> &Arc<Runtime> {
        &self.runtime
    }

    // ------------------------------------------------------------------
    // Stack
    // ------------------------------------------------------------------

    /// The data stack, bottom to top.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Topmost value, if any.
    pub fn peek(&self) -> Option<&Value> {
        self.stack.last()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.stack.push(value.into());
    }

    /// Pop the topmost value. An empty stack raises a range error.
    pub fn pop(&mut self) -> Outcome<Value> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_boolean(&mut self) -> Outcome<bool> {
        match self.stack.last() {
            Some(Value::Boolean(value)) => {
                let value = *value;

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Boolean, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_number(&mut self) -> Outcome<Number> {
        match self.stack.last() {
            Some(Value::Number(value)) => {
                let value = *value;

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Number, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_string(&mut self) -> Outcome<Arc<str>> {
        match self.stack.last() {
            Some(Value::String(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::String, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_array(&mut self) -> Outcome<Arc<[Value]>> {
        match self.stack.last() {
            Some(Value::Array(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Array, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_object(&mut self) -> Outcome<Arc<Object>> {
        match self.stack.last() {
            Some(Value::Object(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Object, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_quote(&mut self) -> Outcome<Arc<Quote>> {
        match self.stack.last() {
            Some(Value::Quote(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Quote, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_symbol(&mut self) -> Outcome<Arc<Symbol>> {
        match self.stack.last() {
            Some(Value::Symbol(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Symbol, top.kind())),
            None => Err(self.underflow()),
        }
    }

    /// Pop a word, returning the symbol it wraps.
    pub fn pop_word(&mut self) -> Outcome<Arc<Symbol>> {
        match self.stack.last() {
            Some(Value::Word(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Word, top.kind())),
            None => Err(self.underflow()),
        }
    }

    pub fn pop_error(&mut self) -> Outcome<Arc<ErrorValue>> {
        match self.stack.last() {
            Some(Value::Error(value)) => {
                let value = value.clone();

                self.stack.pop();
                Ok(value)
            }
            Some(top) => Err(self.type_mismatch(ValueKind::Error, top.kind())),
            None => Err(self.underflow()),
        }
    }

    fn underflow(&mut self) -> Caught {
        self.error(ErrorKind::Range, "Stack underflow.")
    }

    fn type_mismatch(&mut self, expected: ValueKind, got: ValueKind) -> Caught {
        self.error(
            ErrorKind::Type,
            format!("Expected {}, got {} instead.", expected, got),
        )
    }

    // ------------------------------------------------------------------
    // Local dictionary
    // ------------------------------------------------------------------

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Bind a value in the local dictionary.
    pub fn define(&mut self, name: impl Into<Arc<str>>, value: Value) {
        self.dictionary.insert(name.into(), value);
    }

    /// Remove a local binding; returns the value if one existed.
    pub fn undefine(&mut self, name: &str) -> Option<Value> {
        self.dictionary.remove(name)
    }

    // ------------------------------------------------------------------
    // Error slot
    // ------------------------------------------------------------------

    /// Store an error at the current source position and return the
    /// interruption marker, so that words can `return Err(ctx.error(…))`.
    pub fn error(&mut self, kind: ErrorKind, message: impl Into<String>) -> Caught {
        let position = if self.position.line() > 0 {
            Some(self.position.clone())
        } else {
            None
        };

        self.store_error(kind, message, position)
    }

    /// Store an error at an explicit position, falling back to the
    /// current position when none is given.
    pub fn error_at(
        &mut self,
        kind: ErrorKind,
        message: impl Into<String>,
        position: Option<Position>,
    ) -> Caught {
        match position {
            Some(position) => self.store_error(kind, message, Some(position)),
            None => self.error(kind, message),
        }
    }

    fn store_error(
        &mut self,
        kind: ErrorKind,
        message: impl Into<String>,
        position: Option<Position>,
    ) -> Caught {
        self.error = Some(Arc::new(ErrorValue::new(kind, message, position)));
        Caught
    }

    /// Install an existing error value, as the `throw` word does.
    pub fn throw(&mut self, error: Arc<ErrorValue>) -> Caught {
        self.error = Some(error);
        Caught
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn current_error(&self) -> Option<&Arc<ErrorValue>> {
        self.error.as_ref()
    }

    /// Take the current error out of the slot, clearing it. Only the
    /// `try` family of words does this.
    pub fn take_error(&mut self) -> Option<Arc<ErrorValue>> {
        self.error.take()
    }

    /// Fail when the error slot is occupied.
    pub(crate) fn guard(&self) -> Outcome {
        if self.error.is_some() {
            Err(Caught)
        } else {
            Ok(())
        }
    }

    // ------------------------------------------------------------------
    // Source position
    // ------------------------------------------------------------------

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
