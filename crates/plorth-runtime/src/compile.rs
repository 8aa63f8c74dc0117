//! The compiler: token tree in, value tree out.
//!
//! Maps tokens to values one to one. Array, object and quote tokens become
//! the corresponding value variants, strings and symbols become string and
//! symbol values with positions preserved, and a word declaration becomes
//! its compiled body quote followed by the word value, so that the binding
//! happens at execution time.

use std::sync::Arc;

use plorth_core::Position;
use plorth_parser::{parse, Token, TokenKind};

use crate::context::{Context, Outcome};
use crate::value::{ErrorKind, Object, Quote, Symbol, Value};

impl Context {
    /// Compile source text into a quote value. Syntax errors are stored in
    /// the context's error slot.
    pub fn compile(&mut self, source: &str) -> Outcome<Value> {
        self.compile_at(source, Position::start("<eval>"))
    }

    /// Compile source text that starts at the given position.
    pub fn compile_at(&mut self, source: &str, position: Position) -> Outcome<Value> {
        match parse(source, position) {
            Ok(tokens) => Ok(Value::from(Quote::compiled(compile_tokens(&tokens)))),
            Err(diagnostic) => {
                log::debug!("compile failed: {}", diagnostic);

                let message = if diagnostic.message.is_empty() {
                    "Unknown error.".into()
                } else {
                    diagnostic.message
                };

                Err(self.error_at(ErrorKind::Syntax, message, Some(diagnostic.position)))
            }
        }
    }
}

/// Compile a token sequence. Word declarations expand to two values, so
/// the result may be longer than the input.
fn compile_tokens(tokens: &[Token]) -> Vec<Value> {
    let mut values = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Word { name, body } => {
                let symbol = Symbol::new(name.clone(), Some(token.position().clone()));
                let mut body_values = compile_tokens(body);

                // `: square dup * ;` and `: square ( dup * ) ;` bind the
                // same quote: a body that is exactly one quote literal is
                // bound as-is instead of being wrapped again.
                let bound = if matches!(body_values.as_slice(), [Value::Quote(_)]) {
                    body_values.swap_remove(0)
                } else {
                    Value::from(Quote::compiled(body_values))
                };

                values.push(bound);
                values.push(Value::Word(Arc::new(symbol)));
            }
            _ => values.push(compile_token(token)),
        }
    }

    values
}

/// Compile one token into one value.
fn compile_token(token: &Token) -> Value {
    match token.kind() {
        TokenKind::String(text) => Value::from(text.as_str()),
        TokenKind::Symbol(id) => {
            Value::from(Symbol::new(id.clone(), Some(token.position().clone())))
        }
        TokenKind::Array(elements) => Value::from(compile_tokens(elements)),
        TokenKind::Object(properties) => {
            let mut object = Object::new();

            for (key, value) in properties {
                object.insert(Arc::from(key.as_str()), compile_token(value));
            }

            Value::from(object)
        }
        TokenKind::Quote(children) => Value::from(Quote::compiled(compile_tokens(children))),
        TokenKind::Word { name, .. } => {
            // A word in single-value position (an object property) compiles
            // to the word value alone.
            Value::Word(Arc::new(Symbol::new(
                name.clone(),
                Some(token.position().clone()),
            )))
        }
    }
}
