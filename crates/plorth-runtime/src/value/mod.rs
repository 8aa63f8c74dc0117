//! The Plorth value tree.
//!
//! Every datum the interpreter touches is a [`Value`]: a ten-variant sum
//! type with structural equality, three textual renderings (display,
//! source, JSON) and prototype retrieval.

mod error;
mod object;
mod quote;
mod symbol;

use std::fmt;
use std::sync::Arc;

use plorth_core::Number;

pub use error::{ErrorKind, ErrorValue};
pub use object::{Object, PROTO_KEY};
pub use quote::{NativeCallback, Quote};
pub use symbol::Symbol;

use crate::runtime::Runtime;

/// A Plorth value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(Number),
    String(Arc<str>),
    Array(Arc<[Value]>),
    Object(Arc<Object>),
    Error(Arc<ErrorValue>),
    Quote(Arc<Quote>),
    Symbol(Arc<Symbol>),
    /// A word denotes a dictionary binding in source; it wraps the symbol
    /// being bound.
    Word(Arc<Symbol>),
}

/// Type tag of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Error,
    Quote,
    Symbol,
    Word,
}

impl ValueKind {
    /// Textual description used in diagnostics and by `typeof`.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Error => "error",
            ValueKind::Quote => "quote",
            ValueKind::Symbol => "symbol",
            ValueKind::Word => "word",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Error(_) => ValueKind::Error,
            Value::Quote(_) => ValueKind::Quote,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Word(_) => ValueKind::Word,
        }
    }

    pub fn is(&self, kind: ValueKind) -> bool {
        self.kind() == kind
    }

    /// Determine the prototype object of the value. Objects consult their
    /// own `__proto__` property; the remaining types map to the runtime's
    /// per-type prototypes. Null has no prototype.
    pub fn prototype(&self, runtime: &Runtime) -> Option<Arc<Object>> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(runtime.boolean_prototype().clone()),
            Value::Number(_) => Some(runtime.number_prototype().clone()),
            Value::String(_) => Some(runtime.string_prototype().clone()),
            Value::Array(_) => Some(runtime.array_prototype().clone()),
            Value::Object(object) => object.prototype(runtime),
            Value::Error(_) => Some(runtime.error_prototype().clone()),
            Value::Quote(_) => Some(runtime.quote_prototype().clone()),
            Value::Symbol(_) => Some(runtime.symbol_prototype().clone()),
            Value::Word(_) => Some(runtime.word_prototype().clone()),
        }
    }

    /// Source form of the value: a string that re-parses into an equivalent
    /// value tree whenever the value contains no native quotes.
    pub fn to_source(&self) -> String {
        match self {
            Value::Null => "null".into(),
            Value::Boolean(true) => "true".into(),
            Value::Boolean(false) => "false".into(),
            Value::Number(number) => number.to_string(),
            Value::String(text) => format_json_string(text),
            Value::Array(elements) => {
                let sources: Vec<String> = elements.iter().map(Value::to_source).collect();

                format!("[{}]", sources.join(", "))
            }
            Value::Object(object) => {
                let sources: Vec<String> = object
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", format_json_string(key), value.to_source())
                    })
                    .collect();

                format!("{{{}}}", sources.join(", "))
            }
            Value::Error(error) => format!("<{}>", error),
            Value::Quote(quote) => match quote.as_ref() {
                Quote::Compiled(values) => {
                    let sources: Vec<String> = values.iter().map(Value::to_source).collect();

                    format!("({})", sources.join(" "))
                }
                Quote::Native(_) => "(\"native quote\")".into(),
            },
            Value::Symbol(symbol) => symbol.id().into(),
            Value::Word(symbol) => format!(": {} ;", symbol.id()),
        }
    }

    /// JSON projection of the value. Non-finite reals have no JSON number
    /// representation and project as null; a native quote projects as the
    /// string `"native quote"`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(value) => json!(value),
            Value::Number(Number::Int(value)) => json!(value),
            Value::Number(Number::Real(value)) => serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(text) => json!(text.as_ref()),
            Value::Array(elements) => {
                serde_json::Value::Array(elements.iter().map(Value::to_json).collect())
            }
            Value::Object(object) => serde_json::Value::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_json()))
                    .collect(),
            ),
            Value::Error(error) => {
                let mut result = serde_json::Map::new();

                result.insert("code".into(), json!(error.kind().code()));
                result.insert("message".into(), json!(error.message()));
                if let Some(position) = error.position() {
                    result.insert("position".into(), position_to_json(position));
                }

                serde_json::Value::Object(result)
            }
            Value::Quote(quote) => match quote.as_ref() {
                Quote::Compiled(values) => {
                    serde_json::Value::Array(values.iter().map(Value::to_json).collect())
                }
                Quote::Native(_) => json!("native quote"),
            },
            Value::Symbol(symbol) | Value::Word(symbol) => {
                let mut result = serde_json::Map::new();

                result.insert("id".into(), json!(symbol.id()));
                if let Some(position) = symbol.position() {
                    result.insert("position".into(), position_to_json(position));
                }

                serde_json::Value::Object(result)
            }
        }
    }
}

fn position_to_json(position: &plorth_core::Position) -> serde_json::Value {
    serde_json::json!({
        "file": position.file(),
        "line": position.line(),
        "column": position.column(),
    })
}

/// Display renders the human form: null is empty, strings are their text,
/// containers list their contents without quoting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(true) => f.write_str("true"),
            Value::Boolean(false) => f.write_str("false"),
            Value::Number(number) => write!(f, "{}", number),
            Value::String(text) => f.write_str(text),
            Value::Array(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }

                Ok(())
            }
            Value::Object(object) => {
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }

                Ok(())
            }
            Value::Error(error) => write!(f, "{}", error),
            Value::Quote(_) => f.write_str(&self.to_source()),
            Value::Symbol(symbol) | Value::Word(symbol) => f.write_str(symbol.id()),
        }
    }
}

/// Escape text into a JSON string literal, the way string values render
/// in source form and object keys render everywhere.
pub fn format_json_string(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 2);

    result.push('"');
    for c in input.chars() {
        match c {
            '\u{8}' => result.push_str("\\b"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\u{c}' => result.push_str("\\f"),
            '\r' => result.push_str("\\r"),
            '"' | '\\' | '/' => {
                result.push('\\');
                result.push(c);
            }
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');

    result
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Real(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values.into())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(Arc::new(object))
    }
}

impl From<Quote> for Value {
    fn from(quote: Quote) -> Self {
        Value::Quote(Arc::new(quote))
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(Arc::new(symbol))
    }
}

impl From<ErrorValue> for Value {
    fn from(error: ErrorValue) -> Self {
        Value::Error(Arc::new(error))
    }
}
