//! First-class error values.

use std::fmt;

use plorth_core::Position;

/// The fixed set of error kinds. User code distinguishes kinds through the
/// numeric code; kinds are not subclassable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    Syntax,
    Reference,
    Type,
    Value,
    Range,
    Import,
    Io,
    Unknown,
}

impl ErrorKind {
    /// Numeric code exposed to user programs through the `code` word and
    /// the JSON projection.
    pub fn code(self) -> i64 {
        match self {
            ErrorKind::Syntax => 1,
            ErrorKind::Reference => 2,
            ErrorKind::Type => 3,
            ErrorKind::Value => 4,
            ErrorKind::Range => 5,
            ErrorKind::Import => 6,
            ErrorKind::Io => 7,
            ErrorKind::Unknown => 8,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::Reference => "Reference error",
            ErrorKind::Type => "Type error",
            ErrorKind::Value => "Value error",
            ErrorKind::Range => "Range error",
            ErrorKind::Import => "Import error",
            ErrorKind::Io => "I/O error",
            ErrorKind::Unknown => "Unknown error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An error value: kind, message and the position where it was raised.
#[derive(Clone, Debug)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
    position: Option<Position>,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }
}

/// Errors compare by kind and message; the position is not part of the
/// identity.
impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}
