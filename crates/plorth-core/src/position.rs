use std::fmt;
use std::sync::Arc;

/// Location in Plorth source code.
///
/// Lines and columns are 1-based. The file name is shared (`Arc<str>`)
/// because every symbol compiled from a source text carries a copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    file: Arc<str>,
    line: u32,
    column: u32,
}

impl Position {
    pub fn new(file: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Position at the beginning of a named source.
    pub fn start(file: impl Into<Arc<str>>) -> Self {
        Self::new(file, 1, 1)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Advance past one character. A line feed moves to the start of the
    /// next line; every other character, carriage returns included, advances
    /// the column.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
