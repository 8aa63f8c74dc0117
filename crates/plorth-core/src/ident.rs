//! Identifier rules shared by the lexer and symbol conversion.

/// Test whether a character may appear inside a symbol. Symbols are maximal
/// runs of word characters: anything that is not whitespace and not one of
/// the structural separators.
pub fn is_word_char(c: char) -> bool {
    !c.is_whitespace()
        && !matches!(
            c,
            '"' | '#' | '(' | ')' | '[' | ']' | '{' | '}' | ':' | ';' | ','
        )
}
