//! The recursive-descent parser.
//!
//! Operates over Unicode scalar values with one character of lookahead
//! (two at the `(*` comment ambiguity), tracking line and column as it
//! goes.

use plorth_core::{is_word_char, Position};

use crate::ast::{Token, TokenKind};
use crate::error::ParseError;

/// Parse source text into a list of tokens, starting at the given
/// position.
pub fn parse(source: &str, position: Position) -> Result<Vec<Token>, ParseError> {
    let mut parser = Parser {
        rest: source,
        position,
    };
    let mut tokens = Vec::new();

    while let Some(token) = parser.parse_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

struct Parser<'a> {
    rest: &'a str,
    position: Position,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let rest = self.rest;
        let c = rest.chars().next()?;

        self.rest = &rest[c.len_utf8()..];
        self.position.advance(c);
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.position.clone())
    }

    /// Skip whitespace, `#` line comments and `(* … *)` block comments.
    /// Block comments do not nest.
    fn skip_blank(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('#') => {
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('(') if self.peek_second() == Some('*') => {
                    let start = self.position.clone();

                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some(')') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(ParseError::new("Unterminated block comment.", start));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Parse the next token, or `None` at the end of input.
    fn parse_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_blank()?;

        let position = self.position.clone();
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let kind = match c {
            '"' => self.parse_string()?,
            '[' => self.parse_array()?,
            '{' => self.parse_object()?,
            '(' => self.parse_quote()?,
            ':' => self.parse_word()?,
            ')' | ']' | '}' | ';' | ',' => {
                return Err(self.error(format!("Unexpected `{}'.", c)));
            }
            _ => TokenKind::Symbol(self.take_word_chars()),
        };

        Ok(Some(Token::new(kind, position)))
    }

    /// Consume a maximal run of word characters.
    fn take_word_chars(&mut self) -> String {
        let mut id = String::new();

        while let Some(c) = self.peek() {
            if !is_word_char(c) {
                break;
            }
            id.push(c);
            self.advance();
        }

        id
    }

    fn parse_string(&mut self) -> Result<TokenKind, ParseError> {
        Ok(TokenKind::String(self.parse_string_literal()?))
    }

    fn parse_string_literal(&mut self) -> Result<String, ParseError> {
        let start = self.position.clone();
        let mut value = String::new();

        self.advance(); // consume the opening quote
        loop {
            match self.advance() {
                Some('"') => return Ok(value),
                Some('\\') => value.push(self.parse_escape()?),
                Some(c) => value.push(c),
                None => {
                    return Err(ParseError::new(
                        "Unterminated string; Missing terminating `\"'.",
                        start,
                    ));
                }
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ParseError> {
        let position = self.position.clone();

        match self.advance() {
            Some('b') => Ok('\u{8}'),
            Some('t') => Ok('\t'),
            Some('n') => Ok('\n'),
            Some('f') => Ok('\u{c}'),
            Some('r') => Ok('\r'),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('u') => {
                let mut code = 0u32;

                for _ in 0..4 {
                    let digit = self
                        .advance()
                        .and_then(|c| c.to_digit(16))
                        .ok_or_else(|| ParseError::new("Invalid escape sequence.", position.clone()))?;
                    code = (code << 4) | digit;
                }
                char::from_u32(code)
                    .ok_or_else(|| ParseError::new("Invalid escape sequence.", position))
            }
            _ => Err(ParseError::new("Invalid escape sequence.", position)),
        }
    }

    fn parse_array(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.position.clone();
        let mut elements = Vec::new();

        self.advance(); // consume `[`
        loop {
            self.skip_blank()?;
            match self.peek() {
                Some(']') => {
                    self.advance();
                    return Ok(TokenKind::Array(elements));
                }
                Some(_) => {
                    let element = self
                        .parse_token()?
                        .ok_or_else(|| unterminated("array", ']', start.clone()))?;

                    elements.push(element);
                    self.eat_separator()?;
                }
                None => return Err(unterminated("array", ']', start)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.position.clone();
        let mut properties = Vec::new();

        self.advance(); // consume `{`
        loop {
            self.skip_blank()?;
            match self.peek() {
                Some('}') => {
                    self.advance();
                    return Ok(TokenKind::Object(properties));
                }
                Some('"') => {
                    let key = self.parse_string_literal()?;

                    self.skip_blank()?;
                    if self.peek() != Some(':') {
                        return Err(self.error("Missing `:' after object key."));
                    }
                    self.advance();

                    self.skip_blank()?;
                    let value = self
                        .parse_token()?
                        .ok_or_else(|| unterminated("object", '}', start.clone()))?;

                    properties.push((key, value));
                    self.eat_separator()?;
                }
                Some(c) => {
                    return Err(self.error(format!("Unexpected `{}'; Missing object key.", c)));
                }
                None => return Err(unterminated("object", '}', start)),
            }
        }
    }

    fn parse_quote(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.position.clone();
        let mut children = Vec::new();

        self.advance(); // consume `(`
        loop {
            self.skip_blank()?;
            match self.peek() {
                Some(')') => {
                    self.advance();
                    return Ok(TokenKind::Quote(children));
                }
                Some(_) => {
                    let child = self
                        .parse_token()?
                        .ok_or_else(|| unterminated("quote", ')', start.clone()))?;

                    children.push(child);
                }
                None => return Err(unterminated("quote", ')', start)),
            }
        }
    }

    fn parse_word(&mut self) -> Result<TokenKind, ParseError> {
        let start = self.position.clone();
        let mut body = Vec::new();

        self.advance(); // consume `:`
        self.skip_blank()?;

        let name = match self.peek() {
            Some(c) if is_word_char(c) => self.take_word_chars(),
            _ => return Err(self.error("Missing word name after `:'.")),
        };

        loop {
            self.skip_blank()?;
            match self.peek() {
                Some(';') => {
                    self.advance();
                    return Ok(TokenKind::Word { name, body });
                }
                Some(_) => {
                    let token = self
                        .parse_token()?
                        .ok_or_else(|| unterminated("word declaration", ';', start.clone()))?;

                    body.push(token);
                }
                None => return Err(unterminated("word declaration", ';', start)),
            }
        }
    }

    /// Consume at most one comma after an array element or object
    /// property. Commas are optional separators; a trailing comma before
    /// the closing bracket is also fine.
    fn eat_separator(&mut self) -> Result<(), ParseError> {
        self.skip_blank()?;
        if self.peek() == Some(',') {
            self.advance();
        }

        Ok(())
    }
}

fn unterminated(what: &str, close: char, position: Position) -> ParseError {
    ParseError::new(
        format!("Unterminated {}; Missing `{}'.", what, close),
        position,
    )
}
