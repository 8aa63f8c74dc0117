//! Core types for the Plorth language.
//!
//! This crate provides foundational types used throughout the Plorth parser
//! and runtime:
//! - Source positions (file, line, column)
//! - The number subsystem (int/real tagged union, literal grammar, promotion)
//! - Identifier rules shared by the lexer and symbol conversion

pub mod ident;
pub mod number;
pub mod position;

// Re-export commonly used types at crate root
pub use ident::is_word_char;
pub use number::Number;
pub use position::Position;
