//! The Plorth execution core.
//!
//! This crate provides everything between source text and a running
//! program:
//! - The ten-variant value tree with equality, display/source/JSON forms
//!   and prototype retrieval
//! - The runtime: prototypes, global dictionary, I/O handles
//! - The context: data stack, local dictionary, error slot, position
//! - The evaluator/executor pair and the compiler
//!
//! Embedding is a four-step affair: construct a [`Runtime`] from dictionary
//! definitions (the standard library crate supplies the full set), wrap it
//! in an `Arc`, create a [`Context`], then [`Context::compile`] and
//! [`Context::exec`] programs against it.

mod compile;
mod context;
mod eval;
mod exec;
pub mod io;
mod runtime;
pub mod value;

pub use context::{Caught, Context, Outcome};
pub use io::{BufferOutput, Input, Output, QueueInput};
pub use runtime::{Definitions, Dictionary, DictionaryDefinition, NativeWord, Runtime};
pub use value::{
    ErrorKind, ErrorValue, NativeCallback, Object, Quote, Symbol, Value, ValueKind, PROTO_KEY,
};
