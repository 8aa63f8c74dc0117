//! Input and output interfaces.
//!
//! The core interpreter performs no I/O of its own; embedders supply these
//! handles when constructing a runtime and the `read`/`write` words consume
//! them.

use crate::value::Value;

/// Anything the interpreter can read values from.
pub trait Input {
    /// Read one value. `None` signals end of input or an I/O failure.
    fn read(&mut self) -> Option<Value>;
}

/// Anything the interpreter can write values to.
pub trait Output {
    /// Attempt to write a value, returning false on I/O failure.
    fn write(&mut self, value: &Value) -> bool;
}

/// An input that replays a fixed sequence of values. Handy for tests and
/// batch embedding.
#[derive(Default)]
pub struct QueueInput {
    values: std::collections::VecDeque<Value>,
}

impl QueueInput {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl Input for QueueInput {
    fn read(&mut self) -> Option<Value> {
        self.values.pop_front()
    }
}

/// An output that collects written values into a shared buffer.
#[derive(Clone, Default)]
pub struct BufferOutput {
    values: std::sync::Arc<std::sync::Mutex<Vec<Value>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn values(&self) -> Vec<Value> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Output for BufferOutput {
    fn write(&mut self, value: &Value) -> bool {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(value.clone());

        true
    }
}
