//! Symbols: identifiers as first-class values.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use plorth_core::Position;

/// An identifier together with the position where it appeared in source
/// code. The hash of the identifier text is computed once on first use;
/// symbols are shared between contexts, so the cache is a `OnceLock`.
#[derive(Debug)]
pub struct Symbol {
    id: String,
    position: Option<Position>,
    hash: OnceLock<u64>,
}

impl Symbol {
    pub fn new(id: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            id: id.into(),
            position,
            hash: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Hash of the identifier text, memoized on first access.
    pub fn hash_value(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.id.hash(&mut hasher);
            hasher.finish()
        })
    }
}

impl Clone for Symbol {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            position: self.position.clone(),
            hash: self.hash.clone(),
        }
    }
}

/// Symbols compare by identifier text; positions are not part of the
/// identity.
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
