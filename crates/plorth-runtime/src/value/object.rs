//! Objects: insertion-ordered property maps with prototype inheritance.

use std::sync::Arc;

use crate::runtime::Runtime;
use crate::value::Value;

/// Key of the property that links an object to its prototype.
pub const PROTO_KEY: &str = "__proto__";

/// Upper bound on prototype-chain walks. The direct self-parent case is
/// detected exactly; deeper `__proto__` cycles are malformed input and are
/// cut off here.
const PROTO_CHAIN_LIMIT: usize = 64;

/// An immutable, insertion-ordered mapping from property names to values.
#[derive(Clone, Debug, Default)]
pub struct Object {
    properties: Vec<(Arc<str>, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an object from key/value pairs, keeping the first insertion
    /// position when a key repeats.
    pub fn from_properties(
        properties: impl IntoIterator<Item = (Arc<str>, Value)>,
    ) -> Self {
        let mut object = Self::new();

        for (key, value) in properties {
            object.insert(key, value);
        }

        object
    }

    /// Insert a property, replacing the value in place if the key already
    /// exists.
    pub fn insert(&mut self, key: Arc<str>, value: Value) {
        if let Some(slot) = self
            .properties
            .iter_mut()
            .find(|(existing, _)| **existing == *key)
        {
            slot.1 = value;
        } else {
            self.properties.push((key, value));
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.properties.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Arc<str>> {
        self.properties.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.properties.iter().map(|(_, value)| value)
    }

    /// Look up an own property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(existing, _)| **existing == *key)
            .map(|(_, value)| value)
    }

    /// Test whether the object or anything on its prototype chain carries
    /// the property.
    pub fn has(&self, runtime: &Runtime, key: &str) -> bool {
        self.property(runtime, key).is_some()
    }

    /// Return a copy of this object with one property set.
    pub fn with_property(&self, key: Arc<str>, value: Value) -> Object {
        let mut result = self.clone();

        result.insert(key, value);
        result
    }

    /// Determine the prototype of this object. A `__proto__` property
    /// pointing at an object names the parent explicitly; pointing at
    /// anything else terminates the chain. Without the property the
    /// runtime's object prototype is the implicit parent.
    pub fn prototype(&self, runtime: &Runtime) -> Option<Arc<Object>> {
        match self.get(PROTO_KEY) {
            Some(Value::Object(parent)) => Some(parent.clone()),
            Some(_) => None,
            None => Some(runtime.object_prototype().clone()),
        }
    }

    /// Look up a property through the prototype chain. Direct
    /// self-parenting stops the walk; deeper cycles run into the chain
    /// depth cap.
    pub fn property(&self, runtime: &Runtime, key: &str) -> Option<Value> {
        if let Some(value) = self.get(key) {
            return Some(value.clone());
        }

        let mut previous: *const Object = self;
        let mut current = self.prototype(runtime)?;

        for _ in 0..PROTO_CHAIN_LIMIT {
            if std::ptr::eq(previous, Arc::as_ptr(&current)) {
                return None;
            }
            if let Some(value) = current.get(key) {
                return Some(value.clone());
            }
            previous = Arc::as_ptr(&current);
            let next = current.prototype(runtime)?;
            current = next;
        }

        None
    }
}

/// Objects compare by size and per-key structural equality; property order
/// does not matter.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.properties.len() == other.properties.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(Arc<str>, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, Value)>>(iter: I) -> Self {
        Self::from_properties(iter)
    }
}
