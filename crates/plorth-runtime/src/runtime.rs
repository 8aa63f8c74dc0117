//! Shared interpreter state: singletons, prototypes and the global
//! dictionary.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::context::{Context, Outcome};
use crate::io::{Input, Output};
use crate::value::{Object, Quote, Value, PROTO_KEY};

/// A dictionary maps identifier text to values, typically quotes.
pub type Dictionary = BTreeMap<Arc<str>, Value>;

/// Native word implementations are plain functions over a context.
pub type NativeWord = fn(&mut Context) -> Outcome;

/// A static table of named native words, the raw material prototypes and
/// the global dictionary are built from.
pub type DictionaryDefinition = &'static [(&'static str, NativeWord)];

/// The complete set of dictionary definitions a runtime is initialized
/// with: one per prototype plus the global dictionary.
#[derive(Clone, Copy, Default)]
pub struct Definitions {
    pub array: DictionaryDefinition,
    pub boolean: DictionaryDefinition,
    pub error: DictionaryDefinition,
    pub number: DictionaryDefinition,
    pub object: DictionaryDefinition,
    pub quote: DictionaryDefinition,
    pub string: DictionaryDefinition,
    pub symbol: DictionaryDefinition,
    pub word: DictionaryDefinition,
    pub global: DictionaryDefinition,
}

/// Shared state for one interpreter instance. A runtime may back any number
/// of contexts as long as its dictionary is not mutated after the contexts
/// are created.
pub struct Runtime {
    input: Option<Mutex<Box<dyn Input + Send>>>,
    output: Option<Mutex<Box<dyn Output + Send>>>,
    dictionary: Dictionary,
    array_prototype: Arc<Object>,
    boolean_prototype: Arc<Object>,
    error_prototype: Arc<Object>,
    number_prototype: Arc<Object>,
    object_prototype: Arc<Object>,
    quote_prototype: Arc<Object>,
    string_prototype: Arc<Object>,
    symbol_prototype: Arc<Object>,
    word_prototype: Arc<Object>,
}

impl Runtime {
    /// Build a runtime without I/O handles.
    pub fn new(definitions: &Definitions) -> Self {
        Self::with_io(definitions, None, None)
    }

    /// Build a runtime with the given I/O handles.
    pub fn with_io(
        definitions: &Definitions,
        input: Option<Box<dyn Input + Send>>,
        output: Option<Box<dyn Output + Send>>,
    ) -> Self {
        let mut dictionary = Dictionary::new();

        for (name, word) in definitions.global {
            dictionary.insert(Arc::from(*name), native_quote(*word));
        }

        // The object prototype is built first: it terminates every chain
        // and every prototype registration quote references it.
        let object_prototype = make_prototype(definitions.object);

        let mut runtime = Self {
            input: input.map(Mutex::new),
            output: output.map(Mutex::new),
            dictionary,
            array_prototype: make_prototype(definitions.array),
            boolean_prototype: make_prototype(definitions.boolean),
            error_prototype: make_prototype(definitions.error),
            number_prototype: make_prototype(definitions.number),
            object_prototype,
            quote_prototype: make_prototype(definitions.quote),
            string_prototype: make_prototype(definitions.string),
            symbol_prototype: make_prototype(definitions.symbol),
            word_prototype: make_prototype(definitions.word),
        };

        runtime.register_prototype("array", runtime.array_prototype.clone());
        runtime.register_prototype("boolean", runtime.boolean_prototype.clone());
        runtime.register_prototype("error", runtime.error_prototype.clone());
        runtime.register_prototype("number", runtime.number_prototype.clone());
        runtime.register_prototype("object", runtime.object_prototype.clone());
        runtime.register_prototype("quote", runtime.quote_prototype.clone());
        runtime.register_prototype("string", runtime.string_prototype.clone());
        runtime.register_prototype("symbol", runtime.symbol_prototype.clone());
        runtime.register_prototype("word", runtime.word_prototype.clone());

        runtime
    }

    /// A runtime with no words at all. Useful for exercising the execution
    /// core in isolation.
    pub fn bare() -> Self {
        Self::new(&Definitions::default())
    }

    /// Register a prototype in the global dictionary under its type name,
    /// as a compiled quote that pushes `{ __proto__: <object prototype>,
    /// prototype: <prototype> }`. This makes the type names usable as
    /// first-class references in user code.
    fn register_prototype(&mut self, name: &str, prototype: Arc<Object>) {
        let reference = Object::from_properties([
            (
                Arc::from(PROTO_KEY),
                Value::Object(self.object_prototype.clone()),
            ),
            (Arc::from("prototype"), Value::Object(prototype)),
        ]);
        let quote = Quote::compiled(vec![Value::from(reference)]);

        self.dictionary.insert(Arc::from(name), Value::from(quote));
    }

    // ------------------------------------------------------------------
    // Dictionary
    // ------------------------------------------------------------------

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Define a global word. Embedders extend the runtime this way before
    /// creating contexts.
    pub fn define(&mut self, name: impl Into<Arc<str>>, value: Value) {
        self.dictionary.insert(name.into(), value);
    }

    /// Define a global native word.
    pub fn define_native(&mut self, name: impl Into<Arc<str>>, word: NativeWord) {
        self.define(name, native_quote(word));
    }

    // ------------------------------------------------------------------
    // Prototypes
    // ------------------------------------------------------------------

    pub fn array_prototype(&self) -> &Arc<Object> {
        &self.array_prototype
    }

    pub fn boolean_prototype(&self) -> &Arc<Object> {
        &self.boolean_prototype
    }

    pub fn error_prototype(&self) -> &Arc<Object> {
        &self.error_prototype
    }

    pub fn number_prototype(&self) -> &Arc<Object> {
        &self.number_prototype
    }

    pub fn object_prototype(&self) -> &Arc<Object> {
        &self.object_prototype
    }

    pub fn quote_prototype(&self) -> &Arc<Object> {
        &self.quote_prototype
    }

    pub fn string_prototype(&self) -> &Arc<Object> {
        &self.string_prototype
    }

    pub fn symbol_prototype(&self) -> &Arc<Object> {
        &self.symbol_prototype
    }

    pub fn word_prototype(&self) -> &Arc<Object> {
        &self.word_prototype
    }

    // ------------------------------------------------------------------
    // I/O
    // ------------------------------------------------------------------

    /// Write a value to the output handle. `None` when the runtime has no
    /// output, otherwise the handle's success flag.
    pub fn write(&self, value: &Value) -> Option<bool> {
        self.output.as_ref().map(|output| {
            output
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .write(value)
        })
    }

    /// Read a value from the input handle. `None` when the runtime has no
    /// input; `Some(None)` when the handle reports failure or end of input.
    pub fn read(&self) -> Option<Option<Value>> {
        self.input.as_ref().map(|input| {
            input
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .read()
        })
    }
}

/// Wrap a native word into a quote value.
fn native_quote(word: NativeWord) -> Value {
    Value::from(Quote::native(word))
}

/// Assemble a prototype object from a dictionary definition: each callback
/// becomes a native quote, and `__proto__` is null so that the chain
/// terminates here (the implicit object-prototype parent applies only when
/// the property is absent).
fn make_prototype(definition: DictionaryDefinition) -> Arc<Object> {
    let mut prototype = Object::new();

    for (name, word) in definition {
        prototype.insert(Arc::from(*name), native_quote(*word));
    }
    prototype.insert(Arc::from(PROTO_KEY), Value::Null);

    Arc::new(prototype)
}
