//! Words of the object prototype.
//!
//! Objects are immutable; `!` returns a new object instead of mutating
//! the receiver.

use std::sync::Arc;

use plorth_runtime::{Context, DictionaryDefinition, ErrorKind, Outcome, Value};

/// `keys` ( object -- object array )
///
/// Push the object's own property names in insertion order.
fn cmd_keys(ctx: &mut Context) -> Outcome {
    let object = ctx.pop_object()?;
    let keys: Vec<Value> = object
        .keys()
        .map(|key| Value::from(key.as_ref()))
        .collect();

    ctx.push(Value::Object(object));
    ctx.push(keys);
    Ok(())
}

/// `values` ( object -- object array )
///
/// Push the object's own property values in insertion order.
fn cmd_values(ctx: &mut Context) -> Outcome {
    let object = ctx.pop_object()?;
    let values: Vec<Value> = object.values().cloned().collect();

    ctx.push(Value::Object(object));
    ctx.push(values);
    Ok(())
}

/// `has?` ( string object -- object boolean )
///
/// Test whether the object, or anything on its prototype chain, carries
/// the property.
fn cmd_has(ctx: &mut Context) -> Outcome {
    let object = ctx.pop_object()?;
    let key = ctx.pop_string()?;
    let found = object.has(ctx.runtime(), &key);

    ctx.push(Value::Object(object));
    ctx.push(found);
    Ok(())
}

/// `@` ( string object -- object any )
///
/// Retrieve a property through the prototype chain. A missing property
/// raises a reference error.
fn cmd_get(ctx: &mut Context) -> Outcome {
    let object = ctx.pop_object()?;
    let key = ctx.pop_string()?;
    let found = object.property(ctx.runtime(), &key);

    match found {
        Some(value) => {
            ctx.push(Value::Object(object));
            ctx.push(value);
            Ok(())
        }
        None => Err(ctx.error(
            ErrorKind::Reference,
            format!("No such property: `{}'", key),
        )),
    }
}

/// `!` ( any string object -- object )
///
/// Return a copy of the object with the property set.
fn cmd_set(ctx: &mut Context) -> Outcome {
    let object = ctx.pop_object()?;
    let key = ctx.pop_string()?;
    let value = ctx.pop()?;

    ctx.push(Value::from(object.with_property(Arc::from(key.as_ref()), value)));
    Ok(())
}

pub const DEFINITION: DictionaryDefinition = &[
    ("keys", cmd_keys),
    ("values", cmd_values),
    ("has?", cmd_has),
    ("@", cmd_get),
    ("!", cmd_set),
];
