//! Field constraint fragments for [`ObjectSchema`](crate::ObjectSchema).
//!
//! Each helper returns a plain JSON Schema fragment, so hand-written
//! `json!` constraints and these helpers mix freely.

use serde_json::{json, Value};

use crate::schema::Schema;

/// Any string.
pub fn string() -> Value {
    json!({ "type": "string" })
}

/// A hyphenated UUID string.
pub fn uuid() -> Value {
    json!({ "type": "string", "format": "uuid" })
}

/// Any JSON number.
pub fn number() -> Value {
    json!({ "type": "number" })
}

/// An integral number.
pub fn integer() -> Value {
    json!({ "type": "integer" })
}

/// `true` or `false`.
pub fn boolean() -> Value {
    json!({ "type": "boolean" })
}

/// Exactly one of the given values.
pub fn one_of_values<I, V>(values: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let options: Vec<Value> = values.into_iter().map(Into::into).collect();
    json!({ "enum": options })
}

/// The constraint, or `null`.
pub fn nullable(constraint: Value) -> Value {
    json!({ "anyOf": [constraint, { "type": "null" }] })
}

/// An array whose every item satisfies the constraint.
pub fn array_of(constraint: Value) -> Value {
    json!({ "type": "array", "items": constraint })
}

/// The full definition of another schema, embedded as a field constraint.
pub fn nested(schema: &Schema) -> Value {
    schema.definition().clone()
}
