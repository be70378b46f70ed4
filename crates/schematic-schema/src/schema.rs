//! # Schemas
//!
//! A [`Schema`] pairs a JSON Schema definition with its compiled
//! `jsonschema::Validator` and a classification of its shape:
//!
//! - **object** — `"type": "object"` (or a `properties` map); the ordered
//!   property names are its declared fields. A definition classified by its
//!   `properties` alone gets `"type": "object"` added, so non-object values
//!   fail validation. An `anyOf` next to the object keywords is an ordinary
//!   constraint on that object.
//! - **alternatives** — a top-level `anyOf` on a root that is not itself an
//!   object; each entry is parsed into a candidate [`Schema`], in
//!   declaration order.
//! - **other** — anything else (`string`, `number`, ...), named by its
//!   `type` keyword.
//!
//! Field order is the definition's key order (`serde_json` is built with
//! `preserve_order`), so the order fields are declared in is the order
//! models assign them in.
//!
//! ## Thread Safety
//!
//! `Schema` is `Send + Sync` and clones share one compiled validator.

use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::{json, Map, Value};

use crate::constraint;
use crate::error::SchemaError;
use crate::options::SchemaOptions;
use crate::violation::{ValidationViolations, Violation};

/// The shape of a schema, as needed to enumerate what it declares.
#[derive(Debug, Clone)]
pub enum SchemaShape {
    /// An object schema and its declared field names, in order.
    Object {
        /// Declared field names.
        fields: Vec<String>,
    },
    /// An alternatives schema and its candidates, in order.
    Alternatives {
        /// Candidate schemas, most specific first.
        candidates: Vec<Schema>,
    },
    /// Any other schema kind.
    Other {
        /// The schema's `type` keyword, or `any` when absent.
        kind: String,
    },
}

struct SchemaInner {
    definition: Value,
    shape: SchemaShape,
    validator: Validator,
}

/// An immutable, compiled schema.
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind())
            .field("definition", &self.inner.definition)
            .finish()
    }
}

impl Schema {
    fn assemble(definition: Value, shape: SchemaShape, validator: Validator) -> Self {
        Self {
            inner: Arc::new(SchemaInner {
                definition,
                shape,
                validator,
            }),
        }
    }

    /// Build a schema from a raw JSON Schema definition with default options.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the engine rejects the definition
    /// and `SchemaError::EmptyAlternatives` for an empty top-level `anyOf`.
    pub fn from_value(definition: Value) -> Result<Self, SchemaError> {
        Self::from_value_with(definition, &SchemaOptions::default())
    }

    /// Build a schema from a raw JSON Schema definition.
    ///
    /// Alternatives candidates are compiled individually with the same
    /// options so each can be validated on its own during resolution.
    pub fn from_value_with(mut definition: Value, options: &SchemaOptions) -> Result<Self, SchemaError> {
        let shape = classify(&definition, options)?;
        if matches!(shape, SchemaShape::Object { .. }) {
            if let Some(root) = definition.as_object_mut() {
                root.entry("type").or_insert_with(|| json!("object"));
            }
        }
        let validator = options.compile(&definition)?;
        Ok(Self::assemble(definition, shape, validator))
    }

    /// Parse and build a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let definition: Value = serde_json::from_str(text).map_err(|e| SchemaError::Parse {
            format: "json",
            reason: e.to_string(),
        })?;
        Self::from_value(definition)
    }

    /// Parse and build a schema from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, SchemaError> {
        let definition: Value = serde_yaml::from_str(text).map_err(|e| SchemaError::Parse {
            format: "yaml",
            reason: e.to_string(),
        })?;
        Self::from_value(definition)
    }

    /// Build an alternatives schema over `candidates` with default options.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyAlternatives` if no candidate is given.
    pub fn alternatives<I>(candidates: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = Schema>,
    {
        Self::alternatives_with(candidates, &SchemaOptions::default())
    }

    /// Build an alternatives schema over `candidates`.
    ///
    /// A value matches if it matches at least one candidate. Candidates are
    /// tried in the given order during resolution, so list the most
    /// specific first.
    pub fn alternatives_with<I>(candidates: I, options: &SchemaOptions) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = Schema>,
    {
        let candidates: Vec<Schema> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(SchemaError::EmptyAlternatives);
        }
        let any_of: Vec<Value> = candidates.iter().map(|c| c.definition().clone()).collect();
        let definition = json!({ "anyOf": any_of });
        let validator = options.compile(&definition)?;
        Ok(Self::assemble(
            definition,
            SchemaShape::Alternatives { candidates },
            validator,
        ))
    }

    /// The raw JSON Schema definition.
    pub fn definition(&self) -> &Value {
        &self.inner.definition
    }

    /// Describe this schema's shape.
    pub fn describe(&self) -> &SchemaShape {
        &self.inner.shape
    }

    /// `object`, `alternatives`, or the kind of any other schema.
    pub fn kind(&self) -> &str {
        match &self.inner.shape {
            SchemaShape::Object { .. } => "object",
            SchemaShape::Alternatives { .. } => "alternatives",
            SchemaShape::Other { kind } => kind,
        }
    }

    /// Declared field names of an object schema; empty for other kinds.
    pub fn field_names(&self) -> &[String] {
        match &self.inner.shape {
            SchemaShape::Object { fields } => fields,
            _ => &[],
        }
    }

    /// Whether the schema, or any of its alternatives candidates, declares `field`.
    pub fn declares_field(&self, field: &str) -> bool {
        match &self.inner.shape {
            SchemaShape::Object { fields } => fields.iter().any(|f| f == field),
            SchemaShape::Alternatives { candidates } => {
                candidates.iter().any(|c| c.declares_field(field))
            }
            SchemaShape::Other { .. } => false,
        }
    }

    /// Validate `instance`, collecting every violation the engine reports.
    ///
    /// # Errors
    ///
    /// Returns the ordered, non-empty list of violations on failure.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationViolations> {
        let violations: Vec<Violation> = self
            .inner
            .validator
            .iter_errors(instance)
            .map(|e| Violation::from_engine(&e))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations::new(violations))
        }
    }

    /// Validate `instance` without collecting violations.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.inner.validator.is_valid(instance)
    }
}

fn classify(definition: &Value, options: &SchemaOptions) -> Result<SchemaShape, SchemaError> {
    let properties = definition.get("properties").and_then(Value::as_object);
    let typed_object = definition.get("type").and_then(Value::as_str) == Some("object");
    if typed_object || properties.is_some() {
        let fields = properties
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        return Ok(SchemaShape::Object { fields });
    }

    if let Some(any_of) = definition.get("anyOf").and_then(Value::as_array) {
        if any_of.is_empty() {
            return Err(SchemaError::EmptyAlternatives);
        }
        let candidates = any_of
            .iter()
            .map(|c| Schema::from_value_with(c.clone(), options))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(SchemaShape::Alternatives { candidates });
    }

    let kind = match definition.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        _ => "any".to_string(),
    };
    Ok(SchemaShape::Other { kind })
}

/// Builder for object schemas.
///
/// Unknown keys are rejected unless [`allow_unknown`](Self::allow_unknown)
/// is called, so a value carrying extra properties does not match.
///
/// ```
/// use schematic_schema::{constraint, ObjectSchema};
///
/// let image = ObjectSchema::new()
///     .required("uuid", constraint::uuid())
///     .field("path", constraint::string())
///     .build()
///     .unwrap();
/// assert_eq!(image.field_names(), ["uuid", "path"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    properties: Map<String, Value>,
    required: Vec<String>,
    allow_unknown: bool,
}

impl ObjectSchema {
    /// An empty object schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an optional field.
    pub fn field(mut self, name: impl Into<String>, constraint: Value) -> Self {
        let name = name.into();
        self.required.retain(|r| *r != name);
        self.properties.insert(name, constraint);
        self
    }

    /// Declare a required field.
    pub fn required(mut self, name: impl Into<String>, constraint: Value) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name.clone());
        }
        self.properties.insert(name, constraint);
        self
    }

    /// Declare an optional field shaped like another schema.
    pub fn nested(self, name: impl Into<String>, schema: &Schema) -> Self {
        self.field(name, constraint::nested(schema))
    }

    /// Accept properties the schema does not declare.
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// The JSON Schema definition this builder describes.
    pub fn definition(&self) -> Value {
        let mut definition = Map::new();
        definition.insert("type".to_string(), json!("object"));
        definition.insert("properties".to_string(), Value::Object(self.properties.clone()));
        if !self.required.is_empty() {
            definition.insert("required".to_string(), json!(self.required));
        }
        definition.insert("additionalProperties".to_string(), json!(self.allow_unknown));
        Value::Object(definition)
    }

    /// Compile with default options.
    pub fn build(self) -> Result<Schema, SchemaError> {
        self.build_with(&SchemaOptions::default())
    }

    /// Compile with the given options.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if a field constraint is not a valid
    /// schema fragment.
    pub fn build_with(self, options: &SchemaOptions) -> Result<Schema, SchemaError> {
        let definition = self.definition();
        let validator = options.compile(&definition)?;
        let fields = self.properties.keys().cloned().collect();
        Ok(Schema::assemble(
            definition,
            SchemaShape::Object { fields },
            validator,
        ))
    }
}
