//! # Construction Engine
//!
//! Validate, resolve, assign. [`ModelType::construct`] is the one routine
//! every model shares:
//!
//! 1. validate the raw properties against the model's schema, failing
//!    with a [`ValidationError`] before anything is assigned;
//! 2. resolve which object schema matched (see
//!    [`schematic_schema::resolve`]);
//! 3. derive a value for every field that schema declares, in order,
//!    casting dependency fields into nested models;
//! 4. assemble the [`Instance`].
//!
//! ## Casting
//!
//! A dependency field is cast only when its value is truthy. `null`,
//! `false`, `0` and `""` are stored as provided. Arrays are cast
//! element-wise with the same rule, preserving length and order.
//!
//! Falsy non-null values on dependency fields are stored uncast and
//! logged at `warn`.

use schematic_schema::resolve;
use serde_json::{Map, Value};

use crate::error::{ModelError, ValidationError};
use crate::instance::{FieldValue, Instance};
use crate::model::{Dependency, ModelType};

impl ModelType {
    /// Validate `props` and build a populated instance of this model.
    ///
    /// # Errors
    ///
    /// - `ModelError::Validation` if `props` fail this model's schema, or a
    ///   nested model's schema during casting.
    /// - `ModelError::Resolve` if the schema is not object-shaped or no
    ///   alternatives candidate can be matched. This is a declaration bug.
    pub fn construct(&self, props: &Value) -> Result<Instance, ModelError> {
        if let Err(violations) = self.schema.validate(props) {
            tracing::debug!(model = %self.name, violations = violations.len(), "model properties failed validation");
            return Err(ValidationError::new(self.name.clone(), violations, props.clone()).into());
        }

        let matched = resolve(&self.schema, props)?;

        let fields = matched
            .field_names()
            .iter()
            .map(|field| Ok((field.clone(), self.derive(field, props.get(field))?)))
            .collect::<Result<Vec<_>, ModelError>>()?;

        let extras = if self.open_shape {
            undeclared(props, matched.field_names())
        } else {
            Map::new()
        };

        tracing::debug!(model = %self.name, fields = fields.len(), extras = extras.len(), "constructed model instance");
        Ok(Instance::new(self.name.clone(), fields, extras))
    }

    fn derive(&self, field: &str, raw: Option<&Value>) -> Result<FieldValue, ModelError> {
        let Some(raw) = raw else {
            return Ok(FieldValue::Absent);
        };
        let Some(dependency) = self.dependencies.get(field) else {
            return Ok(FieldValue::Raw(raw.clone()));
        };

        match raw {
            Value::Array(items) => items
                .iter()
                .map(|item| self.cast(field, dependency, item))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            _ => self.cast(field, dependency, raw),
        }
    }

    fn cast(&self, field: &str, dependency: &Dependency, raw: &Value) -> Result<FieldValue, ModelError> {
        if is_truthy(raw) {
            return dependency.construct(raw).map(FieldValue::Model);
        }
        if !raw.is_null() {
            tracing::warn!(
                model = %self.name,
                field,
                dependency = dependency.model(),
                value = %raw,
                "falsy value on dependency field stored without casting"
            );
        }
        Ok(FieldValue::Raw(raw.clone()))
    }
}

/// Truthiness of a raw property: everything except `null`, `false`, zero
/// and the empty string. Empty arrays and objects are truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn undeclared(props: &Value, declared: &[String]) -> Map<String, Value> {
    props
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter(|(key, _)| !declared.iter().any(|d| d == *key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}
