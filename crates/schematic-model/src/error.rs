//! # Error Types
//!
//! [`ValidationError`] is the only error caused by input: the properties
//! handed to a model did not satisfy its schema. Every other
//! [`ModelError`] variant is a defect in a model declaration and should be
//! treated as fatal.

use schematic_schema::{ResolveError, SchemaError, ValidationViolations};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One violation, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationDetail {
    /// Human-readable description.
    pub message: String,
    /// Dot-joined path to the violating field (`photos.1.uuid`).
    pub path: String,
    /// Violation-kind tag (`format.uuid`, `required`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// Constructor properties failed a model's schema.
///
/// Carries the model name, the violations in engine order, the
/// properties exactly as provided, and a ready-to-display message:
///
/// ```text
/// Errors on 1 properties were found while validating properties for model Image.:
/// [
///   {
///     "message": "\"not a uuid\" is not a \"uuid\"",
///     "path": "uuid",
///     "type": "format.uuid"
///   }
/// ]
///
/// Props Provided:
/// {
///   "uuid": "not a uuid"
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    model: String,
    details: Vec<ViolationDetail>,
    props: Value,
    message: String,
}

impl ValidationError {
    /// Build the error for `model` from engine violations.
    pub fn new(model: impl Into<String>, violations: ValidationViolations, props: Value) -> Self {
        let model = model.into();
        let details: Vec<ViolationDetail> = violations
            .into_inner()
            .into_iter()
            .map(|v| ViolationDetail {
                path: v.dotted_path(),
                message: v.message,
                kind: v.kind,
            })
            .collect();

        let message = format!(
            "Errors on {count} properties were found while validating properties for model {model}.:\n{details}\n\nProps Provided:\n{props}",
            count = details.len(),
            details = serde_json::to_string_pretty(&details).unwrap_or_default(),
            props = serde_json::to_string_pretty(&props).unwrap_or_default(),
        );

        Self {
            model,
            details,
            props,
            message,
        }
    }

    /// Name of the model whose schema rejected the properties.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Violations, in the order the engine reported them.
    pub fn details(&self) -> &[ViolationDetail] {
        &self.details
    }

    /// The properties exactly as they were provided.
    pub fn props(&self) -> &Value {
        &self.props
    }

    /// Summary of the violations followed by the pretty-printed properties.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error while declaring or constructing a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Properties failed the model's schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The validated properties could not be mapped onto an object schema.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A schema used by the model could not be built.
    ///
    /// Construction never produces this variant. It lets model declarations
    /// that build their schemas and their `ModelType` in one function use
    /// `?` on both.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A dependency names a field the model's schema never declares.
    #[error("model '{model}' declares a dependency on field '{field}' which its schema does not declare")]
    UndeclaredDependency {
        /// Model being declared.
        model: String,
        /// Field named by the dependency.
        field: String,
    },
}

impl ModelError {
    /// Whether this error was caused by the input rather than the declaration.
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation(_))
    }

    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ModelError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematic_schema::{constraint, ObjectSchema};
    use serde_json::json;

    fn race_car_error(props: Value) -> ValidationError {
        let schema = ObjectSchema::new()
            .required("uuid", constraint::uuid())
            .field("path", constraint::string())
            .build()
            .unwrap();
        let violations = schema.validate(&props).unwrap_err();
        ValidationError::new("RaceCar", violations, props)
    }

    #[test]
    fn test_message_layout() {
        let err = race_car_error(json!({ "uuid": "true" }));
        let detail = &err.details()[0];
        let expected = format!(
            r#"Errors on 1 properties were found while validating properties for model RaceCar.:
[
  {{
    "message": {message},
    "path": "uuid",
    "type": "format.uuid"
  }}
]

Props Provided:
{{
  "uuid": "true"
}}"#,
            message = serde_json::to_string(&detail.message).unwrap(),
        );
        assert_eq!(err.message(), expected);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_exposes_model_details_and_props() {
        let props = json!({ "uuid": "true" });
        let err = race_car_error(props.clone());
        assert_eq!(err.model(), "RaceCar");
        assert_eq!(err.props(), &props);
        assert_eq!(err.details().len(), 1);
        assert_eq!(err.details()[0].path, "uuid");
        assert_eq!(err.details()[0].kind, "format.uuid");
    }

    #[test]
    fn test_detail_serializes_kind_as_type() {
        let detail = ViolationDetail {
            message: "missing".to_string(),
            path: "uuid".to_string(),
            kind: "required".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({ "message": "missing", "path": "uuid", "type": "required" })
        );
    }

    #[test]
    fn test_counts_every_violation() {
        let err = race_car_error(json!({ "path": 4, "color": "red" }));
        assert_eq!(err.details().len(), 3);
        assert!(err.message().starts_with("Errors on 3 properties"));
        let kinds: Vec<&str> = err.details().iter().map(|d| d.kind.as_str()).collect();
        assert!(kinds.contains(&"required"));
        assert!(kinds.contains(&"type"));
        assert!(kinds.contains(&"additionalProperties"));
    }

    fn declare_race_car() -> Result<crate::ModelType, ModelError> {
        let schema = ObjectSchema::new()
            .required("uuid", constraint::uuid())
            .build()?;
        crate::ModelType::builder("RaceCar", schema).build()
    }

    #[test]
    fn test_schema_error_converts_for_declarations() {
        assert_eq!(declare_race_car().unwrap().name(), "RaceCar");

        let err: ModelError = SchemaError::EmptyAlternatives.into();
        assert!(matches!(err, ModelError::Schema(SchemaError::EmptyAlternatives)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_model_error_classification() {
        let err: ModelError = race_car_error(json!({})).into();
        assert!(err.is_validation());
        assert_eq!(err.as_validation().map(|e| e.model()), Some("RaceCar"));

        let err: ModelError = ResolveError::SchemaKind { kind: "string".to_string() }.into();
        assert!(!err.is_validation());
        assert!(err.as_validation().is_none());
    }
}
