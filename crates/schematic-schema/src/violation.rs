//! # Structured Violations
//!
//! Converts engine errors into [`Violation`]s carrying the three pieces
//! of information callers report on: a message, the instance path as
//! ordered segments, and a violation-kind tag.
//!
//! ## Kind Tags
//!
//! - `format` failures are tagged `format.<name>` (`format.uuid`,
//!   `format.email`, ...).
//! - Every other failure is tagged with the keyword that failed, taken
//!   from the end of the schema path (`required`, `type`, `anyOf`,
//!   `additionalProperties`, ...).
//!
//! ## Paths
//!
//! Instance paths are JSON Pointers split into segments. A `required`
//! failure is reported at the object that lacks the property, so the
//! missing property name is appended: a missing `uuid` at the root has
//! path `["uuid"]`.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use serde_json::Value;

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable description of the violation.
    pub message: String,
    /// Path to the violating field, one segment per object key or array index.
    pub path: Vec<String>,
    /// Violation-kind tag (see module docs).
    pub kind: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
}

impl Violation {
    pub(crate) fn from_engine(error: &jsonschema::ValidationError<'_>) -> Self {
        let schema_path = error.schema_path.to_string();
        let mut path = pointer_segments(&error.instance_path.to_string());

        let kind = match &error.kind {
            ValidationErrorKind::Format { format } => format!("format.{format}"),
            ValidationErrorKind::Required { property } => {
                path.push(match property {
                    Value::String(name) => name.clone(),
                    other => other.to_string(),
                });
                "required".to_string()
            }
            _ => keyword(&schema_path).to_string(),
        };

        Self {
            message: error.to_string(),
            path,
            kind,
            schema_path,
        }
    }

    /// Path segments joined with `.` (`photos.0.uuid`).
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {} [{}]", self.message, self.kind)
        } else {
            write!(f, "  {}: {} [{}]", self.dotted_path(), self.message, self.kind)
        }
    }
}

/// Ordered, non-empty collection of violations from one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in engine order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Split a JSON Pointer into unescaped segments. The root pointer is empty.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn keyword(schema_path: &str) -> &str {
    match schema_path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "schema",
    }
}
