//! # Error Types
//!
//! Two families:
//!
//! - [`SchemaError`] — a schema definition could not be built or loaded.
//! - [`ResolveError`] — a validated value could not be mapped back onto a
//!   single object-shaped schema. Both variants are configuration bugs in
//!   the schema declaration, never bad user input.

use thiserror::Error;

/// Error while building or loading a schema definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema engine rejected the definition.
    #[error("schema compile error: {reason}")]
    Compile {
        /// Reason reported by the engine.
        reason: String,
    },

    /// An alternatives schema was declared with no candidates.
    #[error("alternatives schema requires at least one candidate")]
    EmptyAlternatives,

    /// A textual schema definition could not be parsed.
    #[error("invalid {format} schema definition: {reason}")]
    Parse {
        /// Source format (`json` or `yaml`).
        format: &'static str,
        /// Parser error message.
        reason: String,
    },
}

/// Error while resolving the concrete object schema for a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The schema is neither an object schema nor an alternatives schema.
    #[error("schema must be an object schema or an alternatives schema, found '{kind}'")]
    SchemaKind {
        /// Kind of the offending schema (e.g. `string`).
        kind: String,
    },

    /// No object-shaped candidate of an alternatives schema matched the value.
    #[error("could not resolve an object schema from {candidates} alternatives candidates")]
    Unresolvable {
        /// Number of candidates that were declared.
        candidates: usize,
    },
}
