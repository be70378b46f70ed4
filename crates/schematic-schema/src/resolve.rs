//! # Shape Resolution
//!
//! After a value has passed an alternatives schema, the engine does not
//! say which candidate accepted it. Models need to know, because the
//! matched candidate's declared fields are the fields that get assigned.
//!
//! [`resolve`] re-validates the value against each object-shaped
//! candidate in declaration order and returns the first that accepts it.
//! Candidates that overlap are therefore decided by order: the earlier
//! candidate wins.

use serde_json::Value;

use crate::error::ResolveError;
use crate::schema::{Schema, SchemaShape};

/// Determine which object schema describes `candidate`.
///
/// An object schema resolves to itself without re-validating; the caller
/// has already validated `candidate` against it. An alternatives schema
/// resolves to its first object-shaped candidate that `candidate`
/// validates against. Non-object candidates are skipped.
///
/// # Errors
///
/// Returns `ResolveError::SchemaKind` if `schema` is neither an object
/// nor an alternatives schema, and `ResolveError::Unresolvable` if no
/// object-shaped candidate accepts `candidate`.
pub fn resolve<'s>(schema: &'s Schema, candidate: &Value) -> Result<&'s Schema, ResolveError> {
    match schema.describe() {
        SchemaShape::Object { .. } => Ok(schema),
        SchemaShape::Alternatives { candidates } => {
            let matched = candidates
                .iter()
                .enumerate()
                .filter(|(_, option)| matches!(option.describe(), SchemaShape::Object { .. }))
                .find(|(_, option)| option.is_valid(candidate));

            match matched {
                Some((index, option)) => {
                    tracing::trace!(index, fields = option.field_names().len(), "alternatives candidate matched");
                    Ok(option)
                }
                None => Err(ResolveError::Unresolvable {
                    candidates: candidates.len(),
                }),
            }
        }
        SchemaShape::Other { kind } => Err(ResolveError::SchemaKind { kind: kind.clone() }),
    }
}
