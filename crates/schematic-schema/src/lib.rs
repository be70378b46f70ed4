//! # schematic-schema — Schema Engine Adapter & Shape Resolution
//!
//! Wraps the `jsonschema` crate in the small capability set that
//! schematic models consume:
//!
//! - build an object schema ([`ObjectSchema`]) from ordered field
//!   constraints,
//! - build an alternatives schema ([`Schema::alternatives`]) from an
//!   ordered list of candidates,
//! - validate a value and report structured [`Violation`]s,
//! - describe a schema's shape ([`Schema::describe`]).
//!
//! On top of that capability sits the [`resolve`] routine, which decides
//! which object-shaped candidate of an alternatives schema actually
//! describes a value.
//!
//! ## Crate Policy
//!
//! - Schemas are immutable once built and cheap to clone (`Arc`-backed).
//! - No validator logic lives here: every constraint is evaluated by
//!   `jsonschema`. This crate only classifies and reports.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod constraint;
pub mod error;
pub mod options;
pub mod resolve;
pub mod schema;
pub mod violation;

pub use error::{ResolveError, SchemaError};
pub use options::{SchemaDraft, SchemaOptions};
pub use resolve::resolve;
pub use schema::{ObjectSchema, Schema, SchemaShape};
pub use violation::{ValidationViolations, Violation};
