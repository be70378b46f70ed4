//! # schematic-model — Self-Validating Models
//!
//! A model is built from raw JSON properties in one atomic step: the
//! properties are validated against the model's schema, the matching
//! schema branch is resolved, and every field that branch declares is
//! assigned, casting dependency fields into nested models along the way.
//! Construction either returns a fully populated [`Instance`] or fails;
//! no partially assigned instance is ever observable.
//!
//! ## Pieces
//!
//! - [`ModelType`] — class-level declaration: name, [`Schema`], dependency
//!   map, open or closed shape.
//! - [`Dependency`] — factory for a nested model type.
//! - [`Model`] — trait for concrete model types with typed accessors.
//! - [`Instance`] / [`FieldValue`] — the populated record.
//! - [`ValidationError`] / [`ModelError`] — input errors versus
//!   declaration bugs.
//!
//! ## Crate Policy
//!
//! - Construction is pure: no I/O, no shared mutable state. Model types
//!   and their schemas are immutable and shared across threads.
//! - No `panic!()` or `.unwrap()` outside tests.
//!
//! [`Schema`]: schematic_schema::Schema

mod engine;
pub mod error;
pub mod instance;
pub mod model;

pub use error::{ModelError, ValidationError, ViolationDetail};
pub use instance::{FieldValue, Instance};
pub use model::{Dependency, Factory, Model, ModelType, ModelTypeBuilder};
