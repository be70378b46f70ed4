//! # Model Declarations
//!
//! A [`ModelType`] is the class-level half of a model: its name, its
//! schema, the dependency map saying which fields cast into nested model
//! types, and whether undeclared properties are kept.
//!
//! A [`Dependency`] is a factory, not a type reference: the nested
//! model's name plus a function that constructs it from raw properties.
//! [`Dependency::of`] derives both from a [`Model`] implementation.
//!
//! ## Declaring a model
//!
//! ```
//! use std::sync::OnceLock;
//!
//! use schematic_model::{Instance, Model, ModelType};
//! use schematic_schema::{constraint, ObjectSchema};
//! use serde_json::json;
//!
//! struct Image(Instance);
//!
//! impl Model for Image {
//!     const NAME: &'static str = "Image";
//!
//!     fn model_type() -> &'static ModelType {
//!         static TYPE: OnceLock<ModelType> = OnceLock::new();
//!         TYPE.get_or_init(|| {
//!             let schema = ObjectSchema::new()
//!                 .required("uuid", constraint::uuid())
//!                 .field("path", constraint::string())
//!                 .build()
//!                 .expect("image schema");
//!             ModelType::builder(Self::NAME, schema).build().expect("image model")
//!         })
//!     }
//!
//!     fn from_instance(instance: Instance) -> Self {
//!         Image(instance)
//!     }
//! }
//!
//! let image = Image::new(&json!({ "uuid": "b4380823-917d-4e0c-bf9a-aa53fae6ff98" })).unwrap();
//! assert!(image.0.get("path").unwrap().is_absent());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use schematic_schema::Schema;
use serde_json::Value;

use crate::error::ModelError;
use crate::instance::Instance;

/// Constructs a nested instance from raw properties.
pub type Factory = fn(&Value) -> Result<Instance, ModelError>;

/// Declaration that a field casts into another model type.
#[derive(Clone, Copy)]
pub struct Dependency {
    model: &'static str,
    factory: Factory,
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency").field("model", &self.model).finish()
    }
}

impl Dependency {
    /// Cast into the model type `M`.
    pub fn of<M: Model>() -> Self {
        Self {
            model: M::NAME,
            factory: construct_as::<M>,
        }
    }

    /// Cast through an arbitrary factory, for targets without a `Model` impl.
    pub fn from_factory(model: &'static str, factory: Factory) -> Self {
        Self { model, factory }
    }

    /// Name of the target model type.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Construct the target model from `props`.
    pub fn construct(&self, props: &Value) -> Result<Instance, ModelError> {
        (self.factory)(props)
    }
}

fn construct_as<M: Model>(props: &Value) -> Result<Instance, ModelError> {
    M::model_type().construct(props)
}

/// Class-level declaration of a model.
#[derive(Debug)]
pub struct ModelType {
    pub(crate) name: String,
    pub(crate) schema: Schema,
    pub(crate) dependencies: BTreeMap<String, Dependency>,
    pub(crate) open_shape: bool,
}

impl ModelType {
    /// Start declaring a model named `name` validated by `schema`.
    pub fn builder(name: impl Into<String>, schema: Schema) -> ModelTypeBuilder {
        ModelTypeBuilder {
            name: name.into(),
            schema,
            dependencies: BTreeMap::new(),
            open_shape: false,
        }
    }

    /// Returns the model name reported in errors and recorded on instances.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the schema properties are validated against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The dependency declared for `field`, if any.
    pub fn dependency(&self, field: &str) -> Option<&Dependency> {
        self.dependencies.get(field)
    }

    /// Whether undeclared properties are kept as instance extras.
    pub fn is_open_shape(&self) -> bool {
        self.open_shape
    }
}

/// Builder for [`ModelType`].
#[derive(Debug)]
pub struct ModelTypeBuilder {
    name: String,
    schema: Schema,
    dependencies: BTreeMap<String, Dependency>,
    open_shape: bool,
}

impl ModelTypeBuilder {
    /// Cast `field` through `dependency`. A later declaration for the same
    /// field replaces an earlier one.
    pub fn dependency(mut self, field: impl Into<String>, dependency: Dependency) -> Self {
        self.dependencies.insert(field.into(), dependency);
        self
    }

    /// Keep properties the matched schema does not declare as instance
    /// extras instead of dropping them.
    pub fn open_shape(mut self) -> Self {
        self.open_shape = true;
        self
    }

    /// Finish the declaration.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UndeclaredDependency` if a dependency names a
    /// field that neither the schema nor any of its alternatives declares.
    pub fn build(self) -> Result<ModelType, ModelError> {
        if let Some(field) = self
            .dependencies
            .keys()
            .find(|field| !self.schema.declares_field(field))
        {
            return Err(ModelError::UndeclaredDependency {
                model: self.name,
                field: field.clone(),
            });
        }

        Ok(ModelType {
            name: self.name,
            schema: self.schema,
            dependencies: self.dependencies,
            open_shape: self.open_shape,
        })
    }
}

/// A concrete model type with typed access to its fields.
///
/// Implementors hold the shared [`ModelType`] in a `static` and wrap the
/// constructed [`Instance`].
pub trait Model: Sized {
    /// Model name reported in errors and recorded on instances.
    const NAME: &'static str;

    /// The shared class-level declaration.
    fn model_type() -> &'static ModelType;

    /// Wrap a constructed instance.
    fn from_instance(instance: Instance) -> Self;

    /// Validate `props` and construct the model.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Validation` if `props` fail the schema of this
    /// model or of any nested model.
    fn new(props: &Value) -> Result<Self, ModelError> {
        Self::model_type().construct(props).map(Self::from_instance)
    }
}
