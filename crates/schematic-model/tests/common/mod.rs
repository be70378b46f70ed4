//! Model types shared by the integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use schematic_model::{Dependency, FieldValue, Instance, Model, ModelType};
use schematic_schema::{constraint, ObjectSchema, Schema};

pub const UUID_A: &str = "b4380823-917d-4e0c-bf9a-aa53fae6ff98";
pub const UUID_B: &str = "0f4a8c52-5d1e-4c7b-9a3e-2b6d8f1e7c90";

fn image_schema() -> Schema {
    ObjectSchema::new()
        .required("uuid", constraint::uuid())
        .field("path", constraint::string())
        .build()
        .expect("image schema")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image(pub Instance);

impl Model for Image {
    const NAME: &'static str = "Image";

    fn model_type() -> &'static ModelType {
        static TYPE: OnceLock<ModelType> = OnceLock::new();
        TYPE.get_or_init(|| {
            ModelType::builder(Self::NAME, image_schema())
                .build()
                .expect("image model")
        })
    }

    fn from_instance(instance: Instance) -> Self {
        Image(instance)
    }
}

impl Image {
    pub fn uuid(&self) -> &str {
        self.0.get("uuid").and_then(FieldValue::as_str).unwrap_or_default()
    }

    pub fn path(&self) -> Option<&str> {
        self.0.get("path").and_then(FieldValue::as_str)
    }
}

/// Requires an avatar shaped like an image.
#[derive(Debug, Clone, PartialEq)]
pub struct User(pub Instance);

impl Model for User {
    const NAME: &'static str = "User";

    fn model_type() -> &'static ModelType {
        static TYPE: OnceLock<ModelType> = OnceLock::new();
        TYPE.get_or_init(|| {
            let schema = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .required("name", constraint::string())
                .required("avatar", constraint::nested(&image_schema()))
                .build()
                .expect("user schema");
            ModelType::builder(Self::NAME, schema)
                .dependency("avatar", Dependency::of::<Image>())
                .build()
                .expect("user model")
        })
    }

    fn from_instance(instance: Instance) -> Self {
        User(instance)
    }
}

impl User {
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(FieldValue::as_str).unwrap_or_default()
    }

    pub fn avatar(&self) -> Option<Image> {
        self.0.get("avatar").and_then(FieldValue::to_model::<Image>)
    }
}

/// Avatar may be null or omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Account(pub Instance);

impl Model for Account {
    const NAME: &'static str = "Account";

    fn model_type() -> &'static ModelType {
        static TYPE: OnceLock<ModelType> = OnceLock::new();
        TYPE.get_or_init(|| {
            let schema = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .field("avatar", constraint::nullable(constraint::nested(&image_schema())))
                .build()
                .expect("account schema");
            ModelType::builder(Self::NAME, schema)
                .dependency("avatar", Dependency::of::<Image>())
                .build()
                .expect("account model")
        })
    }

    fn from_instance(instance: Instance) -> Self {
        Account(instance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAlbum(pub Instance);

impl Model for PhotoAlbum {
    const NAME: &'static str = "PhotoAlbum";

    fn model_type() -> &'static ModelType {
        static TYPE: OnceLock<ModelType> = OnceLock::new();
        TYPE.get_or_init(|| {
            let schema = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .field("title", constraint::string())
                .required("photos", constraint::array_of(constraint::nested(&image_schema())))
                .build()
                .expect("photo album schema");
            ModelType::builder(Self::NAME, schema)
                .dependency("photos", Dependency::of::<Image>())
                .build()
                .expect("photo album model")
        })
    }

    fn from_instance(instance: Instance) -> Self {
        PhotoAlbum(instance)
    }
}

impl PhotoAlbum {
    pub fn photos(&self) -> Option<Vec<Image>> {
        self.0.get("photos").and_then(FieldValue::to_models::<Image>)
    }
}

/// Three accepted shapes, most specific first: full data with an owner,
/// root data only, and a bare reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Car(pub Instance);

impl Model for Car {
    const NAME: &'static str = "Car";

    fn model_type() -> &'static ModelType {
        static TYPE: OnceLock<ModelType> = OnceLock::new();
        TYPE.get_or_init(|| {
            let user = User::model_type().schema();
            let full_data = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .required("make", constraint::string())
                .required("model", constraint::string())
                .required("year", constraint::integer())
                .field("owner", constraint::nested(user))
                .build()
                .expect("full data schema");
            let root_data_only = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .required("make", constraint::string())
                .required("model", constraint::string())
                .build()
                .expect("root data schema");
            let uuid_only = ObjectSchema::new()
                .required("uuid", constraint::uuid())
                .build()
                .expect("uuid only schema");
            let schema = Schema::alternatives([full_data, root_data_only, uuid_only])
                .expect("car schema");
            ModelType::builder(Self::NAME, schema)
                .dependency("owner", Dependency::of::<User>())
                .build()
                .expect("car model")
        })
    }

    fn from_instance(instance: Instance) -> Self {
        Car(instance)
    }
}
