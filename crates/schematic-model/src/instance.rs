//! # Model Instances
//!
//! An [`Instance`] is the populated record a model construction produces:
//! one [`FieldValue`] per field of the matched schema, in declaration
//! order, plus (for open-shape models only) the undeclared properties.
//!
//! Concrete model types wrap an `Instance` and expose typed accessors
//! over it; see [`Model`](crate::Model).

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::Model;

/// The value assigned to one declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The property was not provided.
    Absent,
    /// The property as provided, uncast. Includes `null` and other falsy
    /// values on dependency fields.
    Raw(Value),
    /// A nested model instance cast from the property.
    Model(Instance),
    /// Element-wise result of casting an array property.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether the property was not provided.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Whether the property was provided as `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Raw(Value::Null))
    }

    /// The uncast property, if this value was stored as provided.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            FieldValue::Raw(v) => Some(v),
            _ => None,
        }
    }

    /// The property as a string, if it was stored uncast as one.
    pub fn as_str(&self) -> Option<&str> {
        self.as_raw().and_then(Value::as_str)
    }

    /// The property as an `i64`, if it was stored uncast as one.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_raw().and_then(Value::as_i64)
    }

    /// The property as an `f64`, if it was stored uncast as a number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_raw().and_then(Value::as_f64)
    }

    /// The property as a boolean, if it was stored uncast as one.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_raw().and_then(Value::as_bool)
    }

    /// The nested instance, if the property was cast.
    pub fn as_model(&self) -> Option<&Instance> {
        match self {
            FieldValue::Model(instance) => Some(instance),
            _ => None,
        }
    }

    /// The element-wise results, if an array property was cast.
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a nested instance into its typed wrapper.
    pub fn to_model<M: Model>(&self) -> Option<M> {
        self.as_model().cloned().and_then(Instance::into_model::<M>)
    }

    /// Convert every nested instance of a list into typed wrappers.
    ///
    /// Returns `None` unless this is a list whose every element is an
    /// instance of `M`.
    pub fn to_models<M: Model>(&self) -> Option<Vec<M>> {
        self.as_list()?.iter().map(FieldValue::to_model::<M>).collect()
    }

    /// JSON rendering; nested instances render as their field objects and
    /// an absent value renders as `null`.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::Absent => Value::Null,
            FieldValue::Raw(v) => v.clone(),
            FieldValue::Model(instance) => instance.to_value(),
            FieldValue::List(items) => Value::Array(items.iter().map(FieldValue::to_value).collect()),
        }
    }
}

/// A validated, fully populated model record.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    model: String,
    fields: Vec<(String, FieldValue)>,
    extras: Map<String, Value>,
}

impl Instance {
    pub(crate) fn new(model: String, fields: Vec<(String, FieldValue)>, extras: Map<String, Value>) -> Self {
        Self {
            model,
            fields,
            extras,
        }
    }

    /// Name of the model type that built this instance.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether this instance was built by `M`.
    pub fn is<M: Model>(&self) -> bool {
        self.model == M::NAME
    }

    /// Value of a declared field; `None` if the field is not declared by
    /// the matched schema.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, value)| value)
    }

    /// Whether the matched schema declares `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Declared field names, in assignment order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Declared fields and their values, in assignment order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Undeclared properties kept by an open-shape model. Always empty for
    /// closed models.
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }

    /// Convert into the typed wrapper of `M` if this instance was built by `M`.
    pub fn into_model<M: Model>(self) -> Option<M> {
        if self.is::<M>() {
            Some(M::from_instance(self))
        } else {
            None
        }
    }

    /// JSON object of every provided field followed by any extras.
    /// Absent fields are omitted.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.fields {
            if !value.is_absent() {
                object.insert(name.clone(), value.to_value());
            }
        }
        for (name, value) in &self.extras {
            object.insert(name.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
