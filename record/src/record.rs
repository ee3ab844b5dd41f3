//! The extensible record container.

use crate::{
    error::Result, field::json_type_name, merge, DecodeOptions, Error, Object, RecordSchema,
    StaticSchema,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A statically typed value plus the fields its type does not model.
///
/// Encodes as one flat JSON object. Fields of `S` take precedence over extra
/// entries of the same name, and decoding moves every key `S` claims out of
/// the extra map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensibleRecord<S> {
    /// The typed portion
    pub fields: S,
    /// Fields not modeled by `S`
    pub extra: Object,
}

impl<S> ExtensibleRecord<S> {
    /// Create a record. A missing extra map starts out empty.
    pub fn new(fields: S, extra: Option<Object>) -> Self {
        Self {
            fields,
            extra: extra.unwrap_or_default(),
        }
    }

    /// Create a record with no extra fields.
    pub fn from_static(fields: S) -> Self {
        Self::new(fields, None)
    }

    /// Create a record with the given extra fields.
    pub fn with_extra(fields: S, extra: Object) -> Self {
        Self::new(fields, Some(extra))
    }

    pub fn fields(&self) -> &S {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut S {
        &mut self.fields
    }

    pub fn extra(&self) -> &Object {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut Object {
        &mut self.extra
    }

    /// Get an extra field by name.
    pub fn get_extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Set an extra field, returning the previous value.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.extra.insert(key.into(), value)
    }

    /// Remove an extra field.
    pub fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    pub fn into_parts(self) -> (S, Object) {
        (self.fields, self.extra)
    }

    /// Flatten using an explicit schema.
    pub fn to_object_with(&self, schema: &RecordSchema<S>) -> Result<Object> {
        merge::merge(schema, &self.fields, &self.extra)
    }
}

impl<S: Default> ExtensibleRecord<S> {
    /// Split a flat object using an explicit schema and options.
    pub fn from_object_with(
        flat: Object,
        schema: &RecordSchema<S>,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let (fields, extra) = merge::split(schema, flat, options)?;
        Ok(Self { fields, extra })
    }

    /// Split any JSON value using an explicit schema and options.
    ///
    /// Fails with [`Error::NotAnObject`] unless `value` is an object.
    pub fn from_value_with(
        value: Value,
        schema: &RecordSchema<S>,
        options: &DecodeOptions,
    ) -> Result<Self> {
        match value {
            Value::Object(flat) => Self::from_object_with(flat, schema, options),
            other => Err(Error::NotAnObject(json_type_name(&other).to_string())),
        }
    }

    /// Parse JSON text using an explicit schema and options.
    pub fn from_json_str_with(
        json: &str,
        schema: &RecordSchema<S>,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value_with(value, schema, options)
    }
}

impl<S: StaticSchema> ExtensibleRecord<S> {
    /// Flatten into one object, static fields winning over extra entries.
    pub fn to_object(&self) -> Result<Object> {
        self.to_object_with(&S::schema())
    }

    /// Split a flat object with the type's schema and default options.
    pub fn from_object(flat: Object) -> Result<Self> {
        Self::from_object_with(flat, &S::schema(), &DecodeOptions::default())
    }

    pub fn to_value(&self) -> Result<Value> {
        self.to_object().map(Value::Object)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_with(value, &S::schema(), &DecodeOptions::default())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_object()?)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_object()?)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with(json, &S::schema(), &DecodeOptions::default())
    }
}

impl<S> From<S> for ExtensibleRecord<S> {
    fn from(fields: S) -> Self {
        Self::from_static(fields)
    }
}

impl<S: StaticSchema> Serialize for ExtensibleRecord<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let object = self.to_object().map_err(serde::ser::Error::custom)?;
        object.serialize(serializer)
    }
}

impl<'de, S: StaticSchema> Deserialize<'de> for ExtensibleRecord<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
