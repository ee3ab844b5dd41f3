//! Field descriptors.
//!
//! A [`FieldDef`] binds one external field name to an accessor and a mutator
//! on the static type. Values cross between the two sides through
//! `serde_json`, so a field is encoded exactly as the codec would encode it.

use crate::{error::Result, Error, FieldName};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a field is emitted when it holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Always emitted
    Required,
    /// `Option<T>`, omitted when `None`
    Optional,
    /// `Option<T>`, emitted as `null` when `None`
    Nullable,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Required => write!(f, "Required"),
            FieldKind::Optional => write!(f, "Optional"),
            FieldKind::Nullable => write!(f, "Nullable"),
        }
    }
}

type Projector<S> = Box<dyn Fn(&S) -> serde_json::Result<Option<Value>> + Send + Sync>;
type Injector<S> = Box<dyn Fn(&mut S, &Value) -> serde_json::Result<()> + Send + Sync>;

/// Definition of a named field on a static type `S`.
pub struct FieldDef<S> {
    name: FieldName,
    kind: FieldKind,
    expected: &'static str,
    project: Projector<S>,
    inject: Injector<S>,
}

impl<S: 'static> FieldDef<S> {
    /// Create a field that is always emitted.
    pub fn required<T>(name: impl Into<FieldName>, get: fn(&S) -> &T, set: fn(&mut S, T)) -> Self
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        Self {
            name: name.into(),
            kind: FieldKind::Required,
            expected: std::any::type_name::<T>(),
            project: Box::new(move |s: &S| serde_json::to_value(get(s)).map(Some)),
            inject: Box::new(move |s: &mut S, value: &Value| {
                set(s, T::deserialize(value)?);
                Ok(())
            }),
        }
    }

    /// Create an optional field that is left out of the object when `None`.
    pub fn optional<T>(
        name: impl Into<FieldName>,
        get: fn(&S) -> &Option<T>,
        set: fn(&mut S, Option<T>),
    ) -> Self
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        Self {
            name: name.into(),
            kind: FieldKind::Optional,
            expected: std::any::type_name::<Option<T>>(),
            project: Box::new(move |s: &S| get(s).as_ref().map(serde_json::to_value).transpose()),
            inject: Box::new(move |s: &mut S, value: &Value| {
                set(s, Option::<T>::deserialize(value)?);
                Ok(())
            }),
        }
    }

    /// Create an optional field that is written as `null` when `None`.
    pub fn nullable<T>(
        name: impl Into<FieldName>,
        get: fn(&S) -> &Option<T>,
        set: fn(&mut S, Option<T>),
    ) -> Self
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        Self {
            kind: FieldKind::Nullable,
            project: Box::new(move |s: &S| serde_json::to_value(get(s)).map(Some)),
            ..Self::optional(name, get, set)
        }
    }
}

impl<S> FieldDef<S> {
    /// External name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Rust type name the field decodes into.
    pub fn expected_type(&self) -> &'static str {
        self.expected
    }

    pub(crate) fn set_name(&mut self, name: FieldName) {
        self.name = name;
    }

    /// Read the field from `source` as a JSON value.
    ///
    /// Returns `None` for an optional field that holds no value.
    pub fn project(&self, source: &S) -> Result<Option<Value>> {
        (self.project)(source).map_err(|e| Error::Encoding {
            field: self.name.clone(),
            message: e.to_string(),
        })
    }

    /// Decode `value` into the field on `target`.
    ///
    /// `target` is untouched when the value does not fit the field type.
    pub fn inject(&self, target: &mut S, value: &Value) -> Result<()> {
        (self.inject)(target, value).map_err(|_| Error::TypeMismatch {
            field: self.name.clone(),
            expected: self.expected.to_string(),
            got: json_type_name(value).to_string(),
        })
    }
}

impl<S> fmt::Debug for FieldDef<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Int",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
