//! Record schemas.
//!
//! A [`RecordSchema`] is the ordered list of [`FieldDef`]s that makes up the
//! static side of a record. It is the only place external field names are
//! configured: types declare a default through [`StaticSchema`], and callers
//! can pass an adjusted copy to any `*_with` operation.

use crate::{error::Result, Error, FieldDef, FieldName};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Field layout of a static record type `S`.
pub struct RecordSchema<S> {
    fields: Vec<FieldDef<S>>,
    index: HashMap<FieldName, usize>,
}

impl<S> RecordSchema<S> {
    /// Create a schema from field definitions, kept in declaration order.
    pub fn new(fields: Vec<FieldDef<S>>) -> Self {
        let mut schema = Self {
            fields,
            index: HashMap::new(),
        };
        schema.reindex();
        schema
    }

    /// Add a field to the schema.
    pub fn add_field(&mut self, field: FieldDef<S>) -> &mut Self {
        self.index
            .entry(field.name().to_string())
            .or_insert(self.fields.len());
        self.fields.push(field);
        self
    }

    /// Builder-style method to add a field.
    pub fn with_field(mut self, field: FieldDef<S>) -> Self {
        self.add_field(field);
        self
    }

    /// Change the external name of a field.
    pub fn rename(&mut self, from: &str, to: impl Into<FieldName>) -> Result<&mut Self> {
        let position = *self
            .index
            .get(from)
            .ok_or_else(|| Error::UnknownField(from.to_string()))?;

        self.fields[position].set_name(to.into());
        self.reindex();
        Ok(self)
    }

    /// Builder-style method to rename a field.
    pub fn with_alias(mut self, from: &str, to: impl Into<FieldName>) -> Result<Self> {
        self.rename(from, to)?;
        Ok(self)
    }

    /// Get a field definition by external name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef<S>> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Check whether `name` is claimed by a field of the schema.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDef<S>] {
        &self.fields
    }

    /// External field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDef::name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check that every field has a distinct, non-empty external name.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.fields.len());

        for field in &self.fields {
            if field.name().is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "field of type {} has an empty name",
                    field.expected_type()
                )));
            }
            if !seen.insert(field.name()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate field name '{}'",
                    field.name()
                )));
            }
        }

        Ok(())
    }

    // First definition wins lookups; duplicates are reported by `validate`.
    fn reindex(&mut self) {
        self.index.clear();
        for (i, field) in self.fields.iter().enumerate() {
            self.index.entry(field.name().to_string()).or_insert(i);
        }
    }
}

impl<S> Default for RecordSchema<S> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S> fmt::Debug for RecordSchema<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("fields", &self.fields)
            .finish()
    }
}

/// A static record type with a default field layout.
///
/// `Default` supplies the value every field starts from before decoding, so
/// fields missing from the input keep their default.
pub trait StaticSchema: Default + Sized + 'static {
    fn schema() -> RecordSchema<Self>;
}

/// Implement [`StaticSchema`] for a struct from a list of fields.
///
/// Each entry is `kind "externalName" => field`, where `kind` is one of
/// `required`, `optional` or `nullable`.
///
/// ```rust
/// use extrec::{record_schema, StaticSchema};
///
/// #[derive(Debug, Default)]
/// struct Header {
///     operation_id: String,
///     optional: Option<String>,
/// }
///
/// record_schema!(Header {
///     required "operationId" => operation_id,
///     optional "optional" => optional,
/// });
///
/// let schema = Header::schema();
/// assert!(schema.contains("operationId"));
/// assert_eq!(schema.len(), 2);
/// ```
#[macro_export]
macro_rules! record_schema {
    ($ty:ty { $($kind:ident $name:literal => $field:ident),* $(,)? }) => {
        impl $crate::StaticSchema for $ty {
            fn schema() -> $crate::RecordSchema<Self> {
                $crate::RecordSchema::new(vec![
                    $(
                        $crate::FieldDef::$kind(
                            $name,
                            |s: &Self| &s.$field,
                            |s: &mut Self, v| s.$field = v,
                        ),
                    )*
                ])
            }
        }
    };
}
