//! Merging a static record with its extra fields, and splitting them apart.
//!
//! Rules:
//! 1. On merge, every key the static side produces overwrites an extra entry
//!    of the same name. Optional fields holding `None` produce no key.
//! 2. On split, a key claimed by the schema is consumed by the static side
//!    and never copied into the extra map, except when a mismatched value is
//!    retained under [`MismatchPolicy::Retain`].
//! 3. Every other key lands in the extra map unchanged.

use crate::{error::Result, DecodeOptions, MismatchPolicy, Object, RecordSchema};

/// Flatten a static value and its extra fields into one object.
pub fn merge<S>(schema: &RecordSchema<S>, value: &S, extra: &Object) -> Result<Object> {
    schema.validate()?;

    let mut merged = extra.clone();
    for field in schema.fields() {
        let Some(projected) = field.project(value)? else {
            continue;
        };
        if merged.insert(field.name().to_string(), projected).is_some() {
            tracing::debug!(field = %field.name(), "static field shadows extra entry");
        }
    }

    Ok(merged)
}

/// Split a flat object into a static value and the fields it does not claim.
pub fn split<S: Default>(
    schema: &RecordSchema<S>,
    flat: Object,
    options: &DecodeOptions,
) -> Result<(S, Object)> {
    schema.validate()?;

    let mut value = S::default();
    let mut extra = Object::new();
    let mut recognized = 0usize;

    for (key, raw) in flat {
        let Some(field) = schema.get_field(&key) else {
            extra.insert(key, raw);
            continue;
        };

        match field.inject(&mut value, &raw) {
            Ok(()) => recognized += 1,
            Err(err) => match options.mismatch {
                MismatchPolicy::Reject => return Err(err),
                MismatchPolicy::Retain => {
                    tracing::warn!(
                        field = %key,
                        error = %err,
                        "keeping mismatched value as extra field"
                    );
                    extra.insert(key, raw);
                }
            },
        }
    }

    tracing::debug!(recognized, residual = extra.len(), "split flat object");
    Ok((value, extra))
}
