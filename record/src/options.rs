//! Decoding options.

use serde::{Deserialize, Serialize};

/// What to do when a recognized field's value does not fit its declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail the whole decode (default)
    #[default]
    Reject,
    /// Leave the field at its default and keep the raw value in the extra map
    Retain,
}

/// Options that control how a flat object is split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeOptions {
    /// Handling of type-mismatched fields
    pub mismatch: MismatchPolicy,
}

impl DecodeOptions {
    /// Options that reject mismatched fields.
    pub fn strict() -> Self {
        Self {
            mismatch: MismatchPolicy::Reject,
        }
    }

    /// Options that keep mismatched values in the extra map.
    pub fn lenient() -> Self {
        Self {
            mismatch: MismatchPolicy::Retain,
        }
    }

    /// Builder-style method to set the mismatch policy.
    pub fn with_mismatch(mut self, mismatch: MismatchPolicy) -> Self {
        self.mismatch = mismatch;
        self
    }
}
