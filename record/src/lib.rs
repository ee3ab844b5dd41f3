//! # extrec
//!
//! Typed records that keep the JSON fields their schema does not know about.
//!
//! API schemas evolve on the server side: a response may carry fields the
//! client's types were never taught. An [`ExtensibleRecord`] holds the fields
//! a client does model in a plain Rust struct and everything else in an open
//! JSON map, and encodes both as a single flat object.
//!
//! ## Design Principles
//!
//! - **No IO**: records are pure values, the codec is `serde_json`
//! - **Stable round trips**: decode then encode reproduces the input object
//! - **No duplication**: a key claimed by the static type never also sits in
//!   the extra map
//! - **Explicit configuration**: field names live in a per-type schema that
//!   callers may override per call, never in global state
//!
//! ## Core Concepts
//!
//! ### Field descriptors
//!
//! Rust has no runtime reflection, so each static type lists its fields as
//! [`FieldDef`]s: an external name plus an accessor and a mutator. The list
//! is a [`RecordSchema`]. Types provide a default one through
//! [`StaticSchema`], usually via the [`record_schema!`] macro.
//!
//! ### Merge and split
//!
//! - [`ExtensibleRecord::to_object`] starts from the extra map and writes
//!   every static field over it, so static fields win collisions.
//! - [`ExtensibleRecord::from_object`] decodes the keys the schema claims
//!   into the static type and keeps the rest, untouched, as extra fields.
//!
//! A recognized value of the wrong type fails the decode unless
//! [`MismatchPolicy::Retain`] is selected in [`DecodeOptions`].
//!
//! ## Quick Start
//!
//! ```rust
//! use extrec::{record_schema, ExtensibleRecord};
//! use serde_json::json;
//!
//! // 1. Describe the fields the client knows about
//! #[derive(Debug, Default, PartialEq)]
//! struct Header {
//!     operation_id: String,
//!     optional: Option<String>,
//! }
//!
//! record_schema!(Header {
//!     required "operationId" => operation_id,
//!     optional "optional" => optional,
//! });
//!
//! // 2. Decode an object with an unknown field
//! let record: ExtensibleRecord<Header> =
//!     serde_json::from_value(json!({"operationId": "op-1", "hello": "world"})).unwrap();
//!
//! assert_eq!(record.fields.operation_id, "op-1");
//! assert_eq!(record.get_extra("hello"), Some(&json!("world")));
//!
//! // 3. Encode it back to the same object
//! assert_eq!(
//!     serde_json::to_value(&record).unwrap(),
//!     json!({"operationId": "op-1", "hello": "world"})
//! );
//! ```
//!
//! ## Logging
//!
//! Shadowed extra entries and split summaries are reported through `tracing`
//! at `debug`; values kept under [`MismatchPolicy::Retain`] at `warn`. No
//! subscriber is installed by this crate.

pub mod error;
pub mod field;
pub mod merge;
pub mod options;
pub mod record;
pub mod schema;

// Re-export main types at crate root
pub use error::Error;
pub use field::{FieldDef, FieldKind};
pub use merge::{merge, split};
pub use options::{DecodeOptions, MismatchPolicy};
pub use record::ExtensibleRecord;
pub use schema::{RecordSchema, StaticSchema};

/// Type aliases for clarity
pub type FieldName = String;
pub type Object = serde_json::Map<String, serde_json::Value>;
