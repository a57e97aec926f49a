//! YAML document stream decoding and serialization.
//!
//! This module provides:
//! - `Document`: One decoded record, an insertion-ordered mapping
//! - `Decoded`: A stream item, either a record or an empty document
//! - `FormatError`: Errors that can occur while decoding or serializing
//! - `deserialize_yaml_stream`: Lazy multi-document decoding over a byte buffer
//! - `serialize_document`: Re-serialization of a whole record

use serde_yaml::Value;
use thiserror::Error;

mod yaml;

pub use yaml::{Decoded, YamlDocuments, deserialize_yaml_stream, serialize_document};

/// A single decoded record.
///
/// `serde_yaml::Mapping` keeps keys in source order, so a record serializes
/// back with its fields where the author put them.
pub type Document = serde_yaml::Mapping;

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Serialization/deserialization error
    #[error("Serde error: {0}")]
    Serde(#[from] serde_yaml::Error),

    /// The document's top-level node is not a mapping
    #[error("document is a {0}, expected a mapping")]
    NotAMapping(&'static str),
}

/// Human-readable name of a YAML node type, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
