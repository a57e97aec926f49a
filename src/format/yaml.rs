//! YAML format implementation.

use serde::Deserialize;
use serde_yaml::Value;

use super::{Document, FormatError, value_kind};

/// One item of a YAML document stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The document held no keys (`---` alone, comments only, `{}`, or `null`)
    Empty,
    /// The document decoded to a non-empty mapping
    Record(Document),
}

/// Lazy iterator over the documents of a multi-document YAML buffer.
///
/// Single pass: each document is parsed when `next` is called. After a
/// syntax error the remainder of the stream cannot be trusted, so callers
/// should stop at the first `Err`.
pub struct YamlDocuments<'de> {
    inner: serde_yaml::Deserializer<'de>,
}

impl std::fmt::Debug for YamlDocuments<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YamlDocuments").finish_non_exhaustive()
    }
}

/// Decode a buffer as a stream of YAML documents.
pub fn deserialize_yaml_stream(bytes: &[u8]) -> YamlDocuments<'_> {
    YamlDocuments {
        inner: serde_yaml::Deserializer::from_slice(bytes),
    }
}

impl Iterator for YamlDocuments<'_> {
    type Item = Result<Decoded, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.inner.next()?;
        Some(decode_document(document))
    }
}

fn decode_document(document: serde_yaml::Deserializer<'_>) -> Result<Decoded, FormatError> {
    let mut value = Value::deserialize(document)?;
    value.apply_merge()?;
    match value {
        Value::Null => Ok(Decoded::Empty),
        Value::Mapping(map) if map.is_empty() => Ok(Decoded::Empty),
        Value::Mapping(map) => Ok(Decoded::Record(map)),
        other => Err(FormatError::NotAMapping(value_kind(&other))),
    }
}

/// Serialize a whole record back to YAML text.
pub fn serialize_document(document: &Document) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(document)?)
}
