//! Output name derivation.
//!
//! Every record is named after its `kind` and `metadata.name` fields. The
//! `NameRegistry` numbers repeated names so no two records in one run land
//! in the same file.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use crate::error::SchemaError;
use crate::format::{Document, value_kind};

/// Extension of every written file.
pub const EXTENSION: &str = "yaml";

fn field<'a>(map: &'a Mapping, key: &str, path: &'static str) -> Result<&'a Value, SchemaError> {
    match map.get(key) {
        None | Some(Value::Null) => Err(SchemaError::Missing { field: path }),
        Some(value) => Ok(value),
    }
}

fn string_field<'a>(
    map: &'a Mapping,
    key: &str,
    path: &'static str,
) -> Result<&'a str, SchemaError> {
    let value = field(map, key, path)?;
    value.as_str().ok_or(SchemaError::WrongType {
        field: path,
        expected: "string",
        found: value_kind(value),
    })
}

/// A string field that ends up in a file name must stay inside the output directory.
fn file_name_part<'a>(
    map: &'a Mapping,
    key: &str,
    path: &'static str,
) -> Result<&'a str, SchemaError> {
    let value = string_field(map, key, path)?;
    if value.contains(['/', '\\']) {
        return Err(SchemaError::PathSeparator {
            field: path,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn mapping_field<'a>(
    map: &'a Mapping,
    key: &str,
    path: &'static str,
) -> Result<&'a Mapping, SchemaError> {
    let value = field(map, key, path)?;
    value.as_mapping().ok_or(SchemaError::WrongType {
        field: path,
        expected: "mapping",
        found: value_kind(value),
    })
}

/// The `kind` field of a record.
pub fn kind(document: &Document) -> Result<&str, SchemaError> {
    file_name_part(document, "kind", "kind")
}

/// The `metadata.name` field of a record.
pub fn metadata_name(document: &Document) -> Result<&str, SchemaError> {
    let metadata = mapping_field(document, "metadata", "metadata")?;
    file_name_part(metadata, "name", "metadata.name")
}

/// Derive `{kind}-{metadata.name}` for a record, preserving case.
pub fn base_name(document: &Document) -> Result<String, SchemaError> {
    let kind = kind(document)?;
    let name = metadata_name(document)?;
    Ok(format!("{kind}-{name}"))
}

/// Per-run counter of how many records were assigned each base-name.
///
/// Base-names are compared case-insensitively, since they are lower-cased
/// before they reach the filesystem.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    counts: HashMap<String, usize>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next filename for `base` and bump its count.
    ///
    /// The first occurrence gets `base.yaml`, the n-th repeat `base_n.yaml`.
    pub fn assign(&mut self, base: &str) -> String {
        let key = base.to_lowercase();
        let count = self.counts.entry(key.clone()).or_insert(0);
        let file_name = match *count {
            0 => format!("{key}.{EXTENSION}"),
            c => format!("{key}_{c}.{EXTENSION}"),
        };
        *count += 1;
        file_name
    }

    /// Number of records assigned `base` so far.
    pub fn count(&self, base: &str) -> usize {
        self.counts.get(&base.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct base-names seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
