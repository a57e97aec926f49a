//! Error types and policies for a split run.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether to fail fast or keep going past bad documents
//! - `Stage`: Indicates where an I/O error occurred
//! - `SchemaError`: A required field is missing, has the wrong type, or is not a plain file name
//! - `SplitError`: Every fatal condition of a run
//! - `AggregateError`: A collection of errors when using `Accumulate` policy

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    #[default]
    FastFail,
    /// Record per-document errors and continue with the next document
    Accumulate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the input stream
    Open,
    Read,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// A load-bearing field could not be extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("no `{field}` field specified")]
    Missing { field: &'static str },

    #[error("field `{field}` must be a {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}` contains a path separator: {value:?}")]
    PathSeparator { field: &'static str, value: String },
}

impl SchemaError {
    /// Dotted path of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            SchemaError::Missing { field }
            | SchemaError::WrongType { field, .. }
            | SchemaError::PathSeparator { field, .. } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("output directory {} is not accessible: {source}", path.display())]
    OutputDirMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path {} is not a directory", path.display())]
    OutputNotDirectory { path: PathBuf },

    #[error("stdin is a pipe but file also given")]
    StdinConflict,

    #[error("unknown arguments: expected one input file, got {count}")]
    TooManyArguments { count: usize },

    #[error("no input file given and stdin is not a pipe")]
    MissingInput,

    #[error("unable to open file {} - {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[{stage}] {target}: {source}")]
    Io {
        stage: Stage,
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading yaml document {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: FormatError,
    },

    #[error("{source} for yaml document {index} in this file")]
    Schema {
        index: usize,
        #[source]
        source: SchemaError,
    },

    #[error("error creating yaml for document {index}: {source}")]
    Serialize {
        index: usize,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl SplitError {
    /// Index of the document the error belongs to, when there is one.
    pub fn document_index(&self) -> Option<usize> {
        match self {
            SplitError::Decode { index, .. }
            | SplitError::Schema { index, .. }
            | SplitError::Serialize { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// True for errors raised while validating arguments, before any input is read.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            SplitError::OutputDirMissing { .. }
                | SplitError::OutputNotDirectory { .. }
                | SplitError::StdinConflict
                | SplitError::TooManyArguments { .. }
                | SplitError::MissingInput
                | SplitError::InputNotFound { .. }
        )
    }
}

/// Errors collected across documents under `ErrorPolicy::Accumulate`.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SplitError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "split encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SplitError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
