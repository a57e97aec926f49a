//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, SchemaError, SplitError};

/// A diagnostic wrapper for split errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SplitDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &SplitError) -> Option<String> {
    let text = match e {
        SplitError::OutputDirMissing { .. } | SplitError::OutputNotDirectory { .. } => {
            "create the directory first or point -o/--outdir at an existing one"
        }
        SplitError::StdinConflict => "either pipe the input or pass a file argument, not both",
        SplitError::TooManyArguments { .. } => "pass exactly one input file",
        SplitError::MissingInput => "pass an input file or pipe YAML on stdin",
        SplitError::InputNotFound { .. } => "check the input file path",
        SplitError::Decode { .. } => "the input is not a valid multi-document YAML stream",
        SplitError::Schema { source, .. } => match source {
            SchemaError::Missing { .. } => {
                "every document needs a string `kind` and a string `metadata.name`"
            }
            SchemaError::WrongType { .. } => "`kind` and `metadata.name` must be plain strings",
            SchemaError::PathSeparator { .. } => {
                "`kind` and `metadata.name` become a file name and cannot contain `/` or `\\`"
            }
        },
        SplitError::Io { .. } | SplitError::Serialize { .. } => return None,
        SplitError::Aggregate(_) => "rerun without --keep-going to stop at the first error",
    };
    Some(text.to_string())
}

impl From<SplitError> for SplitDiagnostic {
    fn from(e: SplitError) -> Self {
        SplitDiagnostic {
            message: e.to_string(),
            help: help_for(&e),
            source: None,
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for SplitDiagnostic {
    fn from(agg: AggregateError) -> Self {
        SplitDiagnostic::from(SplitError::Aggregate(agg))
    }
}
