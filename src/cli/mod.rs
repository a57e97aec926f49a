//! Command-line arguments and their validation.
//!
//! Validation runs in a fixed order before any input is read: the output
//! directory, then the stdin/file combination, then the argument count,
//! then the input file itself.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{InputSource, SplitOptions};
use crate::error::{ErrorPolicy, SplitError};

/// Split a composite yaml file into multiple distinct files.
#[derive(Debug, Clone, Parser)]
#[command(name = "k8split", version, override_usage = "k8split -o <dir> <file>")]
pub struct SplitArgs {
    /// The name of the directory.
    #[arg(short = 'o', long = "outdir", value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,

    /// Keep splitting after a document cannot be named or written, and
    /// report every failure at the end.
    #[arg(long)]
    pub keep_going: bool,

    /// Composite YAML file; omit when piping the stream on stdin.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl SplitArgs {
    /// Split options described by these arguments.
    pub fn options(&self) -> SplitOptions {
        let policy = if self.keep_going {
            ErrorPolicy::Accumulate
        } else {
            ErrorPolicy::FastFail
        };
        SplitOptions::new(self.outdir.clone()).with_error_policy(policy)
    }

    /// Validate the arguments and decide where input comes from.
    pub fn resolve(&self, stdin_piped: bool) -> Result<InputSource, SplitError> {
        self.options().validate_out_dir()?;

        if stdin_piped && !self.files.is_empty() {
            return Err(SplitError::StdinConflict);
        }
        if self.files.len() > 1 {
            return Err(SplitError::TooManyArguments {
                count: self.files.len(),
            });
        }
        if stdin_piped {
            return Ok(InputSource::Stdin);
        }

        let path = self.files.first().ok_or(SplitError::MissingInput)?;
        std::fs::metadata(path).map_err(|source| SplitError::InputNotFound {
            path: path.clone(),
            source,
        })?;
        Ok(InputSource::File(path.clone()))
    }
}
