//! Split options and input source specification.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ErrorPolicy, SplitError};
use crate::io::{FileInput, InputProvider, StdinInput};

/// Permission bits for written files.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Options controlling a single split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Directory the split files are written into; must already exist
    pub out_dir: PathBuf,
    /// What to do when a document cannot be named or written
    pub error_policy: ErrorPolicy,
    /// Permission bits for created files (Unix only)
    pub file_mode: u32,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SplitOptions {
    /// Create options writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            error_policy: ErrorPolicy::default(),
            file_mode: DEFAULT_FILE_MODE,
        }
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the file mode.
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Get the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Check that the output directory exists and is a directory.
    pub fn validate_out_dir(&self) -> Result<(), SplitError> {
        let meta =
            std::fs::metadata(&self.out_dir).map_err(|source| SplitError::OutputDirMissing {
                path: self.out_dir.clone(),
                source,
            })?;
        if !meta.is_dir() {
            return Err(SplitError::OutputNotDirectory {
                path: self.out_dir.clone(),
            });
        }
        Ok(())
    }
}

/// Where the composite document stream is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, when it is a pipe or redirect
    Stdin,
    /// A named file
    File(PathBuf),
}

impl InputSource {
    /// Build the input provider for this source.
    pub fn provider(&self) -> Arc<dyn InputProvider> {
        match self {
            InputSource::Stdin => Arc::new(StdinInput::new()),
            InputSource::File(path) => Arc::new(FileInput::new(path.clone())),
        }
    }

    /// Check if reading from stdin.
    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}
