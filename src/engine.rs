//! The split engine: decode, name and write each document in turn.

use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

use serde::Serialize;

use crate::config::SplitOptions;
use crate::error::{AggregateError, ErrorPolicy, SplitError, Stage};
use crate::format::{Decoded, Document, deserialize_yaml_stream, serialize_document};
use crate::io::{DirOutput, InputProvider, OutputTarget};
use crate::naming::{NameRegistry, base_name};

/// Prefix of every line written to the log stream.
const LOG_PREFIX: &str = "k8split: ";

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Documents seen in the stream, empty ones included
    pub documents: usize,
    /// Empty documents that produced no file
    pub skipped: usize,
    /// Files written, in input order
    pub written: Vec<String>,
}

/// Splits a composite document stream into one file per record.
pub struct Splitter {
    options: SplitOptions,
    output: Arc<dyn OutputTarget>,
    registry: NameRegistry,
    log: Box<dyn Write + Send>,
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("options", &self.options)
            .field("output", &self.output)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Splitter {
    /// Create a splitter writing into `options.out_dir` and logging to stderr.
    pub fn new(options: SplitOptions) -> Self {
        let output = DirOutput::new(options.out_dir.clone()).with_mode(options.file_mode);
        Self {
            options,
            output: Arc::new(output),
            registry: NameRegistry::new(),
            log: Box::new(std::io::stderr()),
        }
    }

    /// Replace the output target.
    pub fn with_output(mut self, output: Arc<dyn OutputTarget>) -> Self {
        self.output = output;
        self
    }

    /// Replace the log stream.
    pub fn with_log(mut self, log: Box<dyn Write + Send>) -> Self {
        self.log = log;
        self
    }

    /// Get the options.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Name registry of the most recent run.
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Read the whole input, then split it.
    pub fn run(&mut self, input: &dyn InputProvider) -> Result<SplitReport, SplitError> {
        if input.is_stdin() {
            self.log(format_args!("splitting pipe"));
        }
        let bytes = read_input(input)?;
        self.split_bytes(&bytes)
    }

    /// Split an in-memory composite YAML stream.
    ///
    /// Each call starts with a fresh name registry.
    pub fn split_bytes(&mut self, bytes: &[u8]) -> Result<SplitReport, SplitError> {
        self.registry = NameRegistry::new();
        let mut report = SplitReport::default();
        let mut errors = Vec::new();

        for (index, decoded) in deserialize_yaml_stream(bytes).enumerate() {
            report.documents += 1;
            let document = match decoded {
                Ok(Decoded::Record(document)) => document,
                Ok(Decoded::Empty) => {
                    report.skipped += 1;
                    continue;
                }
                Err(source) => {
                    errors.push(SplitError::Decode { index, source });
                    return Err(self.finish_errors(errors));
                }
            };

            match self.write_document(index, &document) {
                Ok(file_name) => report.written.push(file_name),
                Err(e) => {
                    errors.push(e);
                    if matches!(self.options.error_policy, ErrorPolicy::FastFail) {
                        return Err(self.finish_errors(errors));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(report)
        } else {
            Err(self.finish_errors(errors))
        }
    }

    /// Name, serialize and write one record; returns the file name written.
    fn write_document(&mut self, index: usize, document: &Document) -> Result<String, SplitError> {
        let base = base_name(document).map_err(|source| SplitError::Schema { index, source })?;
        let text =
            serialize_document(document).map_err(|source| SplitError::Serialize { index, source })?;

        let file_name = self.registry.assign(&base);
        self.log(format_args!("Writing file: {file_name}"));

        self.output
            .write_file(&file_name, text.as_bytes())
            .map_err(|source| SplitError::Io {
                stage: Stage::Write,
                target: format!("{}/{}", self.output.id(), file_name),
                source,
            })?;
        Ok(file_name)
    }

    fn finish_errors(&self, mut errors: Vec<SplitError>) -> SplitError {
        match self.options.error_policy {
            ErrorPolicy::FastFail if errors.len() == 1 => errors.remove(0),
            _ => SplitError::Aggregate(AggregateError { errors }),
        }
    }

    fn log(&mut self, args: fmt::Arguments<'_>) {
        // A broken log stream must not abort the split.
        let _ = writeln!(self.log, "{LOG_PREFIX}{args}");
    }
}

/// Read an input provider to the end.
///
/// The stream is dropped before returning, on success and on error alike.
pub fn read_input(input: &dyn InputProvider) -> Result<Vec<u8>, SplitError> {
    let mut reader = input.open().map_err(|source| SplitError::Io {
        stage: Stage::Open,
        target: input.id().to_string(),
        source,
    })?;

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| SplitError::Io {
            stage: Stage::Read,
            target: input.id().to_string(),
            source,
        })?;
    Ok(bytes)
}
