//! # k8split
//!
//! Split a composite multi-document YAML stream into one file per resource.
//!
//! ## Overview
//!
//! Each non-empty document is named after its `kind` and `metadata.name`
//! fields and written to `<outdir>/<kind>-<name>.yaml`, lower-cased. Repeats
//! of the same name get a numeric suffix: `pod-foo.yaml`, `pod-foo_1.yaml`,
//! `pod-foo_2.yaml`, and so on.
//!
//! ```rust,ignore
//! use k8split::{SplitOptions, Splitter, FileInput};
//!
//! fn main() -> Result<(), k8split::SplitError> {
//!     let mut splitter = Splitter::new(SplitOptions::new("manifests"));
//!     let report = splitter.run(&FileInput::new("all.yaml".into()))?;
//!     println!("wrote {} files", report.written.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - Input is read in full (file or piped stdin), then decoded lazily one
//!   document at a time.
//! - Empty documents are skipped and do not take a name.
//! - Documents are re-serialized whole; key order is preserved.
//! - By default the first error ends the run. Files already written stay.
//!   With `ErrorPolicy::Accumulate`, naming and write failures are collected
//!   and the run continues; decode failures always stop it.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod naming;

pub use config::{InputSource, SplitOptions};
pub use engine::{SplitReport, Splitter};
pub use error::{AggregateError, ErrorPolicy, SchemaError, SplitError, Stage};
pub use format::{Document, FormatError};
pub use io::{
    DirOutput, FileInput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StdinInput,
};
pub use naming::NameRegistry;

#[cfg(feature = "miette")]
pub use error::SplitDiagnostic;
