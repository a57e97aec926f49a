//! I/O abstractions for input providers and output targets.
//!
//! This module provides:
//! - `InputProvider`: Trait for input sources
//! - `OutputTarget`: Trait for the directory split documents are written into
//! - Standard implementations for files, stdin and output directories
//! - In-memory implementations for testing

mod input;
mod memory;
mod output;
mod std_io;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{DirOutput, FileInput, StdinInput, stdin_is_piped};
