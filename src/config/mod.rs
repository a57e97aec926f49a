//! Configuration types for a split run.
//!
//! This module provides:
//! - `SplitOptions`: Output directory, error policy and file mode
//! - `InputSource`: Where the composite document stream comes from

mod options;

pub use options::{DEFAULT_FILE_MODE, InputSource, SplitOptions};
