//! Output target trait definition.

use std::fmt::Debug;

/// Trait for the destination of split documents.
///
/// A target is a flat namespace of files, usually a directory on disk.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    fn id(&self) -> &str;

    /// Create or truncate the file `name` and write `contents` to it.
    fn write_file(&self, name: &str, contents: &[u8]) -> std::io::Result<()>;
}
