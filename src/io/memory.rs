//! In-memory I/O implementations for testing.

use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{InputProvider, OutputTarget};

/// In-memory input source for testing.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}

/// In-memory output target for testing.
///
/// Files are kept in write order. Writing an existing name replaces its
/// contents in place, the same way truncating a file on disk would.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            files: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, Vec<u8>)>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Names of the files written so far, in first-write order.
    pub fn names(&self) -> Vec<String> {
        self.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Contents of the file `name`, if it was written.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.lock()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.clone())
    }

    /// Contents of the file `name` as a string.
    pub fn contents_string(&self, name: &str) -> Option<String> {
        self.contents(name)
            .map(|data| String::from_utf8_lossy(&data).into_owned())
    }

    /// Number of distinct files written.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_file(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let mut files = self.lock();
        match files.iter_mut().find(|(n, _)| n == name) {
            Some((_, data)) => *data = contents.to_vec(),
            None => files.push((name.to_string(), contents.to_vec())),
        }
        Ok(())
    }
}
