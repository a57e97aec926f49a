//! Standard I/O implementations for stdin, input files and output directories.

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use super::{InputProvider, OutputTarget};
use crate::config::DEFAULT_FILE_MODE;

/// Input provider for reading from stdin.
#[derive(Debug, Clone)]
pub struct StdinInput {
    id: String,
}

impl StdinInput {
    /// Create a new stdin input provider.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// Input provider for reading from files.
#[derive(Debug, Clone)]
pub struct FileInput {
    id: String,
    path: PathBuf,
}

impl FileInput {
    /// Create a new file input provider.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Output target writing each document as a file inside a directory.
#[derive(Debug, Clone)]
pub struct DirOutput {
    id: String,
    dir: PathBuf,
    mode: u32,
}

impl DirOutput {
    /// Create a target for `dir` using the default file mode.
    pub fn new(dir: PathBuf) -> Self {
        let id = dir.to_string_lossy().into_owned();
        Self {
            id,
            dir,
            mode: DEFAULT_FILE_MODE,
        }
    }

    /// Set the permission bits used when a file is created (Unix only).
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Permission bits applied to newly created files.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Get the directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a file called `name` would be written to.
    ///
    /// `name` is joined as-is, so it must be a bare file name. Names built by
    /// `naming::base_name` never contain a path separator.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn open_overwrite(&self, path: &Path) -> io::Result<std::fs::File> {
        let mut options = OpenOptions::new();
        options.create(true).truncate(true).write(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode);
        }
        options.open(path)
    }
}

impl OutputTarget for DirOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn write_file(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let mut file = self.open_overwrite(&self.path_for(name))?;
        file.write_all(contents)?;
        file.flush()
    }
}

/// Reports whether stdin is a pipe or redirect rather than an interactive device.
///
/// On Unix this mirrors the character-device test: a TTY and `/dev/null`
/// both count as "not piped", a pipe or a regular file counts as piped.
#[cfg(unix)]
pub fn stdin_is_piped() -> bool {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let stdin = io::stdin();
    let Ok(fd) = stdin.as_fd().try_clone_to_owned() else {
        return false;
    };
    match std::fs::File::from(fd).metadata() {
        Ok(meta) => !meta.file_type().is_char_device(),
        Err(_) => false,
    }
}

/// Reports whether stdin is a pipe or redirect rather than an interactive device.
#[cfg(not(unix))]
pub fn stdin_is_piped() -> bool {
    use std::io::IsTerminal;

    !io::stdin().is_terminal()
}
