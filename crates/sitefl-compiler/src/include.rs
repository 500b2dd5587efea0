//! Readers for `` `::path` `` code-block inclusion.
//!
//! The compiler never touches the filesystem directly; it asks an
//! [`IncludeReader`] for a line source and degrades the block to empty
//! output when that fails.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor as IoCursor};
use std::path::PathBuf;

/// Source of included files.
pub trait IncludeReader: Sync {
    /// Open `path` for line-by-line reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Reads included files from the filesystem.
///
/// Relative paths resolve against `base` when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FsReader {
    base: Option<PathBuf>,
}

impl FsReader {
    /// Resolve paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl IncludeReader for FsReader {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self.resolve(path))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Serves included files from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: HashMap<String, String>,
}

impl MemoryReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contents` under `path`.
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemoryReader::insert`].
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl IncludeReader for MemoryReader {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead + '_>> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(IoCursor::new(contents.as_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path),
            )),
        }
    }
}
