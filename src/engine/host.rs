//! Host boundary.
//!
//! The engine never touches storage itself: the host hands it document
//! text through a [`Host`] passed explicitly into each call.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::decode_source;

/// Source of document text.
pub trait Host {
    /// Load the full text of the document at `path`.
    fn read_source(&self, path: &Path) -> io::Result<String>;
}

/// Host reading documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHost;

impl Host for FsHost {
    fn read_source(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(decode_source(&bytes).into_owned())
    }
}

/// Host serving documents from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    files: HashMap<PathBuf, String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl Host for MemoryHost {
    fn read_source(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such document", path.display()),
            )
        })
    }
}

impl<H: Host + ?Sized> Host for &H {
    fn read_source(&self, path: &Path) -> io::Result<String> {
        (**self).read_source(path)
    }
}
