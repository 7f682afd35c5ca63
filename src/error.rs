//! Error types for typst-engine operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or processing a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Executable code found in a document with a plain markdown extension.
    #[error("You must use the .qmd extension for documents with executable code.")]
    ExecutableCode { path: PathBuf },

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by the document itself rather than the host.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::ExecutableCode { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
