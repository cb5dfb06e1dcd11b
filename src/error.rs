//! Error types for dictionary loading.
//!
//! Only load-time problems are errors. Per-query outcomes such as an unknown
//! word or a pronunciation without a rhyme group are represented as default
//! or empty results instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the pronunciation indices.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// A dictionary file is missing or could not be read.
    #[error("cannot read dictionary file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line does not match the expected field layout.
    #[error("malformed line {line} in {file}: {reason}")]
    Format { file: String, line: usize, reason: String },
}

impl DictionaryError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DictionaryError::FileAccess { path: path.into(), source }
    }

    pub(crate) fn format(file: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        DictionaryError::Format { file: file.into(), line, reason: reason.into() }
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, DictionaryError>;
