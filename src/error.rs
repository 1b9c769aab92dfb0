//! @acp:module "Errors"
//! @acp:summary "Error types for verse loading, configuration, and output"
//! @acp:domain cli
//! @acp:layer error

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the pipeline boundary
///
/// Normalization, concatenation, and prompt generation are total; every
/// variant here comes from reading input, validating configuration, or
/// writing the result file.
#[derive(Debug, Error)]
pub enum TypingError {
    #[error("Verse file not found: {}", .0.display())]
    VerseFileNotFound(PathBuf),

    #[error("Failed to read verse file {}: {source}", path.display())]
    ReadVerses {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write result file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Symbol alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Symbol alphabet must not contain whitespace, got {0:?}")]
    WhitespaceSymbol(char),

    #[error("Distinct symbol pairs need at least two different symbols, got {0}")]
    AlphabetTooSmall(usize),

    #[error("Invalid timestamp format: {0:?}")]
    InvalidTimestampFormat(String),

    #[error("Invalid config file {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, TypingError>;
