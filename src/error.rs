//! Error types for quote consolidation.

use std::path::PathBuf;

/// All errors that can occur during a consolidation run.
///
/// Every variant is fatal to the run in progress: the engine aborts on the
/// first error and produces no partial report output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("quote file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("access denied opening quote file: {path}")]
    SourceAccessDenied { path: PathBuf },

    #[error("invalid quote file path: {path}")]
    SourcePathInvalid { path: PathBuf },

    #[error("line {line}: expected at least 4 delimited fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: ask price is zero, spread is undefined")]
    ZeroAsk { line: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
