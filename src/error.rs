use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewgenError {
    #[error("No input file found (tried: {})", .candidates.join(", "))]
    InputNotFound { candidates: Vec<String> },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Parsing error in '{file}': {message}")]
    ParseError { file: String, message: String },

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("Configuration not found: {0}")]
    ConfigurationNotFound(String),

    /// Strict mode rejected the document
    #[error("Strict mode: {} issue(s) found:\n  {}", .0.len(), .0.join("\n  "))]
    StrictViolation(Vec<String>),

    #[error("Operation interrupted by user")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, BrewgenError>;
