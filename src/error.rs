use miette::Diagnostic;
use thiserror::Error;

/// Main error type for erd operations
#[derive(Error, Diagnostic, Debug)]
pub enum ErdError {
    #[error("IO error: {0}")]
    #[diagnostic(code(erd::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(erd::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(erd::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(erd::serialize))]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    #[diagnostic(code(erd::serialize))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {message}")]
    #[diagnostic(code(erd::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ErdError>;
