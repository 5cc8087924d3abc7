//! Emission error taxonomy.

use std::path::PathBuf;

/// Errors raised by a single `emit` call.
///
/// All variants are terminal for the current call; nothing is retried
/// internally and no partial artifact is written. The CLI layer maps
/// them to a non-zero exit status.
#[derive(thiserror::Error, Debug)]
pub enum EmitError {
    #[error("no report specification registered for input format `{format}`")]
    UnsupportedInputFormat { format: String },

    #[error("no template registered for `{key}`")]
    TemplateNotFound { key: String },

    #[error("template rendering failed: {message}")]
    Render { message: String },

    #[error("failed to read data mapping from {path}: {source}")]
    DataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("data mapping is not valid JSON: {0}")]
    DataParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
