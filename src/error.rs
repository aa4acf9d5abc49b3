use miette::Diagnostic;
use thiserror::Error;

/// Main error type for typesift operations.
///
/// The inference engine itself is total and never fails; errors arise from
/// the I/O, manifest, and CLI surfaces around it.
#[derive(Error, Diagnostic, Debug)]
pub enum TypesiftError {
    #[error("IO error: {0}")]
    #[diagnostic(code(typesift::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(typesift::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(typesift::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(typesift::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("Usage error: {message}")]
    #[diagnostic(code(typesift::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TypesiftError>;
