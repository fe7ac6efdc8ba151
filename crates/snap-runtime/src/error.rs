//! Runtime error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no loadable module at {}", .0.display())]
    ModuleNotFound(PathBuf),

    #[error("'{export}' is not a callable export of {module}")]
    MissingExport { export: String, module: String },

    #[error("invoking '{export}' failed: {message}")]
    InvocationFailed { export: String, message: String },

    #[error("unreadable runtime response: {0}")]
    Protocol(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
