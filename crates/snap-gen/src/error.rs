//! Generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run. No test file is written once any of
/// these is raised before the write step.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction failed: {0}")]
    Extraction(#[from] snap_parser::ParserError),

    #[error("failed to load module: {0}")]
    ModuleLoad(#[from] snap_runtime::RuntimeError),

    #[error("live invocation of '{function}' failed: {source}")]
    Invocation {
        function: String,
        #[source]
        source: snap_runtime::RuntimeError,
    },

    #[error("no captured result for '{0}'")]
    MissingResult(String),

    #[error("cannot resolve output layout: {0}")]
    Layout(String),

    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
