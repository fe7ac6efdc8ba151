//! Parser error types for snap-parser.

/// Errors that can occur during signature extraction.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("No exported function declarations found")]
    NoExportedFunctions,

    #[error("Unsupported source file: {0}")]
    UnsupportedSource(String),

    #[error(transparent)]
    Descriptor(#[from] snap_core::CoreError),
}
