//! Cross-cutting error types for snapgen.
//!
//! Domain-specific errors (`ParserError`, `RuntimeError`, `GenError`) are
//! defined in their respective crates and converge into `anyhow` in the CLI.

use thiserror::Error;

/// Errors that can be raised by any snapgen crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed an invariant check.
    #[error("Validation error: {0}")]
    Validation(String),
}
