//! # snap-gen
//!
//! Turns a source module into a regression-snapshot test file.
//!
//! Pipeline: read source, extract exported signatures, synthesize
//! arguments, invoke each export once, render the test file, write it.
//! The expected values are whatever the one live invocation returned, so
//! the generated assertions pin current behaviour rather than specify it.

mod error;
pub mod layout;
mod orchestrator;
pub mod render;
mod store;
pub mod synth;

pub use error::GenError;
pub use layout::OutputLayout;
pub use orchestrator::{GenerateOptions, GenerationReport, Generator};
pub use render::render;
pub use snap_parser::SourceKind;
pub use store::{FileStore, LocalFileStore};
pub use synth::ArgumentSynthesizer;
