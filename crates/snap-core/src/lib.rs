//! # snap-core
//!
//! Core data model and error types for snapgen.
//!
//! This crate provides the types shared across all snapgen crates:
//! - Function and parameter descriptors produced by signature extraction
//! - Synthesized arguments and captured invocation values
//! - The generated test file artifact
//! - Cross-cutting error types

pub mod artifact;
pub mod descriptor;
pub mod errors;
pub mod values;

pub use artifact::GeneratedTestFile;
pub use descriptor::{ANONYMOUS_EXPORT_MARKER, FunctionDescriptor, ModuleMetadata, ParameterDescriptor};
pub use errors::CoreError;
pub use values::{GeneratedArgument, InvocationValue};
