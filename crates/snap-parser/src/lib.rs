//! # snap-parser
//!
//! Pattern-based extraction of exported function signatures.
//!
//! The scanner accepts a deliberately narrow grammar:
//! `export [default] function [name](params)` where every parameter is a
//! simple `name[: type][= literal]` token. Parameter lists may span lines.
//! Destructuring, generics and rest parameters are not recognised.

mod error;
mod extractor;
mod parameters;
mod patterns;
mod source_kind;

pub use error::ParserError;
pub use extractor::extract;
pub use parameters::{parse_parameter, parse_parameter_list};
pub use source_kind::{SourceKind, detect_source_kind};
