//! Source language detection from file extensions.

use std::path::Path;

use serde::Serialize;

/// Source languages whose exported functions the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    TypeScript,
    JavaScript,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
        };
        write!(f, "{s}")
    }
}

/// Detect the source language from a file path extension.
///
/// Returns `None` for unsupported or missing extensions.
#[must_use]
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    match path.extension()?.to_str()? {
        "ts" => Some(SourceKind::TypeScript),
        "js" => Some(SourceKind::JavaScript),
        _ => None,
    }
}
