//! The generated test file artifact.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Rendered test file content and the path it belongs at.
///
/// Ownership moves to the file store on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTestFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedTestFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Base name of the generated file, e.g. `math.test.js`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_base_name() {
        let file = GeneratedTestFile::new("/src/lib/tests/math.test.js", "");
        assert_eq!(file.file_name(), "math.test.js");
    }
}
