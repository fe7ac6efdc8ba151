//! Output path resolution.
//!
//! Everything is derived from path components, never from string splicing,
//! so any source depth and any test folder depth resolve correctly.

use std::path::{Component, Path, PathBuf};

use path_clean::clean;
use serde::Serialize;

use crate::error::GenError;

/// Where a generated test file goes and how it imports its subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLayout {
    /// Absolute, cleaned path of the source file.
    pub source_path: PathBuf,
    /// Source directory joined with the stem: what the test file imports.
    pub module_path: PathBuf,
    pub test_directory: PathBuf,
    pub test_file: PathBuf,
    /// `module_path` relative to `test_directory`, `/`-separated.
    pub import_specifier: String,
}

impl OutputLayout {
    /// Resolve the layout for `source_path`.
    ///
    /// `test_folder_name` is relative to the source file's directory and may
    /// contain separators or `..`.
    ///
    /// # Errors
    /// Returns `GenError::Layout` if the source path has no file stem or the
    /// import specifier cannot be expressed relatively.
    pub fn resolve(
        source_path: &Path,
        test_folder_name: &str,
        test_file_extension: &str,
    ) -> Result<Self, GenError> {
        let absolute = std::path::absolute(source_path)
            .map_err(|e| GenError::Layout(format!("{}: {e}", source_path.display())))?;
        let source_path = clean(absolute);

        let directory = source_path
            .parent()
            .ok_or_else(|| GenError::Layout(format!("{} has no parent", source_path.display())))?
            .to_path_buf();
        let stem = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GenError::Layout(format!("{} has no file stem", source_path.display())))?
            .to_string();

        let test_directory = clean(directory.join(test_folder_name));
        let test_file = test_directory.join(format!("{stem}.test.{test_file_extension}"));
        let module_path = directory.join(&stem);
        let import_specifier = relative_specifier(&test_directory, &module_path)?;

        Ok(Self {
            source_path,
            module_path,
            test_directory,
            test_file,
            import_specifier,
        })
    }
}

/// Module specifier reaching `to` from the directory `from`.
///
/// Both paths must be absolute and clean. The result uses `/` and always
/// starts with `.` so module resolution treats it as a path.
///
/// # Errors
/// Returns `GenError::Layout` if the paths share no root (e.g. different
/// drives) or are not clean.
pub fn relative_specifier(from: &Path, to: &Path) -> Result<String, GenError> {
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return Err(GenError::Layout(format!(
            "{} and {} share no common root",
            from.display(),
            to.display()
        )));
    }

    let mut segments: Vec<String> = Vec::new();
    for component in &from_parts[common..] {
        match component {
            Component::Normal(_) => segments.push("..".to_string()),
            other => return Err(unclean(from, other)),
        }
    }
    for component in &to_parts[common..] {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            other => return Err(unclean(to, other)),
        }
    }

    let joined = segments.join("/");
    if joined.starts_with('.') {
        Ok(joined)
    } else {
        Ok(format!("./{joined}"))
    }
}

fn unclean(path: &Path, component: &Component<'_>) -> GenError {
    GenError::Layout(format!(
        "unexpected component {component:?} in {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_layout() {
        let layout = OutputLayout::resolve(Path::new("/work/src/math.ts"), "tests", "js").unwrap();
        assert_eq!(layout.test_directory, PathBuf::from("/work/src/tests"));
        assert_eq!(layout.test_file, PathBuf::from("/work/src/tests/math.test.js"));
        assert_eq!(layout.module_path, PathBuf::from("/work/src/math"));
        assert_eq!(layout.import_specifier, "../math");
    }

    #[rstest]
    #[case("/a/b/c/d/math.ts", "tests/unit/generated", "../../../math")]
    #[case("/a/b/c/math.ts", "tests/unit", "../../math")]
    #[case("/a/b/c/math.ts", "../spec", "../c/math")]
    #[case("/a/b/c/math.ts", "../../x/y", "../../b/c/math")]
    #[case("/a/b/c/math.ts", ".", "./math")]
    #[case("/a/b/c/math.ts", "./tests/", "../math")]
    fn specifier_resolves_back_to_source(
        #[case] source: &str,
        #[case] folder: &str,
        #[case] expected: &str,
    ) {
        let layout = OutputLayout::resolve(Path::new(source), folder, "js").unwrap();
        assert_eq!(layout.import_specifier, expected);
        let round_trip = clean(layout.test_directory.join(&layout.import_specifier));
        assert_eq!(round_trip, layout.module_path);
    }

    #[test]
    fn dotted_stem_is_preserved() {
        let layout =
            OutputLayout::resolve(Path::new("/src/math.utils.ts"), "tests", "js").unwrap();
        assert_eq!(
            layout.test_file,
            PathBuf::from("/src/tests/math.utils.test.js")
        );
        assert_eq!(layout.import_specifier, "../math.utils");
    }

    #[test]
    fn custom_extension() {
        let layout = OutputLayout::resolve(Path::new("/src/m.ts"), "tests", "cjs").unwrap();
        assert_eq!(layout.test_file, PathBuf::from("/src/tests/m.test.cjs"));
    }

    #[test]
    fn relative_source_is_made_absolute() {
        let layout = OutputLayout::resolve(Path::new("./lib/m.ts"), "tests", "js").unwrap();
        assert!(layout.source_path.is_absolute());
        assert_eq!(layout.import_specifier, "../m");
    }

    #[test]
    fn source_without_stem_is_rejected() {
        assert!(matches!(
            OutputLayout::resolve(Path::new("/"), "tests", "js"),
            Err(GenError::Layout(_))
        ));
    }
}
