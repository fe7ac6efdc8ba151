//! Compiled scanning patterns.

use std::sync::LazyLock;

use regex::Regex;

/// One exported function declaration with a simple parameter list.
///
/// `params` captures the raw text between the parentheses.
pub static EXPORTED_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"export(?:\sdefault)?\sfunction(?:\s[a-zA-Z0-9]*)?\s?\((?P<params>\s*[a-zA-Z0-9,:=\s]*)\)",
    )
    .expect("exported function pattern is valid")
});

/// The `name (` fragment inside a declaration match.
///
/// For an anonymous default export the first fragment is `function (`.
pub static NAME_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9]*\s?\(").expect("name fragment pattern is valid")
});

/// A default-value suffix on a parameter token.
pub static DEFAULT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"=[a-zA-Z0-9'"\s]*"#).expect("default value pattern is valid")
});
