//! Test file rendering.
//!
//! Output shape, one block per function in extraction order:
//!
//! ```text
//! const {add, sub} = require("../math")
//!
//! test("add", () => {
//!     expect(add(12, 30)).toBe(42);
//! });
//! ```

use std::collections::HashMap;

use snap_core::{GeneratedArgument, InvocationValue, ModuleMetadata};

use crate::error::GenError;

/// Render the full test file content.
///
/// # Errors
/// Returns `GenError::MissingResult` if any function lacks an argument list
/// or a captured result.
pub fn render(
    metadata: &ModuleMetadata,
    arguments: &HashMap<String, Vec<GeneratedArgument>>,
    results: &HashMap<String, InvocationValue>,
    import_specifier: &str,
) -> Result<String, GenError> {
    let mut content = format!(
        "const {{{}}} = require({})\n",
        metadata.names().join(", "),
        js_string(import_specifier),
    );

    for function in metadata {
        let name = function.name();
        let args = arguments
            .get(name)
            .ok_or_else(|| GenError::MissingResult(name.to_string()))?;
        let expected = results
            .get(name)
            .ok_or_else(|| GenError::MissingResult(name.to_string()))?;

        let rendered_args: Vec<String> = args.iter().map(|a| render_argument(*a)).collect();
        content.push_str(&format!(
            "\ntest(\"{name}\", () => {{\n    expect({name}({})).toBe({});\n}});\n",
            rendered_args.join(", "),
            render_value(expected),
        ));
    }

    Ok(content)
}

/// Literal for one synthesized argument.
#[must_use]
pub fn render_argument(arg: GeneratedArgument) -> String {
    match arg {
        GeneratedArgument::Numeric(n) => n.to_string(),
        GeneratedArgument::Omitted => "undefined".to_string(),
    }
}

/// Literal for one captured result.
#[must_use]
pub fn render_value(value: &InvocationValue) -> String {
    match value {
        InvocationValue::Number(n) => js_number(*n),
        InvocationValue::String(s) => js_string(s),
        InvocationValue::Bool(b) => b.to_string(),
        InvocationValue::Null => "null".to_string(),
        InvocationValue::Undefined => "undefined".to_string(),
        InvocationValue::Opaque(repr) => repr.clone(),
    }
}

fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() && n.is_sign_positive() {
        "Infinity".to_string()
    } else if n.is_infinite() {
        "-Infinity".to_string()
    } else {
        // Shortest round-trip form; `-0` stays distinct because `toBe` uses `Object.is`.
        n.to_string()
    }
}

fn js_string(s: &str) -> String {
    // A JSON string literal is a valid JS string literal.
    serde_json::to_string(s).expect("serializing a str cannot fail")
}
