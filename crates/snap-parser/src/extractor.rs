//! Exported function signature extraction.

use snap_core::{ANONYMOUS_EXPORT_MARKER, FunctionDescriptor, ModuleMetadata};

use crate::error::ParserError;
use crate::parameters::parse_parameter_list;
use crate::patterns::{EXPORTED_FUNCTION, NAME_FRAGMENT};

/// Extract every exported function declaration from `source`, in source order.
///
/// Anonymous default exports are matched but left out of the result.
///
/// # Errors
/// Returns `ParserError::NoExportedFunctions` if no declaration matches.
pub fn extract(source: &str) -> Result<ModuleMetadata, ParserError> {
    let mut matched = 0_usize;
    let mut functions = Vec::new();

    for caps in EXPORTED_FUNCTION.captures_iter(source) {
        matched += 1;
        let declaration = caps.get(0).map_or("", |m| m.as_str());

        let name = declared_name(declaration);
        if name.is_empty() || name == ANONYMOUS_EXPORT_MARKER {
            tracing::debug!(declaration, "skipping anonymous default export");
            continue;
        }

        let raw_params = caps.name("params").map_or("", |m| m.as_str());
        let parameters = parse_parameter_list(raw_params);
        tracing::debug!(name, arity = parameters.len(), "extracted exported function");
        functions.push(FunctionDescriptor::new(name, parameters)?);
    }

    if matched == 0 {
        return Err(ParserError::NoExportedFunctions);
    }
    Ok(ModuleMetadata::new(functions))
}

/// The identifier directly before the opening parenthesis.
fn declared_name(declaration: &str) -> String {
    NAME_FRAGMENT
        .find(declaration)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '(')
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use snap_core::ParameterDescriptor;

    use super::*;

    fn names(metadata: &ModuleMetadata) -> Vec<&str> {
        metadata.names()
    }

    #[test]
    fn zero_parameter_function_has_empty_list() {
        let metadata = extract("export function now() { return 1; }").unwrap();
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.functions()[0].name(), "now");
        assert!(metadata.functions()[0].parameters().is_empty());
    }

    #[rstest]
    #[case("export default function (a: number) { return a; }")]
    #[case("export default function(a: number) { return a; }")]
    #[case("export default function () {}")]
    fn anonymous_default_export_is_excluded(#[case] source: &str) {
        let metadata = extract(source).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn named_default_export_is_kept() {
        let metadata = extract("export default function main(n: number) {}").unwrap();
        assert_eq!(names(&metadata), vec!["main"]);
    }

    #[test]
    fn space_before_parenthesis_is_tolerated() {
        let metadata = extract("export function pad (n: number) {}").unwrap();
        assert_eq!(names(&metadata), vec!["pad"]);
    }

    #[test]
    fn default_value_does_not_leak() {
        let metadata = extract("export function inc(x: number = 5) { return x + 1; }").unwrap();
        assert_eq!(
            metadata.functions()[0].parameters(),
            &[ParameterDescriptor::new("x", Some("number".into())).unwrap()]
        );
    }

    #[test]
    fn unannotated_parameter_has_absent_type() {
        let metadata = extract("export function id(y) { return y; }").unwrap();
        let param = &metadata.functions()[0].parameters()[0];
        assert_eq!(param.name(), "y");
        assert_eq!(param.declared_type(), None);
    }

    #[test]
    fn siblings_keep_source_order() {
        let source = "\
export function add(a: number, b: number) { return a + b; }
function hidden(x: number) { return x; }
export function sub(a: number, b: number) { return a - b; }
";
        let metadata = extract(source).unwrap();
        assert_eq!(names(&metadata), vec!["add", "sub"]);
        assert_eq!(metadata.functions()[0].arity(), 2);
    }

    #[test]
    fn parameter_list_may_span_lines() {
        let source = "export function add(\n    a: number,\n    b: number\n) {\n    return a + b;\n}\n";
        let metadata = extract(source).unwrap();
        assert_eq!(names(&metadata), vec!["add"]);
        assert_eq!(
            metadata.functions()[0].parameters(),
            &[
                ParameterDescriptor::new("a", Some("number".into())).unwrap(),
                ParameterDescriptor::new("b", Some("number".into())).unwrap(),
            ]
        );
    }

    #[test]
    fn no_match_is_an_error() {
        let err = extract("function local() {}\nexport const x = 1;").unwrap_err();
        assert!(matches!(err, ParserError::NoExportedFunctions));
    }

    #[test]
    fn destructured_parameters_are_not_recognised() {
        let err = extract("export function f({ a }: Opts) {}").unwrap_err();
        assert!(matches!(err, ParserError::NoExportedFunctions));
    }

    #[test]
    fn generic_signatures_are_not_recognised() {
        let err = extract("export function first<T>(xs: T[]) {}").unwrap_err();
        assert!(matches!(err, ParserError::NoExportedFunctions));
    }
}
