//! Parameter list parsing.

use snap_core::ParameterDescriptor;

use crate::patterns::DEFAULT_VALUE;

/// Parse the raw text between a declaration's parentheses.
///
/// Whitespace is discarded before splitting on commas. An empty list yields
/// no parameters; empty tokens (e.g. from a trailing comma) and tokens
/// without a name are skipped.
#[must_use]
pub fn parse_parameter_list(raw: &str) -> Vec<ParameterDescriptor> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Vec::new();
    }

    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let parsed = parse_parameter(token);
            if parsed.is_none() {
                tracing::warn!(token, "skipping parameter token without a name");
            }
            parsed
        })
        .collect()
}

/// Parse one whitespace-free parameter token such as `x:number=5`.
///
/// The default-value suffix is dropped, then the remainder splits on `:`
/// into name and declared type. A token that does not split into exactly one
/// or two parts keeps its name and loses its type.
#[must_use]
pub fn parse_parameter(token: &str) -> Option<ParameterDescriptor> {
    let stripped = DEFAULT_VALUE.replace_all(token, "");
    let parts: Vec<&str> = stripped.split(':').collect();

    let (name, declared_type) = match parts.as_slice() {
        [name] => (*name, None),
        [name, ty] => (*name, Some((*ty).to_string())),
        [name, ..] => {
            tracing::warn!(token, "ambiguous parameter annotation, dropping type");
            (*name, None)
        }
        [] => return None,
    };

    ParameterDescriptor::new(name, declared_type).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn param(name: &str, ty: Option<&str>) -> ParameterDescriptor {
        ParameterDescriptor::new(name, ty.map(str::to_string)).unwrap()
    }

    #[rstest]
    #[case("x:number=5", "x", Some("number"))]
    #[case("x=5", "x", None)]
    #[case("y", "y", None)]
    #[case("label:string", "label", Some("string"))]
    #[case("flag:boolean=true", "flag", Some("boolean"))]
    #[case("a:b:c", "a", None)]
    fn parses_single_token(
        #[case] token: &str,
        #[case] name: &str,
        #[case] ty: Option<&str>,
    ) {
        assert_eq!(parse_parameter(token), Some(param(name, ty)));
    }

    #[test]
    fn token_without_name_is_rejected() {
        assert_eq!(parse_parameter(":number"), None);
        assert_eq!(parse_parameter(""), None);
        assert_eq!(parse_parameter("=5"), None);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn empty_list_has_no_parameters(#[case] raw: &str) {
        assert!(parse_parameter_list(raw).is_empty());
    }

    #[test]
    fn list_keeps_declaration_order() {
        let params = parse_parameter_list(" a: number, b , c: string = x ");
        assert_eq!(
            params,
            vec![
                param("a", Some("number")),
                param("b", None),
                param("c", Some("string")),
            ]
        );
    }

    #[test]
    fn trailing_comma_does_not_create_parameter() {
        let params = parse_parameter_list("a: number,");
        assert_eq!(params, vec![param("a", Some("number"))]);
    }
}
