//! Function signature descriptors produced by signature extraction.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Name the extractor derives for `export default function (...)`.
///
/// Anonymous default exports have no callable name, so a descriptor carrying
/// this name is never constructed.
pub const ANONYMOUS_EXPORT_MARKER: &str = "function";

/// The single declared type that receives synthesized numeric arguments.
const NUMBER_TYPE: &str = "number";

/// One parameter of an exported function, in declaration position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    declared_type: Option<String>,
}

impl ParameterDescriptor {
    /// Create a parameter descriptor.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        declared_type: Option<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "parameter name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            declared_type: declared_type.filter(|t| !t.is_empty()),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The annotation token, or `None` when the parameter was unannotated.
    #[must_use]
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    /// Whether the parameter is annotated exactly as `number`.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.declared_type() == Some(NUMBER_TYPE)
    }
}

/// One exported function: its name and positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    name: String,
    parameters: Vec<ParameterDescriptor>,
}

impl FunctionDescriptor {
    /// Create a function descriptor.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if `name` is empty or equals
    /// [`ANONYMOUS_EXPORT_MARKER`].
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ParameterDescriptor>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "function name must not be empty".to_string(),
            ));
        }
        if name == ANONYMOUS_EXPORT_MARKER {
            return Err(CoreError::Validation(format!(
                "'{ANONYMOUS_EXPORT_MARKER}' is the anonymous export marker, not a function name"
            )));
        }
        Ok(Self { name, parameters })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// All exported functions of one source module, in source order.
///
/// Built once per generation run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleMetadata {
    functions: Vec<FunctionDescriptor>,
}

impl ModuleMetadata {
    #[must_use]
    pub const fn new(functions: Vec<FunctionDescriptor>) -> Self {
        Self { functions }
    }

    #[must_use]
    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    /// Function names in extraction order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(FunctionDescriptor::name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionDescriptor> {
        self.functions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl From<Vec<FunctionDescriptor>> for ModuleMetadata {
    fn from(functions: Vec<FunctionDescriptor>) -> Self {
        Self::new(functions)
    }
}

impl<'a> IntoIterator for &'a ModuleMetadata {
    type Item = &'a FunctionDescriptor;
    type IntoIter = std::slice::Iter<'a, FunctionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parameter_rejects_empty_name() {
        assert!(ParameterDescriptor::new("", None).is_err());
    }

    #[test]
    fn parameter_empty_type_is_absent() {
        let p = ParameterDescriptor::new("x", Some(String::new())).unwrap();
        assert_eq!(p.declared_type(), None);
    }

    #[test]
    fn only_exact_number_is_numeric() {
        let n = ParameterDescriptor::new("a", Some("number".into())).unwrap();
        let s = ParameterDescriptor::new("b", Some("string".into())).unwrap();
        let big = ParameterDescriptor::new("c", Some("Number".into())).unwrap();
        let none = ParameterDescriptor::new("d", None).unwrap();
        assert!(n.is_numeric());
        assert!(!s.is_numeric());
        assert!(!big.is_numeric());
        assert!(!none.is_numeric());
    }

    #[test]
    fn function_rejects_anonymous_marker() {
        let err = FunctionDescriptor::new("function", Vec::new()).unwrap_err();
        assert!(err.to_string().contains("anonymous"));
    }

    #[test]
    fn function_rejects_empty_name() {
        assert!(FunctionDescriptor::new("", Vec::new()).is_err());
    }

    #[test]
    fn metadata_names_keep_order() {
        let metadata = ModuleMetadata::from(vec![
            FunctionDescriptor::new("sub", Vec::new()).unwrap(),
            FunctionDescriptor::new("add", Vec::new()).unwrap(),
        ]);
        assert_eq!(metadata.names(), vec!["sub", "add"]);
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn metadata_serializes_as_plain_array() {
        let metadata = ModuleMetadata::from(vec![
            FunctionDescriptor::new(
                "square",
                vec![ParameterDescriptor::new("x", Some("number".into())).unwrap()],
            )
            .unwrap(),
        ]);
        let value = serde_json::to_value(&metadata).expect("serialize metadata");
        assert_eq!(
            value,
            serde_json::json!([
                {"name": "square", "parameters": [{"name": "x", "declared_type": "number"}]}
            ])
        );
    }
}
