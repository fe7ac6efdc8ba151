//! Runtime values that flow through a generation run.

use serde::{Deserialize, Serialize};

/// A synthesized argument, positionally paired with a parameter descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GeneratedArgument {
    /// A generated integer for a `number` parameter.
    Numeric(i64),
    /// Placeholder for any parameter the synthesizer has no value for.
    Omitted,
}

impl GeneratedArgument {
    #[must_use]
    pub const fn as_numeric(self) -> Option<i64> {
        match self {
            Self::Numeric(value) => Some(value),
            Self::Omitted => None,
        }
    }
}

/// The captured return value of one live invocation.
///
/// Opaque to everything except the renderer, which turns it into a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InvocationValue {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
    Undefined,
    /// Anything without a literal form (objects, functions); holds the
    /// runtime's own textual representation.
    Opaque(String),
}

impl From<f64> for InvocationValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for InvocationValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for InvocationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for InvocationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for InvocationValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
