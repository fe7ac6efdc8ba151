//! Wire format between the Node bridge script and the runtime.
//!
//! The bridge shares stdout with the module under test, so the result is
//! the last line starting with [`RESULT_MARKER`].

use serde::Deserialize;
use snap_core::{GeneratedArgument, InvocationValue};

use crate::error::RuntimeError;

/// Tagged value the bridge prints on stdout.
///
/// Numbers travel as their JavaScript string form so `NaN` and the
/// infinities survive JSON.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
enum WireValue {
    Number(String),
    String(String),
    Bool(bool),
    Null,
    Undefined,
    Opaque(String),
}

/// Encode synthesized arguments as a JSON array; `Omitted` becomes `null`,
/// which the bridge turns back into `undefined`.
pub fn encode_args(args: &[GeneratedArgument]) -> String {
    let values: Vec<serde_json::Value> = args
        .iter()
        .map(|arg| match arg {
            GeneratedArgument::Numeric(n) => serde_json::Value::from(*n),
            GeneratedArgument::Omitted => serde_json::Value::Null,
        })
        .collect();
    serde_json::Value::Array(values).to_string()
}

/// Prefix of the line carrying the tagged result.
pub const RESULT_MARKER: &str = "__snapgen_result__:";

/// Decode the bridge's full stdout, skipping whatever the module printed.
pub fn decode_response(stdout: &str) -> Result<InvocationValue, RuntimeError> {
    let line = stdout
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix(RESULT_MARKER))
        .ok_or_else(|| RuntimeError::Protocol(format!("no result in output: {stdout}")))?;
    decode_value(line)
}

/// Decode one tagged value.
pub fn decode_value(raw: &str) -> Result<InvocationValue, RuntimeError> {
    let wire: WireValue = serde_json::from_str(raw.trim())
        .map_err(|e| RuntimeError::Protocol(format!("{e}: {raw}")))?;

    Ok(match wire {
        WireValue::Number(repr) => InvocationValue::Number(parse_js_number(&repr)?),
        WireValue::String(s) => InvocationValue::String(s),
        WireValue::Bool(b) => InvocationValue::Bool(b),
        WireValue::Null => InvocationValue::Null,
        WireValue::Undefined => InvocationValue::Undefined,
        WireValue::Opaque(repr) => InvocationValue::Opaque(repr),
    })
}

fn parse_js_number(repr: &str) -> Result<f64, RuntimeError> {
    match repr {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        other => other
            .parse::<f64>()
            .map_err(|e| RuntimeError::Protocol(format!("bad number '{other}': {e}"))),
    }
}
