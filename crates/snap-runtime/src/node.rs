//! Node.js subprocess runtime.
//!
//! Each invocation runs `node -e <bridge> <module> <export> <args>`. The
//! bridge requires the compiled module, calls the export and prints a
//! tagged JSON value after the result marker (see `protocol`). Anything the
//! module itself prints lands before the marker and is ignored.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use snap_core::{GeneratedArgument, InvocationValue};

use crate::error::RuntimeError;
use crate::protocol::{decode_response, encode_args};
use crate::{LoadedModule, ModuleLoader};

/// Compiled module extensions tried in order when loading.
const MODULE_EXTENSIONS: &[&str] = &["js", "cjs"];

/// Bridge exit code for an export that is missing or not a function.
const MISSING_EXPORT_EXIT: i32 = 3;

const BRIDGE: &str = r#"
const [modulePath, exportName, rawArgs] = process.argv.slice(1);
const mod = require(modulePath);
const fn = mod[exportName];
if (typeof fn !== "function") {
    process.stderr.write(`'${exportName}' is not a function`);
    process.exit(3);
}
const args = JSON.parse(rawArgs).map((a) => (a === null ? undefined : a));
const result = fn.apply(null, args);
const encode = (v) => {
    switch (typeof v) {
        case "number": return { type: "number", value: Object.is(v, -0) ? "-0" : String(v) };
        case "string": return { type: "string", value: v };
        case "boolean": return { type: "bool", value: v };
        case "undefined": return { type: "undefined" };
        case "bigint": return { type: "opaque", value: `${v}n` };
        default:
            if (v === null) return { type: "null" };
            try {
                const json = JSON.stringify(v);
                return { type: "opaque", value: json === undefined ? String(v) : json };
            } catch (_) {
                return { type: "opaque", value: String(v) };
            }
    }
};
process.stdout.write("\n__snapgen_result__:" + JSON.stringify(encode(result)) + "\n");
"#;

/// Loads compiled CommonJS modules through a `node` executable.
#[derive(Debug, Clone)]
pub struct NodeRuntime {
    binary: String,
}

impl Default for NodeRuntime {
    fn default() -> Self {
        Self::new("node")
    }
}

impl NodeRuntime {
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Whether the configured binary can be executed at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }
}

impl ModuleLoader for NodeRuntime {
    type Module = NodeModule;

    fn load(&self, module_path: &Path) -> Result<NodeModule, RuntimeError> {
        let base = std::path::absolute(module_path)?;
        let file = MODULE_EXTENSIONS
            .iter()
            .map(|ext| with_appended_extension(&base, ext))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| RuntimeError::ModuleNotFound(base.clone()))?;

        tracing::debug!(module = %file.display(), "resolved compiled module");
        Ok(NodeModule {
            binary: self.binary.clone(),
            file,
        })
    }
}

/// A compiled module file, invoked one export per subprocess.
#[derive(Debug, Clone)]
pub struct NodeModule {
    binary: String,
    file: PathBuf,
}

impl NodeModule {
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl LoadedModule for NodeModule {
    fn invoke(
        &self,
        export: &str,
        args: &[GeneratedArgument],
    ) -> Result<InvocationValue, RuntimeError> {
        let encoded = encode_args(args);
        tracing::debug!(export, args = %encoded, "invoking export via node");

        let output = Command::new(&self.binary)
            .arg("-e")
            .arg(BRIDGE)
            .arg(&self.file)
            .arg(export)
            .arg(&encoded)
            .output()?;

        if output.status.code() == Some(MISSING_EXPORT_EXIT) {
            return Err(RuntimeError::MissingExport {
                export: export.to_string(),
                module: self.file.display().to_string(),
            });
        }
        if !output.status.success() {
            return Err(RuntimeError::InvocationFailed {
                export: export.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        decode_response(&String::from_utf8_lossy(&output.stdout))
    }
}

/// `dir/math.utils` + `js` -> `dir/math.utils.js` (never replaces an extension).
fn with_appended_extension(base: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = base.as_os_str().to_os_string();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}
