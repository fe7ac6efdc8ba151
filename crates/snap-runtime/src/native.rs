//! In-process modules backed by Rust closures.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use snap_core::{GeneratedArgument, InvocationValue};

use crate::error::RuntimeError;
use crate::{LoadedModule, ModuleLoader};

/// A native export: receives the synthesized arguments, returns the captured
/// value or an error message standing in for a thrown exception.
pub type NativeFn =
    Arc<dyn Fn(&[GeneratedArgument]) -> Result<InvocationValue, String> + Send + Sync>;

/// A module whose exports are registered Rust closures.
///
/// Loading always succeeds and yields the same exports regardless of path.
#[derive(Clone, Default)]
pub struct NativeModule {
    name: String,
    exports: HashMap<String, NativeFn>,
}

impl NativeModule {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: HashMap::new(),
        }
    }

    /// Register `f` under `export`, replacing any previous registration.
    #[must_use]
    pub fn with_export<F>(mut self, export: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[GeneratedArgument]) -> Result<InvocationValue, String> + Send + Sync + 'static,
    {
        self.exports.insert(export.into(), Arc::new(f));
        self
    }

    #[must_use]
    pub fn has_export(&self, export: &str) -> bool {
        self.exports.contains_key(export)
    }
}

impl fmt::Debug for NativeModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exports: Vec<&str> = self.exports.keys().map(String::as_str).collect();
        exports.sort_unstable();
        f.debug_struct("NativeModule")
            .field("name", &self.name)
            .field("exports", &exports)
            .finish()
    }
}

impl ModuleLoader for NativeModule {
    type Module = Self;

    fn load(&self, module_path: &Path) -> Result<Self, RuntimeError> {
        tracing::debug!(module = %self.name, path = %module_path.display(), "loading native module");
        Ok(self.clone())
    }
}

impl LoadedModule for NativeModule {
    fn invoke(
        &self,
        export: &str,
        args: &[GeneratedArgument],
    ) -> Result<InvocationValue, RuntimeError> {
        let f = self
            .exports
            .get(export)
            .ok_or_else(|| RuntimeError::MissingExport {
                export: export.to_string(),
                module: self.name.clone(),
            })?;
        f(args).map_err(|message| RuntimeError::InvocationFailed {
            export: export.to_string(),
            message,
        })
    }
}
