//! # snap-runtime
//!
//! Live invocation of a module's exported functions.
//!
//! Generation needs one real return value per function to embed as the
//! expected result. This crate models that as two traits: a
//! [`ModuleLoader`] resolves a module path once per run, and the resulting
//! [`LoadedModule`] invokes exports by name with synthesized arguments.
//!
//! Implementations:
//! - [`NodeRuntime`]: requires the compiled module in a `node` subprocess
//! - [`NativeModule`]: Rust closures registered by export name

mod error;
mod native;
mod node;
mod protocol;

pub use error::RuntimeError;
pub use native::{NativeFn, NativeModule};
pub use node::{NodeModule, NodeRuntime};

use std::path::Path;

use snap_core::{GeneratedArgument, InvocationValue};

/// Resolves a module path into something that can be invoked.
pub trait ModuleLoader {
    type Module: LoadedModule;

    /// Load the module at `module_path` (directory plus stem, no extension).
    ///
    /// # Errors
    /// Returns `RuntimeError::ModuleNotFound` if nothing loadable exists there.
    fn load(&self, module_path: &Path) -> Result<Self::Module, RuntimeError>;
}

/// A loaded module whose exports can be called.
pub trait LoadedModule {
    /// Call `export` with `args` and capture its return value.
    ///
    /// # Errors
    /// Returns `RuntimeError::MissingExport` if `export` is not a callable
    /// export, or `RuntimeError::InvocationFailed` if the call throws.
    fn invoke(
        &self,
        export: &str,
        args: &[GeneratedArgument],
    ) -> Result<InvocationValue, RuntimeError>;
}
