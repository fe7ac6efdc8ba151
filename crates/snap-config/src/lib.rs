//! # snap-config
//!
//! Layered configuration loading for snapgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SNAPGEN_*` prefix, `__` as separator)
//! 2. An explicit config file passed by the caller (`--config`)
//! 3. Project-level `.snapgen/config.toml`
//! 4. User-level `~/.config/snapgen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SNAPGEN_GENERATOR__TEST_FOLDER_NAME` -> `generator.test_folder_name`,
//! `SNAPGEN_RUNTIME__NODE_BINARY` -> `runtime.node_binary`.
//!
//! # Usage
//!
//! ```no_run
//! use snap_config::SnapConfig;
//!
//! let config = SnapConfig::load_with_dotenv(None).expect("config");
//! println!("tests go to {}", config.generator.test_folder_name);
//! ```

mod error;
mod generator;
mod runtime;

pub use error::ConfigError;
pub use generator::GeneratorConfig;
pub use runtime::RuntimeConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SNAPGEN_";
const PROJECT_CONFIG: &str = ".snapgen/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnapConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl SnapConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(extra_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for values path resolution cannot work with.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        if self.runtime.node_binary.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "runtime.node_binary".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("snapgen").join("config.toml"))
    }
}
