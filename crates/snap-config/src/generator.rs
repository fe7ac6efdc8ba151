//! Test generation settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_test_folder_name() -> String {
    "tests".to_string()
}

fn default_test_file_extension() -> String {
    "js".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Directory, relative to the source file's directory, that receives the
    /// generated test file. May contain path separators.
    #[serde(default = "default_test_folder_name")]
    pub test_folder_name: String,

    /// Extension of the generated file (`<stem>.test.<ext>`).
    #[serde(default = "default_test_file_extension")]
    pub test_file_extension: String,

    /// Artificial delay before the source file is read.
    #[serde(default)]
    pub read_delay_ms: u64,

    /// Fixed seed for argument synthesis. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            test_folder_name: default_test_folder_name(),
            test_file_extension: default_test_file_extension(),
            read_delay_ms: 0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check the folder name and extension are usable for path resolution.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an empty or absolute
    /// `test_folder_name`, or an empty or dotted `test_file_extension`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.test_folder_name.trim().is_empty() {
            return Err(invalid("generator.test_folder_name", "must not be empty"));
        }
        if Path::new(&self.test_folder_name).has_root() {
            return Err(invalid(
                "generator.test_folder_name",
                "must be relative to the source file's directory",
            ));
        }
        if self.test_file_extension.is_empty() {
            return Err(invalid("generator.test_file_extension", "must not be empty"));
        }
        if self.test_file_extension.starts_with('.') {
            return Err(invalid(
                "generator.test_file_extension",
                "must not start with '.'",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneratorConfig::default();
        assert_eq!(config.test_folder_name, "tests");
        assert_eq!(config.test_file_extension, "js");
        assert_eq!(config.read_delay_ms, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_folder_is_valid() {
        let config = GeneratorConfig {
            test_folder_name: "tests/unit/generated".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn absolute_folder_is_rejected() {
        let config = GeneratorConfig {
            test_folder_name: "/tmp/tests".to_string(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("test_folder_name"));
    }

    #[test]
    fn blank_folder_is_rejected() {
        let config = GeneratorConfig {
            test_folder_name: "  ".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let config = GeneratorConfig {
            test_file_extension: ".js".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
