//! Live invocation runtime settings.

use serde::{Deserialize, Serialize};

fn default_node_binary() -> String {
    "node".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// Node.js executable used to load the compiled module.
    #[serde(default = "default_node_binary")]
    pub node_binary: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            node_binary: default_node_binary(),
        }
    }
}
