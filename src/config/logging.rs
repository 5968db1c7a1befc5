use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// LoggingConfig controls how we initialize tracing/logging.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String, // e.g. "info", "debug", "warn"
    #[serde(default = "default_format")]
    pub format: String, // e.g. "json", "console"
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "console".to_string()
}

fn default_service_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            service_name: default_service_name(),
            service_version: default_service_version(),
        }
    }
}
