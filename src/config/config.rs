use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::api::ApiConfig;
use super::logging::LoggingConfig;
use super::store::{CookieConfig, StoreConfig};

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: backend location, cookie scope, persistence and logging.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    pub api: ApiConfig,
    #[serde(default)]
    pub cookie: CookieConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub meta: MetaConfig,
    /// Application identifier sent with the menu request. `APP_ID` overrides it.
    #[serde(default)]
    pub app_id: String,
    #[serde(default = "default_menu_code")]
    pub menu_code: String,
}

/// Static console metadata exposed through the session state.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct MetaConfig {
    #[serde(default)]
    pub title: String,
    pub logo: Option<String>,
}

fn default_menu_code() -> String {
    "MAIN".to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error loading configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid cookie.ttl_seconds {0}. Must be between 1 and 31536000 (one year)")]
    InvalidCookieTtl(i64),

    #[error("Error rendering configuration schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// The layered configuration sources: the YAML file, then `APP_ID`, then
/// `CONSOLE_`-prefixed variables (nested keys separated by `__`).
pub fn config_sources(path: impl AsRef<Path>) -> Figment {
    Figment::new()
        .merge(Yaml::file(path.as_ref()))
        .merge(Env::raw().only(&["APP_ID"]))
        .merge(Env::prefixed("CONSOLE_").split("__"))
}

/// Extract a `ConfigV1` out of any figment, migrating older versions here when necessary.
pub fn extract(figment: &Figment) -> Result<ConfigV1, ConfigError> {
    let config = match figment.extract::<Config>()? {
        Config::ConfigV1(c) => c,
    };
    config.cookie.ttl()?;
    Ok(config)
}

/// Load config from a YAML file, applying environment overrides.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigV1, ConfigError> {
    extract(&config_sources(path))
}

/// Render the JSON schema for the configuration.
pub fn schema_json() -> Result<String, ConfigError> {
    let schema = schema_for!(Config);
    Ok(serde_json::to_string_pretty(&schema)?)
}
