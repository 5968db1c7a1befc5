use chrono::Duration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// Longest lifetime accepted for the session cookie (one year).
pub const MAX_COOKIE_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Where the session cookie lives between runs.
/// - enabled: if false, cookies only live in memory for the lifetime of the process.
/// - backend: the persistent backend (a JSON file, etc.).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct StoreConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StoreBackend>,
}

/// The existing store backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreBackend {
    #[serde(rename = "file")]
    File(FileStoreConfig),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct FileStoreConfig {
    pub path: String,
}

/// How the session token cookie is scoped.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Hostname the console is served from; the cookie domain derives from it.
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_ttl_seconds() -> i64 {
    2 * 60 * 60
}

impl CookieConfig {
    /// The validated cookie lifetime. Must be positive and at most one year.
    pub fn ttl(&self) -> Result<Duration, ConfigError> {
        if self.ttl_seconds <= 0 || self.ttl_seconds > MAX_COOKIE_TTL_SECONDS {
            return Err(ConfigError::InvalidCookieTtl(self.ttl_seconds));
        }
        Duration::try_seconds(self.ttl_seconds)
            .ok_or(ConfigError::InvalidCookieTtl(self.ttl_seconds))
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            hostname: default_hostname(),
            ttl_seconds: default_ttl_seconds(),
        }
    }
}
