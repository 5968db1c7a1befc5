use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the console backend lives and how its service paths are built.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ApiConfig {
    pub base_url: String,
    /// Path segment of the platform service (login, token).
    #[serde(default = "default_cloud")]
    pub cloud: String,
    /// Path segment of the tenant service (menus).
    #[serde(default = "default_cloud_tenant")]
    pub cloud_tenant: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

fn default_cloud() -> String {
    "deepexi-cloud".to_string()
}

fn default_cloud_tenant() -> String {
    "deepexi-tenant".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_timeout_in_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            cloud: default_cloud(),
            cloud_tenant: default_cloud_tenant(),
            version: default_version(),
            timeout_in_ms: default_timeout_in_ms(),
        }
    }
}
