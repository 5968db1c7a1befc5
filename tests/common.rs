#![allow(dead_code)]

use std::sync::Arc;

use console_session::config::{extract, ConfigV1};
use console_session::session::{SessionStore, TracingNavigator};
use console_session::startup::build_session;
use figment::{
    providers::{Format, Yaml},
    Figment,
};

pub const LOGIN_PATH: &str = "/deepexi-cloud/v1/login";
pub const TOKEN_PATH: &str = "/deepexi-cloud/v1/token";
pub const MENUS_PATH: &str = "/deepexi-tenant/v1/menus";

/// A config pointing at `base_url`, with cookies in memory unless `cookie_file` is given.
pub fn test_config(base_url: &str, cookie_file: Option<&str>) -> ConfigV1 {
    let store = match cookie_file {
        Some(path) => format!("store:\n  enabled: true\n  type: file\n  path: \"{}\"\n", path),
        None => "store:\n  enabled: false\n".to_string(),
    };
    let yaml = format!(
        r#"
version: "1.0.0"
app_id: "console-app"
api:
  base_url: "{}"
  timeout_in_ms: 3000
cookie:
  hostname: "admin.example.com"
logging:
  level: "debug"
  format: "json"
meta:
  title: "Admin"
{}"#,
        base_url, store
    );

    extract(&Figment::new().merge(Yaml::string(&yaml))).expect("Failed to parse test config YAML")
}

pub fn build(config: &ConfigV1) -> (SessionStore, Arc<TracingNavigator>) {
    let navigator = Arc::new(TracingNavigator::new());
    let store = build_session(config, navigator.clone()).expect("session should build");
    (store, navigator)
}

pub const LOGIN_BODY: &str = r#"{
    "payload": {
        "params": {"nickname": "Eve", "userId": 7},
        "username": "eve",
        "avatar": "https://cdn.example.com/eve.png",
        "tenantId": "tenant-1",
        "token": "token-abc"
    }
}"#;

pub const MENUS_BODY: &str = r#"{
    "payload": [
        {"id": 1, "name": "Dashboard", "pathUrl": "/dashboard", "iconUrl": "dashboard.svg"},
        {"id": 2, "name": "Users", "pathUrl": "/users"},
        {"id": 3, "name": "Settings"}
    ]
}"#;
