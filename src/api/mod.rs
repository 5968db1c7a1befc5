//! The console backend services, one repository per resource.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::client::HttpClient;
use crate::repository::{Repository, RestResource};

/// Builds `/{service}/{version}/{name}`.
pub fn resource_path(service: &str, version: &str, name: &str) -> String {
    format!("/{}/{}/{}", service, version, name)
}

/// The repositories the session store talks to.
pub struct ServiceApi {
    /// `POST /{cloud}/{version}/login`
    pub login: Repository,
    /// `GET /{cloud}/{version}/token`
    pub token: Repository,
    /// `GET /{cloud_tenant}/{version}/menus`
    pub menus: Repository,
}

impl ServiceApi {
    pub fn new(config: &ApiConfig, client: Arc<dyn HttpClient>) -> Self {
        let cloud = |name| RestResource::new(resource_path(&config.cloud, &config.version, name));
        let tenant =
            |name| RestResource::new(resource_path(&config.cloud_tenant, &config.version, name));

        Self {
            login: Repository::new(cloud("login"), client.clone()),
            token: Repository::new(cloud("token"), client.clone()),
            menus: Repository::new(tenant("menus"), client),
        }
    }
}
