use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::resource::{Resource, RestResource};
use crate::client::{ApiResult, HttpClient, RequestOptions};

/// CRUD operations for one resource, bound to an HTTP client.
///
/// Every operation forwards exactly once to the client. Failures come back
/// exactly as the client produced them.
pub struct Repository<R = RestResource> {
    resource: R,
    client: Arc<dyn HttpClient>,
}

impl<R: Resource> Repository<R> {
    pub fn new(resource: R, client: Arc<dyn HttpClient>) -> Self {
        Self { resource, client }
    }

    pub fn uri(&self) -> String {
        self.resource.uri()
    }

    /// Create a resource.
    pub async fn create(&self, payload: &Value, options: &RequestOptions) -> ApiResult<Value> {
        let uri = self.uri();
        debug!("Repository create: POST {}", uri);
        self.client.post(&uri, payload, options).await
    }

    /// Get the list of the resource.
    pub async fn list(&self, options: &RequestOptions) -> ApiResult<Value> {
        let uri = self.uri();
        debug!("Repository list: GET {}", uri);
        self.client.get(&uri, options).await
    }

    pub async fn index(&self, options: &RequestOptions) -> ApiResult<Value> {
        self.list(options).await
    }

    /// Get a resource by id.
    pub async fn detail(&self, id: &str, options: &RequestOptions) -> ApiResult<Value> {
        let uri = self.resource.item_uri(id);
        debug!("Repository detail: GET {}", uri);
        self.client.get(&uri, options).await
    }

    pub async fn show(&self, id: &str, options: &RequestOptions) -> ApiResult<Value> {
        self.detail(id, options).await
    }

    /// Update a resource. The verb and uri are chosen by the resource.
    pub async fn update(
        &self,
        id: &str,
        payload: &Value,
        options: &RequestOptions,
    ) -> ApiResult<Value> {
        let (method, uri) = self.resource.update_route(id);
        debug!("Repository update: {} {}", method, uri);
        self.client.request(method, &uri, Some(payload), options).await
    }

    /// Delete a resource by id.
    pub async fn delete(&self, id: &str, options: &RequestOptions) -> ApiResult<Value> {
        let uri = self.resource.item_uri(id);
        debug!("Repository delete: DELETE {}", uri);
        self.client.delete(&uri, options).await
    }
}
