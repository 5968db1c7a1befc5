use async_trait::async_trait;
use http::Method;
use serde_json::Value;

use super::error::ApiResult;

/// Extra per-request settings passed through to the HTTP client untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Query string pairs, appended after any query already present in the uri.
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Looks up the first query parameter with the given key.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The seam between repositories and the network.
///
/// Implementors only provide `request`; the verb helpers forward to it.
/// Responses are the decoded JSON body (`Value::Null` for an empty body).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> ApiResult<Value>;

    async fn get(&self, uri: &str, options: &RequestOptions) -> ApiResult<Value> {
        self.request(Method::GET, uri, None, options).await
    }

    async fn post(&self, uri: &str, payload: &Value, options: &RequestOptions) -> ApiResult<Value> {
        self.request(Method::POST, uri, Some(payload), options).await
    }

    async fn put(&self, uri: &str, payload: &Value, options: &RequestOptions) -> ApiResult<Value> {
        self.request(Method::PUT, uri, Some(payload), options).await
    }

    async fn delete(&self, uri: &str, options: &RequestOptions) -> ApiResult<Value> {
        self.request(Method::DELETE, uri, None, options).await
    }
}
