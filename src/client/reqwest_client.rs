use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::http_client::{HttpClient, RequestOptions};
use super::error::{ApiError, ApiResult};
use crate::config::ApiConfig;
use crate::store::TokenStore;

/// `HttpClient` backed by reqwest, resolving resource paths against a base URL.
///
/// When a cookie store is attached, its live cookies are sent with every
/// request the way a browser would send them to the console backend.
pub struct ReqwestClient {
    base_url: String,
    client: reqwest::Client,
    cookies: Option<Arc<dyn TokenStore>>,
}

impl ReqwestClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()?;
        info!(
            "Creating console API client for '{}' (timeout {} ms)",
            config.base_url, config.timeout_in_ms
        );
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            cookies: None,
        })
    }

    /// Send the cookies held by `store` along with every request.
    pub fn with_cookies(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.cookies = Some(store);
        self
    }

    fn url(&self, uri: &str) -> String {
        format!("{}{}", self.base_url, uri)
    }

    fn cookie_header(&self) -> Option<String> {
        let store = self.cookies.as_ref()?;
        match store.cookies() {
            Ok(cookies) if !cookies.is_empty() => Some(
                cookies
                    .iter()
                    .map(|c| format!("{}={}", c.name, c.value))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            Ok(_) => None,
            Err(e) => {
                warn!("Unable to read cookies for outgoing request: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> ApiResult<Value> {
        let url = self.url(uri);
        let request_id = Uuid::new_v4().to_string();

        debug!(
            event_name = "http.request.sent",
            event_domain = "http",
            method = method.as_str(),
            url = url.as_str(),
            request_id = request_id.as_str(),
            "sending console API request"
        );

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("x-request-id", request_id.as_str());
        if !options.params.is_empty() {
            request = request.query(&options.params);
        }
        for (key, value) in &options.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(cookie) = self.cookie_header() {
            request = request.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                event_name = "http.response.rejected",
                event_domain = "http",
                method = method.as_str(),
                url = url.as_str(),
                request_id = request_id.as_str(),
                status = status.as_u16(),
                "console API answered with a non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(
            event_name = "http.response.received",
            event_domain = "http",
            request_id = request_id.as_str(),
            status = status.as_u16(),
            "console API request succeeded"
        );

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
