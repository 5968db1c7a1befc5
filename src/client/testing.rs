//! An in-process `HttpClient` that records every call, used by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::Method;
use serde_json::Value;

use super::http_client::{HttpClient, RequestOptions};
use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub uri: String,
    pub body: Option<Value>,
    pub options: RequestOptions,
}

type Reply = Result<Value, (u16, String)>;

/// Shared, ordered log of things that happened during a test.
pub type Journal = Arc<Mutex<Vec<String>>>;

#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<Vec<(Method, String, Reply)>>,
    journal: Option<Journal>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    /// Answer `method uri` with the given JSON body.
    pub fn reply(&self, method: Method, uri: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .push((method, uri.to_string(), Ok(body)));
    }

    /// Answer `method uri` with a non-2xx status.
    pub fn fail(&self, method: Method, uri: &str, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push((method, uri.to_string(), Err((status, body.to_string()))));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, uri: &str) -> usize {
        self.calls().iter().filter(|c| c.uri == uri).count()
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.clone(),
            uri: uri.to_string(),
            body: body.cloned(),
            options: options.clone(),
        });
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(format!("{} {}", method, uri));
        }

        let replies = self.replies.lock().unwrap();
        match replies.iter().find(|(m, u, _)| *m == method && u == uri) {
            Some((_, _, Ok(value))) => Ok(value.clone()),
            Some((_, _, Err((status, body)))) => Err(ApiError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(Value::Null),
        }
    }
}
