use thiserror::Error;

/// Errors raised while talking to the console backend.
///
/// Every variant carries the original cause. Nothing is retried or rewritten
/// on the way up to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
