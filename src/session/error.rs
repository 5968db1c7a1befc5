use thiserror::Error;

use crate::client::ApiError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// Why a session action failed. Backend failures are passed through as-is.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
