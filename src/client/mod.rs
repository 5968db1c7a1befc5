pub mod http_client;
pub mod error;
pub mod reqwest_client;

#[cfg(test)]
pub(crate) mod testing;

// Re-export so callers can do "use crate::client::*;"
pub use http_client::*;
pub use error::*;
pub use reqwest_client::ReqwestClient;
