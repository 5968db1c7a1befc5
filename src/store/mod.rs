pub mod base;
pub mod cookie;
pub mod file_store;
pub mod memory_store;

// Re-export the primary store items so code outside can do
// "use crate::store::{TokenStore, create_token_store};"
pub use base::{create_token_store, StoreError, TokenStore};
pub use cookie::{cookie_domain, Cookie, CookieOptions};
