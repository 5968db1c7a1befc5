use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::base::{StoreError, TokenStore};
use super::cookie::Cookie;

/// Cookies that live as long as the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    cookies: RwLock<HashMap<String, Cookie>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str) -> Result<Option<Cookie>, StoreError> {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        Ok(cookies.get(name).filter(|c| !c.is_expired()).cloned())
    }

    fn set(&self, cookie: Cookie) -> Result<(), StoreError> {
        let mut cookies = self.cookies.write().unwrap_or_else(PoisonError::into_inner);
        cookies.insert(cookie.name.clone(), cookie);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        let mut cookies = self.cookies.write().unwrap_or_else(PoisonError::into_inner);
        cookies.remove(name);
        Ok(())
    }

    fn cookies(&self) -> Result<Vec<Cookie>, StoreError> {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        Ok(cookies.values().filter(|c| !c.is_expired()).cloned().collect())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
