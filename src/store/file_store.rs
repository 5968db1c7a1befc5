use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;
use tracing::debug;

use super::base::{StoreError, TokenStore};
use super::cookie::Cookie;

/// Cookies persisted as a JSON object (name -> cookie) in a single file,
/// so a session survives between CLI invocations.
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<HashMap<String, Cookie>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, cookies: &HashMap<String, Cookie>) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Replaced atomically: written beside the target, then renamed over it.
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, cookies)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!("Saved {} cookie(s) to {}", cookies.len(), self.path.display());
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, name: &str) -> Result<Option<Cookie>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(name).filter(|c| !c.is_expired()))
    }

    fn set(&self, cookie: Cookie) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut cookies = self.load()?;
        cookies.retain(|_, c| !c.is_expired());
        cookies.insert(cookie.name.clone(), cookie);
        self.save(&cookies)
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut cookies = self.load()?;
        if cookies.remove(name).is_some() {
            self.save(&cookies)?;
        }
        Ok(())
    }

    fn cookies(&self) -> Result<Vec<Cookie>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self
            .load()?
            .into_values()
            .filter(|c| !c.is_expired())
            .collect())
    }
}
