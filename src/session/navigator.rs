use std::sync::{PoisonError, RwLock};

use tracing::info;

/// Moves the console to another location, replacing the current history entry.
pub trait Navigator: Send + Sync {
    fn replace(&self, location: &str);
}

/// The login page, optionally remembering where to go after signing in.
pub fn login_location(redirect: Option<&str>) -> String {
    match redirect {
        Some(redirect) if !redirect.is_empty() => {
            format!("/login?redirect={}", urlencoding::encode(redirect))
        }
        _ => "/login".to_string(),
    }
}

/// A navigator with no UI behind it: it logs and remembers the current location.
#[derive(Default)]
pub struct TracingNavigator {
    current: RwLock<Option<String>>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for TracingNavigator {
    fn replace(&self, location: &str) {
        info!(
            event_name = "session.navigation",
            event_domain = "session",
            location,
            "navigating"
        );
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(location.to_string());
    }
}
