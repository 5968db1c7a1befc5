use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, CookieConfig};

/// A cookie as the console persists it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub expires: DateTime<Utc>,
}

impl Cookie {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Render as a `Set-Cookie` header value.
    pub fn to_set_cookie_header(&self) -> String {
        format!(
            "{}={}; Domain={}; Path=/; Expires={}",
            self.name,
            urlencoding::encode(&self.value),
            self.domain,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT")
        )
    }
}

/// Scope and lifetime applied to every token cookie we issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub name: String,
    pub domain: String,
    pub ttl: Duration,
}

impl CookieOptions {
    pub fn from_config(config: &CookieConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            name: config.name.clone(),
            domain: cookie_domain(&config.hostname),
            ttl: config.ttl()?,
        })
    }

    /// A fresh cookie carrying `value`, expiring one ttl from `now`.
    /// Saturates at the latest representable instant.
    pub fn issue_at(&self, value: &str, now: DateTime<Utc>) -> Cookie {
        Cookie {
            name: self.name.clone(),
            value: value.to_string(),
            domain: self.domain.clone(),
            expires: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn issue(&self, value: &str) -> Cookie {
        self.issue_at(value, Utc::now())
    }
}

impl Default for CookieOptions {
    fn default() -> Self {
        let config = CookieConfig::default();
        Self {
            domain: cookie_domain(&config.hostname),
            name: config.name,
            ttl: Duration::hours(2),
        }
    }
}

/// The domain a cookie is scoped to for the given hostname.
///
/// Local hosts keep their hostname; anything else is widened to its parent
/// domain (everything from the first dot) so sibling console apps share it.
pub fn cookie_domain(hostname: &str) -> String {
    if hostname.starts_with("127.0.0.1") || hostname.starts_with("localhost") {
        return hostname.to_string();
    }
    match hostname.find('.') {
        Some(dot) => hostname[dot..].to_string(),
        None => hostname.to_string(),
    }
}
