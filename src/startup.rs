//! Session wiring.
//!
//! Builds the cookie store, the HTTP client and the service repositories from
//! the configuration and hands them to a `SessionStore`.

use std::sync::Arc;

use tracing::info;

use crate::api::ServiceApi;
use crate::config::ConfigV1;
use crate::client::ReqwestClient;
use crate::session::{Navigator, SessionError, SessionSettings, SessionStore};
use crate::store::create_token_store;

/// Creates a session store talking to the configured backend.
///
/// The HTTP client sends the stored cookies with every request, so a token
/// persisted by an earlier run authenticates this one.
///
/// # Errors
///
/// Returns an error if the cookie settings or store are misconfigured, or the
/// HTTP client cannot be built.
pub fn build_session(
    config: &ConfigV1,
    navigator: Arc<dyn Navigator>,
) -> Result<SessionStore, SessionError> {
    let tokens = create_token_store(&config.store)?;
    let client = ReqwestClient::new(&config.api)?.with_cookies(tokens.clone());
    let api = Arc::new(ServiceApi::new(&config.api, Arc::new(client)));

    info!(
        "Session store ready for '{}' (app '{}', persistent cookies: {})",
        config.api.base_url,
        config.app_id,
        tokens.is_persistent()
    );

    Ok(SessionStore::new(
        api,
        tokens,
        navigator,
        SessionSettings::from_config(config)?,
    ))
}
