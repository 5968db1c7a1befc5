use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::SessionError;
use super::navigator::{login_location, Navigator};
use super::state::SessionState;
use crate::api::ServiceApi;
use crate::config::{ConfigError, ConfigV1, MetaConfig};
use crate::client::{ApiError, RequestOptions};
use crate::models::{Envelope, MenuItem, RawMenu, UserInfo, UserProfile};
use crate::store::{CookieOptions, StoreError, TokenStore};

/// Fixed inputs of the session store, usually taken from the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionSettings {
    pub cookie: CookieOptions,
    pub meta: MetaConfig,
    /// Sent as `appId` with the menu request.
    pub app_id: String,
    /// Sent as `code` with the menu request.
    pub menu_code: String,
}

impl SessionSettings {
    pub fn from_config(config: &ConfigV1) -> Result<Self, ConfigError> {
        Ok(Self {
            cookie: CookieOptions::from_config(&config.cookie)?,
            meta: config.meta.clone(),
            app_id: config.app_id.clone(),
            menu_code: config.menu_code.clone(),
        })
    }
}

/// The console session store.
///
/// State only changes through the mutations (`logout`, `set_header_menu`,
/// `set_user_info`); actions call the backend and then commit through them.
/// The lock is never held across an await.
pub struct SessionStore {
    state: RwLock<SessionState>,
    api: Arc<ServiceApi>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    settings: SessionSettings,
}

/// Pull the `payload` out of a response envelope.
fn decode_payload<T: DeserializeOwned + Default>(response: &Value) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_value(response.clone())?;
    Ok(envelope.into_payload())
}

impl SessionStore {
    pub fn new(
        api: Arc<ServiceApi>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::new(settings.meta.clone())),
            api,
            tokens,
            navigator,
            settings,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -- Getters

    /// A copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    pub fn side_menu(&self) -> Vec<MenuItem> {
        self.read().side_menu()
    }

    pub fn main_menu(&self) -> Vec<MenuItem> {
        self.read().main_menu()
    }

    pub fn user_info(&self) -> UserProfile {
        self.read().user_info()
    }

    /// The persisted session token, if one is set and not expired.
    pub fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .tokens
            .get(&self.settings.cookie.name)?
            .map(|cookie| cookie.value))
    }

    /// A session is authenticated exactly when a token is present.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                warn!("Unable to read the session token: {}", e);
                false
            }
        }
    }

    // -- Mutations

    /// Forget the session: drop the persisted token, reset every field and go
    /// to the login page, remembering `redirect` if given.
    ///
    /// If the token cannot be removed nothing else changes.
    pub fn logout(&self, redirect: Option<&str>) -> Result<(), StoreError> {
        self.tokens.remove(&self.settings.cookie.name)?;
        *self.write() = SessionState::new(self.settings.meta.clone());
        info!(
            event_name = "session.logout",
            event_domain = "session",
            "session cleared"
        );
        self.navigator.replace(&login_location(redirect));
        Ok(())
    }

    pub fn set_header_menu(&self, menus: Vec<RawMenu>) {
        debug!("Committing {} header menu entries", menus.len());
        self.write().header_menu = menus;
    }

    /// Commit a user info payload. A non-empty nickname is preferred over the
    /// username. An absent token removes the persisted one.
    pub fn set_user_info(&self, payload: UserInfo) -> Result<(), StoreError> {
        let cookie_name = &self.settings.cookie.name;
        match payload.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                let cookie = self.settings.cookie.issue(token);
                debug!("Issuing session cookie: {}", cookie.to_set_cookie_header());
                self.tokens.set(cookie)?
            }
            None => self.tokens.remove(cookie_name)?,
        }

        let username = payload.display_name().unwrap_or_default();
        let user_id = payload.user_id().unwrap_or_default();

        let mut state = self.write();
        state.username = username;
        state.avatar = payload.avatar.unwrap_or_default();
        state.tenant_id = payload.tenant_id.unwrap_or_default();
        state.user_id = user_id;
        Ok(())
    }

    // -- Actions

    /// Sign in with `body`, load the header menu and navigate to `redirect`
    /// (`/` by default). Returns the raw login response.
    ///
    /// Login failures are returned untouched and leave the state as it was.
    pub async fn login(&self, body: &Value, redirect: Option<&str>) -> Result<Value, SessionError> {
        let response = self.api.login.create(body, &RequestOptions::new()).await?;
        let user_info: UserInfo = decode_payload(&response)?;
        self.set_user_info(user_info)?;
        let user_id = self.read().user_id.clone();
        info!(
            event_name = "session.login",
            event_domain = "session",
            user_id = user_id.as_str(),
            "user signed in"
        );

        self.load_header_menu().await;
        self.navigator.replace(redirect.unwrap_or("/"));
        Ok(response)
    }

    /// Re-authenticate with an existing token and reload the header menu.
    pub async fn refresh(&self, token: &str) -> Result<(), SessionError> {
        let options = RequestOptions::new().param("token", token);
        let response = self.api.token.index(&options).await?;
        let user_info: UserInfo = decode_payload(&response)?;
        self.set_user_info(user_info)?;
        debug!("Session refreshed from token");

        self.load_header_menu().await;
        Ok(())
    }

    /// Fetch the header menu for the configured application and commit it.
    pub async fn get_header_menu(&self) -> Result<(), SessionError> {
        let options = RequestOptions::new()
            .param("appId", self.settings.app_id.as_str())
            .param("code", self.settings.menu_code.as_str());
        let response = self.api.menus.index(&options).await?;
        let menus: Vec<RawMenu> = decode_payload(&response)?;
        self.set_header_menu(menus);
        Ok(())
    }

    /// A menu failure must not undo a successful sign-in.
    async fn load_header_menu(&self) {
        if let Err(e) = self.get_header_menu().await {
            warn!(
                event_name = "session.menu.failed",
                event_domain = "session",
                error = %e,
                "header menu could not be loaded"
            );
        }
    }
}
