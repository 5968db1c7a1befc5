use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::value::deserialize_optional_string;

/// The user info payload returned by the login and token endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub params: Option<UserParams>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

impl UserInfo {
    /// The name shown in the console: a non-empty nickname wins over the username.
    pub fn display_name(&self) -> Option<String> {
        self.params
            .as_ref()
            .and_then(|p| p.nickname.clone())
            .filter(|n| !n.is_empty())
            .or_else(|| self.username.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.params.as_ref().and_then(|p| p.user_id.clone())
    }
}

/// The current user as the console header shows it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}
