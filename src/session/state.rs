use serde::Serialize;

use crate::config::MetaConfig;
use crate::models::menu::menu_items;
use crate::models::{MenuItem, RawMenu, UserProfile};

/// Everything the console knows about the signed-in user, except the token,
/// which lives in the cookie store.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    // user info
    pub user_id: String,
    pub username: String,
    pub avatar: String,

    // meta info
    pub meta: MetaConfig,

    // auth info
    pub app_id: String,
    pub tenant_id: String,
    pub third_id: String,

    // menu data
    pub header_menu: Vec<RawMenu>,
    pub sider_menu: Vec<RawMenu>,
}

impl SessionState {
    /// The initial state; logout returns here.
    pub fn new(meta: MetaConfig) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    pub fn side_menu(&self) -> Vec<MenuItem> {
        menu_items(&self.sider_menu)
    }

    pub fn main_menu(&self) -> Vec<MenuItem> {
        menu_items(&self.header_menu)
    }

    pub fn user_info(&self) -> UserProfile {
        UserProfile {
            name: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(name: &str, icon: Option<&str>) -> RawMenu {
        RawMenu {
            name: Some(name.to_string()),
            id: Some(name.to_lowercase()),
            path_url: Some(format!("/{}", name.to_lowercase())),
            icon_url: icon.map(str::to_string),
        }
    }

    #[test]
    fn test_menus_project_in_order() {
        let state = SessionState {
            header_menu: vec![menu("Home", Some("home.svg")), menu("Users", None)],
            sider_menu: vec![menu("Roles", None)],
            ..SessionState::default()
        };

        let main: Vec<_> = state.main_menu().into_iter().map(|m| m.name).collect();
        assert_eq!(main, vec!["Home", "Users"]);
        assert_eq!(state.main_menu()[0].icon.as_deref(), Some("home.svg"));
        assert_eq!(state.main_menu()[1].icon, None);
        assert_eq!(state.main_menu()[1].url, "/users");

        let side = state.side_menu();
        assert_eq!(side.len(), 1);
        assert_eq!(side[0].id, "roles");
    }

    #[test]
    fn test_user_info_projection() {
        let state = SessionState {
            username: "Eve".to_string(),
            avatar: "eve.png".to_string(),
            ..SessionState::default()
        };
        assert_eq!(
            state.user_info(),
            UserProfile {
                name: "Eve".to_string(),
                avatar: "eve.png".to_string(),
            }
        );
    }
}
