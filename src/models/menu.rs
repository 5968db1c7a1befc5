use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::value::deserialize_optional_string;

/// A menu record as the menus endpoint returns it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawMenu {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub path_url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// The view model handed to the console navigation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct MenuItem {
    pub url: String,
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

impl From<&RawMenu> for MenuItem {
    fn from(raw: &RawMenu) -> Self {
        MenuItem {
            url: raw.path_url.clone().unwrap_or_else(|| "/".to_string()),
            id: raw.id.clone().unwrap_or_default(),
            name: raw.name.clone().unwrap_or_default(),
            icon: raw.icon_url.clone(),
        }
    }
}

/// Map raw records to view models, one item per record, order preserved.
pub fn menu_items(raw: &[RawMenu]) -> Vec<MenuItem> {
    raw.iter().map(MenuItem::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_menu_accepts_numeric_ids() {
        let menus: Vec<RawMenu> = serde_json::from_value(json!([
            {"id": 12, "name": "Users", "pathUrl": "/users", "iconUrl": "user.svg"},
            {"id": "13", "name": "Roles"},
            {"id": null}
        ]))
        .unwrap();

        assert_eq!(menus[0].id.as_deref(), Some("12"));
        assert_eq!(menus[0].path_url.as_deref(), Some("/users"));
        assert_eq!(menus[1].id.as_deref(), Some("13"));
        assert_eq!(menus[2].id, None);
    }

    #[test]
    fn test_menu_item_defaults() {
        let item = MenuItem::from(&RawMenu::default());
        assert_eq!(
            item,
            MenuItem {
                url: "/".to_string(),
                id: String::new(),
                name: String::new(),
                icon: None,
            }
        );
    }

    #[test]
    fn test_menu_items_preserve_order() {
        let raw = vec![
            RawMenu {
                name: Some("b".to_string()),
                icon_url: Some("b.svg".to_string()),
                ..RawMenu::default()
            },
            RawMenu {
                name: Some("a".to_string()),
                ..RawMenu::default()
            },
        ];
        let items = menu_items(&raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "b");
        assert_eq!(items[0].icon.as_deref(), Some("b.svg"));
        assert_eq!(items[1].name, "a");
        assert_eq!(items[1].icon, None);
    }
}
