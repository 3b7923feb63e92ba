//! Editor Models
//!
//! Data structures for menus, items, groups and recents, plus the typed
//! patch structs used for partial updates.

use serde::{Deserialize, Serialize};

/// Inventory menu sizes supported by the editor (slot counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum MenuSize {
    Rows1,
    Rows2,
    Rows3,
    Rows4,
    Rows5,
    Rows6,
}

impl MenuSize {
    /// Total slot count for this size
    pub fn slot_count(self) -> i32 {
        match self {
            MenuSize::Rows1 => 9,
            MenuSize::Rows2 => 18,
            MenuSize::Rows3 => 27,
            MenuSize::Rows4 => 36,
            MenuSize::Rows5 => 45,
            MenuSize::Rows6 => 54,
        }
    }

    /// Row count (9 columns per row)
    pub fn rows(self) -> i32 {
        self.slot_count() / 9
    }

    pub const ALL: [MenuSize; 6] = [
        MenuSize::Rows1,
        MenuSize::Rows2,
        MenuSize::Rows3,
        MenuSize::Rows4,
        MenuSize::Rows5,
        MenuSize::Rows6,
    ];
}

impl From<MenuSize> for i32 {
    fn from(size: MenuSize) -> i32 {
        size.slot_count()
    }
}

impl TryFrom<i32> for MenuSize {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(MenuSize::Rows1),
            18 => Ok(MenuSize::Rows2),
            27 => Ok(MenuSize::Rows3),
            36 => Ok(MenuSize::Rows4),
            45 => Ok(MenuSize::Rows5),
            54 => Ok(MenuSize::Rows6),
            other => Err(format!("invalid menu size: {}", other)),
        }
    }
}

/// Inventory container backing the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuType {
    Chest,
    Hopper,
    Dispenser,
    Dropper,
}

impl MenuType {
    pub fn label(self) -> &'static str {
        match self {
            MenuType::Chest => "CHEST",
            MenuType::Hopper => "HOPPER",
            MenuType::Dispenser => "DISPENSER",
            MenuType::Dropper => "DROPPER",
        }
    }

    pub const ALL: [MenuType; 4] = [
        MenuType::Chest,
        MenuType::Hopper,
        MenuType::Dispenser,
        MenuType::Dropper,
    ];
}

/// What a click action does when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Command,
    ConsoleCommand,
    OpenMenu,
    Close,
    Message,
}

/// Which click triggers an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClickType {
    All,
    Left,
    Right,
}

/// One click action attached to a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub click_type: ClickType,
    pub value: String,
}

/// One item placed in a menu slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub slot: i32,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    #[serde(default)]
    pub lore: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ItemAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
}

/// One editable inventory-menu definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    pub id: String,
    pub name: String,
    pub title: String,
    pub size: MenuSize,
    #[serde(rename = "type")]
    pub menu_type: MenuType,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub order: i32,
}

impl MenuConfig {
    /// Item currently occupying `slot`, if any
    pub fn item_at_slot(&self, slot: i32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.slot == slot)
    }

    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Organizational folder for menus (lookup-only back reference)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub id: String,
    pub name: String,
    pub order: i32,
}

/// One entry in the most-recently-opened list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub menu_id: String,
    pub menu_name: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

// ========================
// Typed Patches
// ========================

/// Partial update for a menu. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub size: Option<MenuSize>,
    pub menu_type: Option<MenuType>,
}

impl MenuPatch {
    pub fn apply_to(&self, menu: &mut MenuConfig) {
        if let Some(name) = &self.name {
            menu.name = name.clone();
        }
        if let Some(title) = &self.title {
            menu.title = title.clone();
        }
        if let Some(size) = self.size {
            menu.size = size;
        }
        if let Some(menu_type) = self.menu_type {
            menu.menu_type = menu_type;
        }
    }
}

/// Partial update for a menu item. `None` fields are left untouched;
/// `custom_model_data: Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemPatch {
    pub material: Option<String>,
    pub display_name: Option<String>,
    pub amount: Option<i32>,
    pub lore: Option<Vec<String>>,
    pub actions: Option<Vec<ItemAction>>,
    pub custom_model_data: Option<Option<i32>>,
}

impl MenuItemPatch {
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(material) = &self.material {
            item.material = material.clone();
        }
        if let Some(display_name) = &self.display_name {
            item.display_name = Some(display_name.clone());
        }
        if let Some(amount) = self.amount {
            item.amount = Some(amount.clamp(1, 64));
        }
        if let Some(lore) = &self.lore {
            item.lore = lore.clone();
        }
        if let Some(actions) = &self.actions {
            item.actions = actions.clone();
        }
        if let Some(custom_model_data) = self.custom_model_data {
            item.custom_model_data = custom_model_data;
        }
    }
}

/// Item blueprint produced by plugins; unset fields fall back to the
/// canvas defaults when the item is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<i32>,
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    #[serde(default)]
    pub lore: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ItemAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
}

impl ItemTemplate {
    pub fn new(material: &str) -> Self {
        Self {
            slot: None,
            material: material.to_string(),
            display_name: None,
            amount: None,
            lore: Vec::new(),
            actions: Vec::new(),
            custom_model_data: None,
        }
    }

    pub fn at(mut self, slot: i32) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn named(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn lore_line(mut self, line: &str) -> Self {
        self.lore.push(line.to_string());
        self
    }

    pub fn action(mut self, action_type: ActionType, click_type: ClickType, value: &str) -> Self {
        self.actions.push(ItemAction {
            action_type,
            click_type,
            value: value.to_string(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_size_round_trip() {
        for size in MenuSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            let back: MenuSize = serde_json::from_str(&json).unwrap();
            assert_eq!(back, size);
        }
        assert_eq!(serde_json::to_string(&MenuSize::Rows6).unwrap(), "54");
        assert!(serde_json::from_str::<MenuSize>("10").is_err());
    }

    #[test]
    fn test_menu_type_tokens() {
        let json = serde_json::to_string(&MenuType::Dispenser).unwrap();
        assert_eq!(json, "\"DISPENSER\"");
    }

    #[test]
    fn test_empty_item_patch_is_identity() {
        let mut item = MenuItem {
            id: "item-1".to_string(),
            slot: 3,
            material: "DIAMOND".to_string(),
            display_name: Some("Shiny".to_string()),
            amount: Some(2),
            lore: vec!["line".to_string()],
            actions: Vec::new(),
            custom_model_data: Some(7),
        };
        let before = item.clone();
        MenuItemPatch::default().apply_to(&mut item);
        assert_eq!(item, before);
    }

    #[test]
    fn test_item_patch_clamps_amount_and_clears_model_data() {
        let mut item = MenuItem {
            id: "item-1".to_string(),
            slot: 0,
            material: "STONE".to_string(),
            display_name: None,
            amount: Some(1),
            lore: Vec::new(),
            actions: Vec::new(),
            custom_model_data: Some(42),
        };
        let patch = MenuItemPatch {
            amount: Some(999),
            custom_model_data: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut item);
        assert_eq!(item.amount, Some(64));
        assert_eq!(item.custom_model_data, None);
    }
}
