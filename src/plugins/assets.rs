//! Item Assets Plugin
//!
//! A reusable library of named item templates, persisted under its own
//! localStorage key and seeded with a few defaults on first use.

use serde::{Deserialize, Serialize};

use crate::models::{ActionType, ClickType, ItemTemplate};
use crate::storage;

/// One saved item template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAsset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the Unix epoch
    pub created_at: f64,
    pub template: ItemTemplate,
}

fn asset(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    template: ItemTemplate,
) -> ItemAsset {
    ItemAsset {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: 0.0,
        template,
    }
}

/// Library contents seeded on first use
pub fn default_assets() -> Vec<ItemAsset> {
    vec![
        asset(
            "asset-close",
            "Close Button",
            "Red pane, closes the menu on click",
            "Buttons",
            &["close", "button", "common"],
            ItemTemplate::new("RED_STAINED_GLASS_PANE")
                .named("§c§lClose")
                .lore_line("§7Click to close the menu")
                .action(ActionType::Close, ClickType::All, ""),
        ),
        asset(
            "asset-back",
            "Back Button",
            "Arrow, returns to the previous menu",
            "Buttons",
            &["back", "button", "common"],
            ItemTemplate::new("ARROW")
                .named("§e§lBack")
                .lore_line("§7Click to go back"),
        ),
        asset(
            "asset-next-page",
            "Next Page",
            "Lime dye page-turn button",
            "Buttons",
            &["paging", "button"],
            ItemTemplate::new("LIME_DYE")
                .named("§a§lNext Page")
                .lore_line("§7Click for the next page"),
        ),
        asset(
            "asset-black-pane",
            "Black Pane",
            "Black glass pane decoration",
            "Decoration",
            &["decoration", "glass"],
            ItemTemplate::new("BLACK_STAINED_GLASS_PANE").named(" "),
        ),
        asset(
            "asset-gray-pane",
            "Gray Pane",
            "Gray glass pane decoration",
            "Decoration",
            &["decoration", "glass"],
            ItemTemplate::new("GRAY_STAINED_GLASS_PANE").named(" "),
        ),
    ]
}

/// Case-insensitive filter over name, category and tags
pub fn search<'a>(assets: &'a [ItemAsset], query: &str) -> Vec<&'a ItemAsset> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return assets.iter().collect();
    }
    assets
        .iter()
        .filter(|asset| {
            asset.name.to_lowercase().contains(&query)
                || asset.category.to_lowercase().contains(&query)
                || asset.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// Load the library, seeding defaults when nothing is stored yet
pub fn load_assets() -> Vec<ItemAsset> {
    let Some(raw) = storage::get_raw(storage::ASSETS_STORAGE_KEY) else {
        return default_assets();
    };
    serde_json::from_str(&raw).unwrap_or_else(|_| default_assets())
}

/// Write the library through. Failures are logged, never fatal.
pub fn save_assets(assets: &[ItemAsset]) {
    let result = serde_json::to_string(assets)
        .map_err(|e| e.to_string())
        .and_then(|raw| storage::set_raw(storage::ASSETS_STORAGE_KEY, &raw));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[ASSETS] Persist failed: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assets_round_trip() {
        let assets = default_assets();
        let raw = serde_json::to_string(&assets).unwrap();
        let back: Vec<ItemAsset> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, assets);
    }

    #[test]
    fn test_default_asset_templates_leave_slot_unpinned() {
        // Assets insert at the first free slot of the target menu
        assert!(default_assets().iter().all(|a| a.template.slot.is_none()));
    }

    #[test]
    fn test_search_matches_name_category_and_tags() {
        let assets = default_assets();
        assert_eq!(search(&assets, "close").len(), 1);
        assert_eq!(search(&assets, "decoration").len(), 2);
        assert_eq!(search(&assets, "BUTTON").len(), 3);
        assert_eq!(search(&assets, "").len(), assets.len());
        assert!(search(&assets, "nonexistent").is_empty());
    }
}
