//! Menu Templates Plugin
//!
//! Preset layouts applied as a batch of item templates.

use crate::models::{ActionType, ClickType, ItemTemplate};

/// One preset layout
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub items: Vec<ItemTemplate>,
}

/// All preset layouts, in display order
pub fn all() -> Vec<MenuTemplate> {
    vec![
        shop_layout(),
        confirm_dialog(),
        navigation(),
        pagination(),
        player_profile(),
        settings_menu(),
    ]
}

/// Distinct template categories, in first-seen order
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for template in all() {
        if !seen.contains(&template.category) {
            seen.push(template.category);
        }
    }
    seen
}

fn shop_layout() -> MenuTemplate {
    let mut items = Vec::new();
    // Top and bottom decoration rows
    for slot in 0..9 {
        items.push(ItemTemplate::new("BLACK_STAINED_GLASS_PANE").at(slot).named(" "));
    }
    for slot in 45..54 {
        items.push(ItemTemplate::new("BLACK_STAINED_GLASS_PANE").at(slot).named(" "));
    }
    // Close button replaces the middle of the bottom row
    items.retain(|item| item.slot != Some(49));
    items.push(
        ItemTemplate::new("BARRIER")
            .at(49)
            .named("§c§lClose")
            .lore_line("§7Click to close the menu")
            .action(ActionType::Close, ClickType::All, ""),
    );
    MenuTemplate {
        id: "template-shop",
        name: "Shop Layout",
        description: "54-slot shop layout with decorated edges",
        icon: "🏪",
        category: "Shop",
        items,
    }
}

fn confirm_dialog() -> MenuTemplate {
    MenuTemplate {
        id: "template-confirm",
        name: "Confirm Dialog",
        description: "27-slot confirm/cancel dialog",
        icon: "✅",
        category: "Dialogs",
        items: vec![
            ItemTemplate::new("LIME_WOOL")
                .at(11)
                .named("§a§l✔ Confirm")
                .lore_line("§7Click to confirm"),
            ItemTemplate::new("PAPER")
                .at(13)
                .named("§e§lAre you sure?")
                .lore_line("§7Pick confirm or cancel"),
            ItemTemplate::new("RED_WOOL")
                .at(15)
                .named("§c§l✖ Cancel")
                .lore_line("§7Click to cancel"),
        ],
    }
}

fn navigation() -> MenuTemplate {
    MenuTemplate {
        id: "template-nav",
        name: "Navigation Menu",
        description: "Main menu navigation layout",
        icon: "🏠",
        category: "Navigation",
        items: vec![
            ItemTemplate::new("DIAMOND_SWORD")
                .at(10)
                .named("§b§lCombat")
                .lore_line("§7Combat features"),
            ItemTemplate::new("CHEST")
                .at(12)
                .named("§e§lVault")
                .lore_line("§7Open your vault"),
            ItemTemplate::new("EMERALD")
                .at(14)
                .named("§a§lShop")
                .lore_line("§7Visit the shop"),
            ItemTemplate::new("BOOK")
                .at(16)
                .named("§d§lQuests")
                .lore_line("§7Available quests"),
        ],
    }
}

fn pagination() -> MenuTemplate {
    MenuTemplate {
        id: "template-pagination",
        name: "Pagination",
        description: "Layout with page-turn controls",
        icon: "📄",
        category: "Controls",
        items: vec![
            ItemTemplate::new("ARROW")
                .at(45)
                .named("§e§l← Previous Page")
                .lore_line("§7Back one page"),
            ItemTemplate::new("PAPER")
                .at(49)
                .named("§a§lPage 1")
                .lore_line("§7of 1"),
            ItemTemplate::new("ARROW")
                .at(53)
                .named("§e§lNext Page →")
                .lore_line("§7Forward one page"),
        ],
    }
}

fn player_profile() -> MenuTemplate {
    MenuTemplate {
        id: "template-user-profile",
        name: "Player Profile",
        description: "Player information display",
        icon: "👤",
        category: "Info",
        items: vec![
            ItemTemplate::new("PLAYER_HEAD")
                .at(4)
                .named("§b§lPlayer Info")
                .lore_line("§7Your profile"),
            ItemTemplate::new("EXPERIENCE_BOTTLE")
                .at(10)
                .named("§a§lLevel")
                .lore_line("§7Level: §e1")
                .lore_line("§7XP: §e0/100"),
            ItemTemplate::new("GOLD_INGOT")
                .at(12)
                .named("§e§lCoins")
                .lore_line("§7Balance: §e$1000"),
            ItemTemplate::new("DIAMOND")
                .at(14)
                .named("§b§lDiamonds")
                .lore_line("§7Balance: §b0"),
            ItemTemplate::new("CLOCK")
                .at(16)
                .named("§6§lPlaytime")
                .lore_line("§7Online: §e0h"),
        ],
    }
}

fn settings_menu() -> MenuTemplate {
    MenuTemplate {
        id: "template-settings",
        name: "Settings Menu",
        description: "Game settings options",
        icon: "⚙️",
        category: "Settings",
        items: vec![
            ItemTemplate::new("BELL")
                .at(10)
                .named("§e§lNotifications")
                .lore_line("§7Notification preferences"),
            ItemTemplate::new("NOTE_BLOCK")
                .at(12)
                .named("§d§lSound")
                .lore_line("§7Adjust volume"),
            ItemTemplate::new("PAINTING")
                .at(14)
                .named("§b§lInterface")
                .lore_line("§7Customize the UI"),
            ItemTemplate::new("COMMAND_BLOCK")
                .at(16)
                .named("§c§lAdvanced")
                .lore_line("§7Advanced options"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_ids_are_unique() {
        let templates = all();
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_shop_layout_shape() {
        let shop = shop_layout();
        // 9 top + 9 bottom, with slot 49 swapped for the close button
        assert_eq!(shop.items.len(), 18);
        let close = shop
            .items
            .iter()
            .find(|item| item.slot == Some(49))
            .unwrap();
        assert_eq!(close.material, "BARRIER");
        assert_eq!(close.actions.len(), 1);
        assert_eq!(close.actions[0].action_type, ActionType::Close);
    }

    #[test]
    fn test_all_template_slots_are_pinned_and_in_range() {
        for template in all() {
            for item in &template.items {
                let slot = item.slot.expect("template items pin their slot");
                assert!((0..54).contains(&slot), "{}: slot {}", template.id, slot);
            }
        }
    }

    #[test]
    fn test_categories_deduplicated() {
        let categories = categories();
        let mut unique = categories.clone();
        unique.dedup();
        assert_eq!(categories, unique);
        assert!(categories.contains(&"Shop"));
    }
}
