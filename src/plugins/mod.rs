//! Plugin Content Generators
//!
//! Stateless generators producing item templates for the editor. The
//! panel component decides how each plugin is rendered; everything here
//! is plain data and pure functions.

pub mod assets;
pub mod color_schemes;
pub mod quick_actions;
pub mod templates;

/// Registration record for one plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub order: i32,
}

/// All plugins, in panel order
pub const AVAILABLE_PLUGINS: [PluginInfo; 4] = [
    PluginInfo {
        id: "item-assets",
        name: "Item Assets",
        description: "Save and reuse common item templates",
        icon: "📦",
        order: 1,
    },
    PluginInfo {
        id: "templates",
        name: "Menu Templates",
        description: "Apply preset menu layouts",
        icon: "📄",
        order: 2,
    },
    PluginInfo {
        id: "quick-actions",
        name: "Quick Actions",
        description: "Generate common layouts and decoration",
        icon: "🪄",
        order: 3,
    },
    PluginInfo {
        id: "color-scheme",
        name: "Color Schemes",
        description: "Apply a coordinated color theme",
        icon: "🎨",
        order: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugins_are_in_panel_order() {
        let orders: Vec<i32> = AVAILABLE_PLUGINS.iter().map(|p| p.order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }
}
