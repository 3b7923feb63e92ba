//! Color Schemes Plugin
//!
//! Named four-color themes. Applying a scheme produces a border batch of
//! stained-glass panes cycling through the theme colors.

use crate::models::{ItemTemplate, MenuSize};

/// One color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Minecraft dye color tokens
    pub colors: [&'static str; 4],
    /// CSS preview colors, same order
    pub preview: [&'static str; 4],
}

pub const SCHEMES: [ColorScheme; 8] = [
    ColorScheme {
        id: "ocean",
        name: "Ocean",
        description: "Deep ocean blues",
        colors: ["LIGHT_BLUE", "CYAN", "BLUE", "PURPLE"],
        preview: ["#87CEEB", "#00CED1", "#0000FF", "#800080"],
    },
    ColorScheme {
        id: "forest",
        name: "Forest",
        description: "Fresh natural greens",
        colors: ["LIME", "GREEN", "GREEN", "BROWN"],
        preview: ["#7FFF00", "#00FF00", "#006400", "#8B4513"],
    },
    ColorScheme {
        id: "sunset",
        name: "Sunset",
        description: "Warm sunset tones",
        colors: ["ORANGE", "RED", "PINK", "MAGENTA"],
        preview: ["#FFA500", "#FF0000", "#FFC0CB", "#FF00FF"],
    },
    ColorScheme {
        id: "monochrome",
        name: "Monochrome",
        description: "Minimal black and white",
        colors: ["WHITE", "LIGHT_GRAY", "GRAY", "BLACK"],
        preview: ["#FFFFFF", "#D3D3D3", "#808080", "#000000"],
    },
    ColorScheme {
        id: "neon",
        name: "Neon",
        description: "Vivid neon glow",
        colors: ["PINK", "MAGENTA", "PURPLE", "CYAN"],
        preview: ["#FFC0CB", "#FF00FF", "#800080", "#00CED1"],
    },
    ColorScheme {
        id: "earth",
        name: "Earth",
        description: "Grounded earthy hues",
        colors: ["BROWN", "ORANGE", "YELLOW", "GREEN"],
        preview: ["#8B4513", "#FFA500", "#FFFF00", "#00FF00"],
    },
    ColorScheme {
        id: "ice",
        name: "Ice",
        description: "Cold frost blues",
        colors: ["WHITE", "LIGHT_BLUE", "CYAN", "BLUE"],
        preview: ["#FFFFFF", "#87CEEB", "#00CED1", "#0000FF"],
    },
    ColorScheme {
        id: "fire",
        name: "Fire",
        description: "Blazing flame colors",
        colors: ["YELLOW", "ORANGE", "RED", "BLACK"],
        preview: ["#FFFF00", "#FFA500", "#FF0000", "#000000"],
    },
];

/// Border batch cycling through the scheme colors
pub fn apply(scheme: &ColorScheme, size: MenuSize) -> Vec<ItemTemplate> {
    let slots = size.slot_count();
    let mut border_slots: Vec<i32> = (0..9).collect();
    if size.rows() > 1 {
        border_slots.extend(slots - 9..slots);
    }
    border_slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let color = scheme.colors[index % scheme.colors.len()];
            ItemTemplate::new(&format!("{}_STAINED_GLASS_PANE", color))
                .at(*slot)
                .named(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_ids_are_unique() {
        for (i, a) in SCHEMES.iter().enumerate() {
            for b in &SCHEMES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_apply_cycles_colors_over_border() {
        let scheme = &SCHEMES[0];
        let items = apply(scheme, MenuSize::Rows6);
        assert_eq!(items.len(), 18);
        assert_eq!(items[0].material, "LIGHT_BLUE_STAINED_GLASS_PANE");
        assert_eq!(items[1].material, "CYAN_STAINED_GLASS_PANE");
        assert_eq!(items[4].material, "LIGHT_BLUE_STAINED_GLASS_PANE");
    }
}
