//! Material Glyphs
//!
//! Display glyph for a material token on the canvas. Unknown materials
//! fall back to a generic crate.

pub fn material_glyph(material: &str) -> &'static str {
    match material {
        // Valuables
        "DIAMOND" => "💎",
        "EMERALD" => "💚",
        "GOLD_INGOT" => "🪙",
        "IRON_INGOT" => "⚙️",
        "COAL" => "🪨",
        // Blocks
        "STONE" => "🪨",
        "DIRT" => "🟫",
        "GRASS_BLOCK" => "🟩",
        "OAK_LOG" => "🪵",
        "STICK" => "🥢",
        // Tools and weapons
        "DIAMOND_SWORD" => "⚔️",
        "DIAMOND_PICKAXE" => "⛏️",
        "DIAMOND_AXE" => "🪓",
        "BOW" => "🏹",
        "ARROW" => "🏹",
        "FISHING_ROD" => "🎣",
        // Food
        "APPLE" => "🍎",
        "BREAD" => "🍞",
        "COOKED_BEEF" => "🥩",
        "GOLDEN_APPLE" => "🍏",
        // Utility blocks
        "CHEST" => "📦",
        "CRAFTING_TABLE" => "🔨",
        "FURNACE" => "🔥",
        "ENCHANTING_TABLE" => "📕",
        "ANVIL" => "🔧",
        // Decoration
        "GLASS" => "🪟",
        "WOOL" => "🧶",
        "LIME_WOOL" => "🟢",
        "RED_WOOL" => "🔴",
        "CONCRETE" => "🧱",
        "TERRACOTTA" => "🏺",
        "PAINTING" => "🖼️",
        // Redstone
        "REDSTONE" => "🔴",
        "REPEATER" => "🔁",
        "COMPARATOR" => "⚡",
        "LEVER" => "🎚️",
        "BUTTON" => "🔘",
        "NOTE_BLOCK" => "🎵",
        "BELL" => "🔔",
        // Misc
        "BARRIER" => "🚫",
        "COMMAND_BLOCK" => "📜",
        "PLAYER_HEAD" => "👤",
        "BOOK" => "📖",
        "MAP" => "🗺️",
        "PAPER" => "📄",
        "CLOCK" => "🕐",
        "EXPERIENCE_BOTTLE" => "🧪",
        "LIME_DYE" => "🟢",
        material if material.ends_with("_STAINED_GLASS_PANE") => "🪟",
        _ => "📦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_fallback_glyphs() {
        assert_eq!(material_glyph("DIAMOND"), "💎");
        assert_eq!(material_glyph("BLACK_STAINED_GLASS_PANE"), "🪟");
        assert_eq!(material_glyph("SOMETHING_ELSE"), "📦");
    }
}
