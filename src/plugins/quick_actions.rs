//! Quick Actions Plugin
//!
//! One-shot generators for common decoration batches, sized to the
//! current menu.

use crate::models::{ItemTemplate, MenuSize};

const BORDER_MATERIAL: &str = "GRAY_STAINED_GLASS_PANE";

/// Decorative panes along the top and bottom rows
pub fn border(size: MenuSize) -> Vec<ItemTemplate> {
    let slots = size.slot_count();
    let mut items: Vec<ItemTemplate> = (0..9)
        .map(|slot| ItemTemplate::new(BORDER_MATERIAL).at(slot).named(" "))
        .collect();
    if size.rows() > 1 {
        items.extend((slots - 9..slots).map(|slot| {
            ItemTemplate::new(BORDER_MATERIAL).at(slot).named(" ")
        }));
    }
    items
}

/// Fill every slot with the chosen material
pub fn fill_all(size: MenuSize, material: &str) -> Vec<ItemTemplate> {
    (0..size.slot_count())
        .map(|slot| ItemTemplate::new(material).at(slot).named(" "))
        .collect()
}

/// Alternating black/white panes over the whole grid
pub fn checkerboard(size: MenuSize) -> Vec<ItemTemplate> {
    (0..size.slot_count())
        .map(|slot| {
            let row = slot / 9;
            let col = slot % 9;
            let material = if (row + col) % 2 == 0 {
                "WHITE_STAINED_GLASS_PANE"
            } else {
                "BLACK_STAINED_GLASS_PANE"
            };
            ItemTemplate::new(material).at(slot).named(" ")
        })
        .collect()
}

const GRADIENT_COLORS: [&str; 9] = [
    "RED", "ORANGE", "YELLOW", "LIME", "LIGHT_BLUE", "BLUE", "PURPLE", "MAGENTA", "PINK",
];

/// Rainbow panes across the top row, one color per column
pub fn gradient() -> Vec<ItemTemplate> {
    GRADIENT_COLORS
        .iter()
        .enumerate()
        .map(|(slot, color)| {
            ItemTemplate::new(&format!("{}_STAINED_GLASS_PANE", color))
                .at(slot as i32)
                .named(" ")
        })
        .collect()
}

/// Function buttons in the four corners
pub fn corner_buttons(size: MenuSize) -> Vec<ItemTemplate> {
    let last = size.slot_count() - 1;
    vec![
        ItemTemplate::new("ARROW")
            .at(0)
            .named("§e§lBack")
            .lore_line("§7Click to go back"),
        ItemTemplate::new("BOOK")
            .at(8)
            .named("§b§lInfo")
            .lore_line("§7View details"),
        ItemTemplate::new("LIME_DYE")
            .at(last - 8)
            .named("§a§lPrevious Page")
            .lore_line("§7Back one page"),
        ItemTemplate::new("BARRIER")
            .at(last)
            .named("§c§lClose")
            .lore_line("§7Close the menu"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_covers_top_and_bottom_rows() {
        let items = border(MenuSize::Rows6);
        assert_eq!(items.len(), 18);
        let slots: Vec<i32> = items.iter().map(|i| i.slot.unwrap()).collect();
        assert!((0..9).all(|s| slots.contains(&s)));
        assert!((45..54).all(|s| slots.contains(&s)));
    }

    #[test]
    fn test_border_single_row_has_no_duplicate_slots() {
        let items = border(MenuSize::Rows1);
        assert_eq!(items.len(), 9);
    }

    #[test]
    fn test_fill_all_covers_every_slot() {
        let items = fill_all(MenuSize::Rows3, "WHITE_STAINED_GLASS_PANE");
        assert_eq!(items.len(), 27);
        assert!(items.iter().all(|i| i.material == "WHITE_STAINED_GLASS_PANE"));
    }

    #[test]
    fn test_checkerboard_alternates() {
        let items = checkerboard(MenuSize::Rows2);
        assert_eq!(items[0].material, "WHITE_STAINED_GLASS_PANE");
        assert_eq!(items[1].material, "BLACK_STAINED_GLASS_PANE");
        // Row change flips the phase: slot 9 is row 1, col 0
        assert_eq!(items[9].material, "BLACK_STAINED_GLASS_PANE");
    }

    #[test]
    fn test_gradient_cycles_rainbow_over_top_row() {
        let items = gradient();
        assert_eq!(items.len(), 9);
        let slots: Vec<i32> = items.iter().map(|i| i.slot.unwrap()).collect();
        assert_eq!(slots, (0..9).collect::<Vec<i32>>());
        assert_eq!(items[0].material, "RED_STAINED_GLASS_PANE");
        assert_eq!(items[8].material, "PINK_STAINED_GLASS_PANE");
        assert!(items.iter().all(|i| i.material.ends_with("_STAINED_GLASS_PANE")));
    }

    #[test]
    fn test_corner_buttons_land_in_corners() {
        let items = corner_buttons(MenuSize::Rows3);
        let slots: Vec<i32> = items.iter().map(|i| i.slot.unwrap()).collect();
        assert_eq!(slots, vec![0, 8, 18, 26]);
    }
}
