//! Editor State Core
//!
//! Pure, synchronous mutation logic for menus, groups, selection and the
//! recency list. Every operation runs to completion on the UI thread; a
//! missing entity makes the operation a silent no-op. Slot occupancy is a
//! derived invariant: `add_menu_item` and `move_menu_item` never check for
//! collisions, `move_or_swap_item` is the checked alternative the canvas
//! uses.

use reactive_stores::Store;

use crate::models::{
    ItemTemplate, MenuConfig, MenuGroup, MenuItem, MenuItemPatch, MenuPatch, MenuSize, MenuType,
    RecentEntry,
};

/// Maximum number of entries kept in the recency list
pub const RECENT_CAP: usize = 10;

const DEFAULT_MATERIAL: &str = "STONE";
const DEFAULT_ITEM_NAME: &str = "New Item";

/// All editor state, with field-level reactivity when wrapped in a
/// `reactive_stores::Store`
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// All menus, grouped and ungrouped
    pub menus: Vec<MenuConfig>,
    /// All menu groups
    pub menu_groups: Vec<MenuGroup>,
    /// Currently open menu (None = welcome page)
    pub selected_menu_id: Option<String>,
    /// Most-recently-opened menus, newest first
    pub recent_items: Vec<RecentEntry>,
    /// Monotonic sequence for generated entity ids
    pub id_seq: u64,
}

impl EditorState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.id_seq += 1;
        format!("{}-{}", prefix, self.id_seq)
    }

    // ========================
    // Lookups
    // ========================

    pub fn menu(&self, menu_id: &str) -> Option<&MenuConfig> {
        self.menus.iter().find(|m| m.id == menu_id)
    }

    fn menu_mut(&mut self, menu_id: &str) -> Option<&mut MenuConfig> {
        self.menus.iter_mut().find(|m| m.id == menu_id)
    }

    pub fn group(&self, group_id: &str) -> Option<&MenuGroup> {
        self.menu_groups.iter().find(|g| g.id == group_id)
    }

    /// Root-level menus sorted by order
    pub fn ungrouped_menus(&self) -> Vec<MenuConfig> {
        let mut menus: Vec<MenuConfig> = self
            .menus
            .iter()
            .filter(|m| m.group_id.is_none())
            .cloned()
            .collect();
        menus.sort_by_key(|m| m.order);
        menus
    }

    /// Menus belonging to `group_id` sorted by order
    pub fn group_menus(&self, group_id: &str) -> Vec<MenuConfig> {
        let mut menus: Vec<MenuConfig> = self
            .menus
            .iter()
            .filter(|m| m.group_id.as_deref() == Some(group_id))
            .cloned()
            .collect();
        menus.sort_by_key(|m| m.order);
        menus
    }

    pub fn sorted_groups(&self) -> Vec<MenuGroup> {
        let mut groups = self.menu_groups.clone();
        groups.sort_by_key(|g| g.order);
        groups
    }

    fn next_order_in_scope(&self, group_id: Option<&str>) -> i32 {
        self.menus
            .iter()
            .filter(|m| m.group_id.as_deref() == group_id)
            .map(|m| m.order)
            .max()
            .map(|max| max + 1)
            .unwrap_or(0)
    }

    // ========================
    // Menu Operations
    // ========================

    /// Create a menu with defaults, appended to the end of its sibling
    /// scope. Returns the new menu id. Always succeeds.
    pub fn create_menu(&mut self, group_id: Option<&str>) -> String {
        let id = self.next_id("menu");
        let order = self.next_order_in_scope(group_id);
        self.menus.push(MenuConfig {
            id: id.clone(),
            name: "New Menu".to_string(),
            title: "New Menu".to_string(),
            size: MenuSize::Rows6,
            menu_type: MenuType::Chest,
            items: Vec::new(),
            group_id: group_id.map(str::to_string),
            order,
        });
        id
    }

    pub fn update_menu(&mut self, menu_id: &str, patch: &MenuPatch) {
        if let Some(menu) = self.menu_mut(menu_id) {
            patch.apply_to(menu);
        }
    }

    pub fn rename_menu(&mut self, menu_id: &str, name: &str) {
        if let Some(menu) = self.menu_mut(menu_id) {
            menu.name = name.to_string();
        }
    }

    /// Remove the menu and, with it, its items. Sibling orders keep their
    /// gaps.
    pub fn delete_menu(&mut self, menu_id: &str) {
        self.menus.retain(|m| m.id != menu_id);
        if self.selected_menu_id.as_deref() == Some(menu_id) {
            self.selected_menu_id = None;
        }
    }

    // ========================
    // Group Operations
    // ========================

    pub fn create_group(&mut self) -> String {
        let id = self.next_id("group");
        let order = self
            .menu_groups
            .iter()
            .map(|g| g.order)
            .max()
            .map(|max| max + 1)
            .unwrap_or(0);
        self.menu_groups.push(MenuGroup {
            id: id.clone(),
            name: "New Group".to_string(),
            order,
        });
        id
    }

    pub fn rename_group(&mut self, group_id: &str, name: &str) {
        if let Some(group) = self.menu_groups.iter_mut().find(|g| g.id == group_id) {
            group.name = name.to_string();
        }
    }

    /// Delete a group. Member menus are reparented to the ungrouped root,
    /// appended after the existing root menus in their previous relative
    /// order.
    pub fn delete_group(&mut self, group_id: &str) {
        if self.group(group_id).is_none() {
            return;
        }
        self.menu_groups.retain(|g| g.id != group_id);

        let mut members: Vec<String> = {
            let mut member_refs: Vec<&MenuConfig> = self
                .menus
                .iter()
                .filter(|m| m.group_id.as_deref() == Some(group_id))
                .collect();
            member_refs.sort_by_key(|m| m.order);
            member_refs.iter().map(|m| m.id.clone()).collect()
        };
        let mut order = self.next_order_in_scope(None);
        for member_id in members.drain(..) {
            if let Some(menu) = self.menu_mut(&member_id) {
                menu.group_id = None;
                menu.order = order;
                order += 1;
            }
        }
    }

    // ========================
    // Item Operations
    // ========================

    /// Append an item. Occupancy of the target slot is not checked here.
    pub fn add_menu_item(&mut self, menu_id: &str, item: MenuItem) {
        if let Some(menu) = self.menu_mut(menu_id) {
            menu.items.push(item);
        }
    }

    pub fn update_menu_item(&mut self, menu_id: &str, item_id: &str, patch: &MenuItemPatch) {
        if let Some(menu) = self.menu_mut(menu_id) {
            if let Some(item) = menu.items.iter_mut().find(|i| i.id == item_id) {
                patch.apply_to(item);
            }
        }
    }

    pub fn delete_menu_item(&mut self, menu_id: &str, item_id: &str) {
        if let Some(menu) = self.menu_mut(menu_id) {
            menu.items.retain(|i| i.id != item_id);
        }
    }

    /// Set the item's slot. Nothing else changes; the target slot is not
    /// checked for an occupant.
    pub fn move_menu_item(&mut self, menu_id: &str, item_id: &str, new_slot: i32) {
        if let Some(menu) = self.menu_mut(menu_id) {
            if let Some(item) = menu.items.iter_mut().find(|i| i.id == item_id) {
                item.slot = new_slot;
            }
        }
    }

    /// Checked move: when the target slot is occupied by another item the
    /// two items trade slots in one call, otherwise this is a plain move.
    pub fn move_or_swap_item(&mut self, menu_id: &str, item_id: &str, target_slot: i32) {
        let Some(menu) = self.menu_mut(menu_id) else {
            return;
        };
        let Some(source_slot) = menu.item(item_id).map(|i| i.slot) else {
            return;
        };
        let occupant_id = menu
            .item_at_slot(target_slot)
            .filter(|i| i.id != item_id)
            .map(|i| i.id.clone());
        if let Some(item) = menu.items.iter_mut().find(|i| i.id == item_id) {
            item.slot = target_slot;
        }
        if let Some(occupant_id) = occupant_id {
            if let Some(occupant) = menu.items.iter_mut().find(|i| i.id == occupant_id) {
                occupant.slot = source_slot;
            }
        }
    }

    /// First unoccupied slot, scanning row-major from 0. Falls back to
    /// slot 0 on a full menu.
    pub fn first_free_slot(&self, menu_id: &str) -> i32 {
        let Some(menu) = self.menu(menu_id) else {
            return 0;
        };
        (0..menu.size.slot_count())
            .find(|slot| menu.item_at_slot(*slot).is_none())
            .unwrap_or(0)
    }

    /// Create an item at `slot` with the canvas defaults and return its id
    pub fn create_default_item(&mut self, menu_id: &str, slot: i32) -> Option<String> {
        self.create_item_from_template(menu_id, &ItemTemplate::new(DEFAULT_MATERIAL).at(slot))
    }

    /// Materialize a plugin template into a new item. Unset fields fall
    /// back to defaults; an unset slot goes to the first free one.
    pub fn create_item_from_template(
        &mut self,
        menu_id: &str,
        template: &ItemTemplate,
    ) -> Option<String> {
        self.menu(menu_id)?;
        let slot = template
            .slot
            .unwrap_or_else(|| self.first_free_slot(menu_id));
        let id = self.next_id("item");
        let item = MenuItem {
            id: id.clone(),
            slot,
            material: template.material.clone(),
            display_name: Some(
                template
                    .display_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            ),
            amount: Some(template.amount.unwrap_or(1)),
            lore: template.lore.clone(),
            actions: template.actions.clone(),
            custom_model_data: template.custom_model_data,
        };
        self.add_menu_item(menu_id, item);
        Some(id)
    }

    // ========================
    // Selection & Recents
    // ========================

    /// Point the selection at a live menu, or clear it
    pub fn set_selected_menu(&mut self, menu_id: Option<&str>) {
        self.selected_menu_id = menu_id
            .filter(|id| self.menu(id).is_some())
            .map(str::to_string);
    }

    /// Record a menu open. An existing entry is promoted to the front
    /// rather than duplicated; the list is capped at [`RECENT_CAP`].
    pub fn add_to_recent(&mut self, menu_id: &str, timestamp: f64) {
        let Some(menu_name) = self.menu(menu_id).map(|m| m.name.clone()) else {
            return;
        };
        self.recent_items.retain(|e| e.menu_id != menu_id);
        self.recent_items.insert(
            0,
            RecentEntry {
                menu_id: menu_id.to_string(),
                menu_name,
                timestamp,
            },
        );
        self.recent_items.truncate(RECENT_CAP);
    }

    pub fn clear_recent(&mut self) {
        self.recent_items.clear();
    }

    // ========================
    // Sidebar Reordering
    // ========================

    /// Reparent a menu into a group, appended at the end
    pub fn move_menu_to_group(&mut self, menu_id: &str, group_id: &str) {
        if self.group(group_id).is_none() {
            return;
        }
        let order = self.next_order_in_scope(Some(group_id));
        if let Some(menu) = self.menu_mut(menu_id) {
            menu.group_id = Some(group_id.to_string());
            menu.order = order;
        }
    }

    /// Place a menu at `position` within the sibling scope `group_id`
    /// (None = root), renumbering that scope 0..n.
    pub fn reorder_menu(&mut self, menu_id: &str, group_id: Option<&str>, position: i32) {
        if self.menu(menu_id).is_none() {
            return;
        }
        if let Some(gid) = group_id {
            if self.group(gid).is_none() {
                return;
            }
        }

        let mut sibling_ids: Vec<String> = {
            let mut siblings: Vec<&MenuConfig> = self
                .menus
                .iter()
                .filter(|m| m.group_id.as_deref() == group_id && m.id != menu_id)
                .collect();
            siblings.sort_by_key(|m| m.order);
            siblings.iter().map(|m| m.id.clone()).collect()
        };
        let index = (position.max(0) as usize).min(sibling_ids.len());
        sibling_ids.insert(index, menu_id.to_string());

        for (order, sibling_id) in sibling_ids.iter().enumerate() {
            if let Some(menu) = self.menu_mut(sibling_id) {
                menu.order = order as i32;
                if sibling_id == menu_id {
                    menu.group_id = group_id.map(str::to_string);
                }
            }
        }
    }

    /// Place a group at `position` in the group list, renumbering 0..n
    pub fn reorder_group(&mut self, group_id: &str, position: i32) {
        if self.group(group_id).is_none() {
            return;
        }
        let mut ids: Vec<String> = {
            let mut groups: Vec<&MenuGroup> = self
                .menu_groups
                .iter()
                .filter(|g| g.id != group_id)
                .collect();
            groups.sort_by_key(|g| g.order);
            groups.iter().map(|g| g.id.clone()).collect()
        };
        let index = (position.max(0) as usize).min(ids.len());
        ids.insert(index, group_id.to_string());

        for (order, id) in ids.iter().enumerate() {
            if let Some(group) = self.menu_groups.iter_mut().find(|g| g.id == *id) {
                group.order = order as i32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, slot: i32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            slot,
            material: "STONE".to_string(),
            display_name: Some("Test".to_string()),
            amount: Some(1),
            lore: Vec::new(),
            actions: Vec::new(),
            custom_model_data: None,
        }
    }

    fn state_with_menu() -> (EditorState, String) {
        let mut state = EditorState::default();
        let menu_id = state.create_menu(None);
        (state, menu_id)
    }

    #[test]
    fn test_create_menu_defaults() {
        let (state, menu_id) = state_with_menu();
        let menu = state.menu(&menu_id).unwrap();
        assert_eq!(menu.group_id, None);
        assert_eq!(menu.order, 0);
        assert_eq!(menu.size, MenuSize::Rows6);
        assert_eq!(menu.menu_type, MenuType::Chest);
        assert!(menu.items.is_empty());
    }

    #[test]
    fn test_create_menu_appends_to_scope_order() {
        let mut state = EditorState::default();
        let first = state.create_menu(None);
        let second = state.create_menu(None);
        assert_eq!(state.menu(&first).unwrap().order, 0);
        assert_eq!(state.menu(&second).unwrap().order, 1);

        // Group scope counts independently of the root scope
        let group_id = state.create_group();
        let grouped = state.create_menu(Some(&group_id));
        assert_eq!(state.menu(&grouped).unwrap().order, 0);
        assert_eq!(
            state.menu(&grouped).unwrap().group_id.as_deref(),
            Some(group_id.as_str())
        );
    }

    #[test]
    fn test_order_survives_deletion_gaps() {
        let mut state = EditorState::default();
        let a = state.create_menu(None);
        let _b = state.create_menu(None);
        state.delete_menu(&a);
        // Gap is acceptable; next create appends after the max
        let c = state.create_menu(None);
        assert_eq!(state.menu(&c).unwrap().order, 2);
    }

    #[test]
    fn test_update_menu_missing_is_noop() {
        let (mut state, _) = state_with_menu();
        let before = state.menus.clone();
        state.update_menu(
            "menu-999",
            &MenuPatch {
                title: Some("x".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(state.menus, before);
    }

    #[test]
    fn test_delete_menu_clears_selection() {
        let (mut state, menu_id) = state_with_menu();
        state.set_selected_menu(Some(&menu_id));
        state.delete_menu(&menu_id);
        assert_eq!(state.selected_menu_id, None);
        assert!(state.menus.is_empty());
    }

    #[test]
    fn test_selection_only_points_at_live_menus() {
        let (mut state, menu_id) = state_with_menu();
        state.set_selected_menu(Some("menu-404"));
        assert_eq!(state.selected_menu_id, None);
        state.set_selected_menu(Some(&menu_id));
        assert_eq!(state.selected_menu_id.as_deref(), Some(menu_id.as_str()));
    }

    #[test]
    fn test_add_then_delete_item_round_trip() {
        let (mut state, menu_id) = state_with_menu();
        let before = state.menu(&menu_id).unwrap().items.clone();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.delete_menu_item(&menu_id, "item-a");
        assert_eq!(state.menu(&menu_id).unwrap().items, before);
    }

    #[test]
    fn test_add_menu_item_does_not_check_occupancy() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.add_menu_item(&menu_id, make_item("item-b", 0));
        assert_eq!(state.menu(&menu_id).unwrap().items.len(), 2);
    }

    #[test]
    fn test_move_sets_slot_and_nothing_else() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        let mut expected = state.menu(&menu_id).unwrap().item("item-a").unwrap().clone();
        expected.slot = 7;
        state.move_menu_item(&menu_id, "item-a", 7);
        assert_eq!(state.menu(&menu_id).unwrap().item("item-a"), Some(&expected));
    }

    #[test]
    fn test_two_call_swap_protocol() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.add_menu_item(&menu_id, make_item("item-b", 1));
        state.move_menu_item(&menu_id, "item-a", 1);
        state.move_menu_item(&menu_id, "item-b", 0);
        let menu = state.menu(&menu_id).unwrap();
        assert_eq!(menu.item("item-a").unwrap().slot, 1);
        assert_eq!(menu.item("item-b").unwrap().slot, 0);
        assert_eq!(menu.items.len(), 2);
    }

    #[test]
    fn test_move_or_swap_swaps_occupied_slot() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.add_menu_item(&menu_id, make_item("item-b", 1));
        state.move_or_swap_item(&menu_id, "item-a", 1);
        let menu = state.menu(&menu_id).unwrap();
        assert_eq!(menu.item("item-a").unwrap().slot, 1);
        assert_eq!(menu.item("item-b").unwrap().slot, 0);
        assert_eq!(menu.items.len(), 2);
    }

    #[test]
    fn test_move_or_swap_plain_move_and_self_drop() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.move_or_swap_item(&menu_id, "item-a", 5);
        assert_eq!(state.menu(&menu_id).unwrap().item("item-a").unwrap().slot, 5);
        // Dropping an item onto its own slot changes nothing
        state.move_or_swap_item(&menu_id, "item-a", 5);
        assert_eq!(state.menu(&menu_id).unwrap().item("item-a").unwrap().slot, 5);
    }

    #[test]
    fn test_empty_item_patch_is_identity() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 3));
        let before = state.menu(&menu_id).unwrap().item("item-a").unwrap().clone();
        state.update_menu_item(&menu_id, "item-a", &MenuItemPatch::default());
        assert_eq!(state.menu(&menu_id).unwrap().item("item-a"), Some(&before));
    }

    #[test]
    fn test_recent_dedup_and_promote() {
        let mut state = EditorState::default();
        let a = state.create_menu(None);
        let b = state.create_menu(None);
        state.add_to_recent(&a, 1.0);
        state.add_to_recent(&b, 2.0);
        state.add_to_recent(&a, 3.0);
        let ids: Vec<&str> = state.recent_items.iter().map(|e| e.menu_id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), b.as_str()]);
        assert_eq!(state.recent_items[0].timestamp, 3.0);
    }

    #[test]
    fn test_recent_cap() {
        let mut state = EditorState::default();
        let ids: Vec<String> = (0..RECENT_CAP + 3).map(|_| state.create_menu(None)).collect();
        for (i, id) in ids.iter().enumerate() {
            state.add_to_recent(id, i as f64);
        }
        assert_eq!(state.recent_items.len(), RECENT_CAP);
        // Newest first, oldest three evicted
        assert_eq!(state.recent_items[0].menu_id, ids[ids.len() - 1]);
        assert!(!state.recent_items.iter().any(|e| e.menu_id == ids[0]));
    }

    #[test]
    fn test_recent_unknown_menu_is_noop() {
        let mut state = EditorState::default();
        state.add_to_recent("menu-404", 1.0);
        assert!(state.recent_items.is_empty());
    }

    #[test]
    fn test_clear_recent() {
        let (mut state, menu_id) = state_with_menu();
        state.add_to_recent(&menu_id, 1.0);
        state.clear_recent();
        assert!(state.recent_items.is_empty());
    }

    #[test]
    fn test_delete_group_reparents_members_to_root() {
        let mut state = EditorState::default();
        let root_menu = state.create_menu(None);
        let group_id = state.create_group();
        let first = state.create_menu(Some(&group_id));
        let second = state.create_menu(Some(&group_id));

        state.delete_group(&group_id);

        assert!(state.menu_groups.is_empty());
        let roots = state.ungrouped_menus();
        let ids: Vec<&str> = roots.iter().map(|m| m.id.as_str()).collect();
        // Members keep relative order, appended after existing roots
        assert_eq!(ids, vec![root_menu.as_str(), first.as_str(), second.as_str()]);
        assert!(roots.iter().all(|m| m.group_id.is_none()));
    }

    #[test]
    fn test_move_menu_to_group_appends() {
        let mut state = EditorState::default();
        let group_id = state.create_group();
        let existing = state.create_menu(Some(&group_id));
        let moved = state.create_menu(None);
        state.move_menu_to_group(&moved, &group_id);
        let members = state.group_menus(&group_id);
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec![existing.as_str(), moved.as_str()]);
        // Unknown group leaves the menu alone
        state.move_menu_to_group(&moved, "group-404");
        assert_eq!(
            state.menu(&moved).unwrap().group_id.as_deref(),
            Some(group_id.as_str())
        );
    }

    #[test]
    fn test_reorder_menu_within_root() {
        let mut state = EditorState::default();
        let a = state.create_menu(None);
        let b = state.create_menu(None);
        let c = state.create_menu(None);
        state.reorder_menu(&c, None, 0);
        let ids: Vec<String> = state.ungrouped_menus().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec![c.clone(), a.clone(), b.clone()]);
        // Orders are renumbered 0..n
        assert_eq!(state.menu(&c).unwrap().order, 0);
        assert_eq!(state.menu(&b).unwrap().order, 2);
    }

    #[test]
    fn test_reorder_menu_reparents_into_group() {
        let mut state = EditorState::default();
        let group_id = state.create_group();
        let grouped = state.create_menu(Some(&group_id));
        let root = state.create_menu(None);
        state.reorder_menu(&root, Some(&group_id), 0);
        let ids: Vec<String> = state.group_menus(&group_id).iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec![root.clone(), grouped.clone()]);
        assert!(state.ungrouped_menus().is_empty());
    }

    #[test]
    fn test_reorder_group() {
        let mut state = EditorState::default();
        let a = state.create_group();
        let b = state.create_group();
        let c = state.create_group();
        state.reorder_group(&a, 2);
        let ids: Vec<String> = state.sorted_groups().iter().map(|g| g.id.clone()).collect();
        assert_eq!(ids, vec![b, c, a]);
    }

    #[test]
    fn test_first_free_slot_scans_row_major() {
        let (mut state, menu_id) = state_with_menu();
        assert_eq!(state.first_free_slot(&menu_id), 0);
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        state.add_menu_item(&menu_id, make_item("item-b", 1));
        state.add_menu_item(&menu_id, make_item("item-c", 3));
        assert_eq!(state.first_free_slot(&menu_id), 2);
    }

    #[test]
    fn test_first_free_slot_full_menu_falls_back_to_zero() {
        let mut state = EditorState::default();
        let menu_id = state.create_menu(None);
        state.update_menu(
            &menu_id,
            &MenuPatch {
                size: Some(MenuSize::Rows1),
                ..Default::default()
            },
        );
        for slot in 0..9 {
            state.add_menu_item(&menu_id, make_item(&format!("item-{}", slot), slot));
        }
        assert_eq!(state.first_free_slot(&menu_id), 0);
    }

    #[test]
    fn test_create_item_from_template_fills_defaults() {
        let (mut state, menu_id) = state_with_menu();
        state.add_menu_item(&menu_id, make_item("item-a", 0));
        let id = state
            .create_item_from_template(&menu_id, &ItemTemplate::new("BARRIER"))
            .unwrap();
        let menu = state.menu(&menu_id).unwrap();
        let item = menu.item(&id).unwrap();
        // Unset slot lands on the first free one
        assert_eq!(item.slot, 1);
        assert_eq!(item.material, "BARRIER");
        assert_eq!(item.display_name.as_deref(), Some("New Item"));
        assert_eq!(item.amount, Some(1));
    }

    #[test]
    fn test_create_item_from_template_missing_menu() {
        let mut state = EditorState::default();
        assert_eq!(
            state.create_item_from_template("menu-404", &ItemTemplate::new("STONE")),
            None
        );
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut state = EditorState::default();
        let a = state.create_menu(None);
        let g = state.create_group();
        let b = state.create_menu(Some(&g));
        let item = state.create_default_item(&a, 0).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, g);
        assert_ne!(item, a);
    }
}
