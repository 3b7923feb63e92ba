//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the application root from the persisted blob and passed down
//! via context; every helper below applies one pure mutation from
//! [`crate::state`] and then writes the blob through.

use leptos::prelude::*;
use leptos_dragdrop::{DragId, DropTarget};
use reactive_stores::Store;

use crate::models::{ItemTemplate, MenuItem, MenuItemPatch, MenuPatch};
use crate::state::EditorState;
use crate::storage;

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

/// Get the editor store from context
pub fn use_editor_store() -> EditorStore {
    expect_context::<EditorStore>()
}

fn write_through(store: &EditorStore) {
    storage::persist(&store.read_untracked());
}

// ========================
// Store Helper Functions
// ========================

/// Create a menu (optionally inside a group) and return its id
pub fn store_create_menu(store: &EditorStore, group_id: Option<&str>) -> String {
    let id = store.write().create_menu(group_id);
    write_through(store);
    id
}

pub fn store_update_menu(store: &EditorStore, menu_id: &str, patch: &MenuPatch) {
    store.write().update_menu(menu_id, patch);
    write_through(store);
}

pub fn store_rename_menu(store: &EditorStore, menu_id: &str, name: &str) {
    store.write().rename_menu(menu_id, name);
    write_through(store);
}

pub fn store_delete_menu(store: &EditorStore, menu_id: &str) {
    store.write().delete_menu(menu_id);
    write_through(store);
}

pub fn store_create_group(store: &EditorStore) -> String {
    let id = store.write().create_group();
    write_through(store);
    id
}

pub fn store_rename_group(store: &EditorStore, group_id: &str, name: &str) {
    store.write().rename_group(group_id, name);
    write_through(store);
}

pub fn store_delete_group(store: &EditorStore, group_id: &str) {
    store.write().delete_group(group_id);
    write_through(store);
}

pub fn store_add_menu_item(store: &EditorStore, menu_id: &str, item: MenuItem) {
    store.write().add_menu_item(menu_id, item);
    write_through(store);
}

pub fn store_update_menu_item(
    store: &EditorStore,
    menu_id: &str,
    item_id: &str,
    patch: &MenuItemPatch,
) {
    store.write().update_menu_item(menu_id, item_id, patch);
    write_through(store);
}

pub fn store_delete_menu_item(store: &EditorStore, menu_id: &str, item_id: &str) {
    store.write().delete_menu_item(menu_id, item_id);
    write_through(store);
}

/// Unchecked slot move (the canvas uses the checked variant below)
pub fn store_move_menu_item(store: &EditorStore, menu_id: &str, item_id: &str, new_slot: i32) {
    store.write().move_menu_item(menu_id, item_id, new_slot);
    write_through(store);
}

pub fn store_move_or_swap_item(store: &EditorStore, menu_id: &str, item_id: &str, target_slot: i32) {
    store.write().move_or_swap_item(menu_id, item_id, target_slot);
    write_through(store);
}

pub fn store_create_default_item(store: &EditorStore, menu_id: &str, slot: i32) -> Option<String> {
    let id = store.write().create_default_item(menu_id, slot);
    write_through(store);
    id
}

pub fn store_create_item_from_template(
    store: &EditorStore,
    menu_id: &str,
    template: &ItemTemplate,
) -> Option<String> {
    let id = store.write().create_item_from_template(menu_id, template);
    write_through(store);
    id
}

pub fn store_set_selected_menu(store: &EditorStore, menu_id: Option<&str>) {
    store.write().set_selected_menu(menu_id);
    write_through(store);
}

/// Open a menu: select it and promote it in the recency list
pub fn store_open_menu(store: &EditorStore, menu_id: &str) {
    {
        let mut state = store.write();
        state.set_selected_menu(Some(menu_id));
        state.add_to_recent(menu_id, js_sys::Date::now());
    }
    write_through(store);
}

pub fn store_clear_recent(store: &EditorStore) {
    store.write().clear_recent();
    write_through(store);
}

/// Apply a sidebar drag-end: reorder within a sibling scope, reorder the
/// group list, or reparent a menu into a group.
pub fn handle_menu_drop(store: &EditorStore, dragged: DragId, target: DropTarget) {
    {
        let mut state = store.write();
        match (dragged, target) {
            (DragId::Menu(menu_id), DropTarget::Group(group_id)) => {
                state.move_menu_to_group(&menu_id, &group_id);
            }
            (DragId::Menu(menu_id), DropTarget::MenuZone(scope, position)) => {
                state.reorder_menu(&menu_id, scope.as_deref(), position);
            }
            (DragId::Group(group_id), DropTarget::GroupZone(position)) => {
                state.reorder_group(&group_id, position);
            }
            // A group cannot land on a menu zone or another group header
            _ => {}
        }
    }
    write_through(store);
}
