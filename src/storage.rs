//! Local Storage Persistence
//!
//! One versioned JSON blob under a well-known localStorage key, written
//! through on every mutation and parsed in full on load. A corrupt or
//! unknown-version blob falls back to the empty default state.

use serde::{Deserialize, Serialize};

use crate::models::{MenuConfig, MenuGroup, RecentEntry};
use crate::state::EditorState;

/// Key for the editor state blob
pub const STORAGE_KEY: &str = "menucraft.editor";
/// Key for the item asset library (plugin-owned)
pub const ASSETS_STORAGE_KEY: &str = "menucraft.item-assets";
/// Current persisted schema version
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the editor state blob
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    version: u32,
    menus: Vec<MenuConfig>,
    menu_groups: Vec<MenuGroup>,
    selected_menu_id: Option<String>,
    recent_items: Vec<RecentEntry>,
    #[serde(default)]
    id_seq: u64,
}

/// Serialize the state to the blob format
pub fn encode(state: &EditorState) -> Result<String, String> {
    let blob = PersistedState {
        version: SCHEMA_VERSION,
        menus: state.menus.clone(),
        menu_groups: state.menu_groups.clone(),
        selected_menu_id: state.selected_menu_id.clone(),
        recent_items: state.recent_items.clone(),
        id_seq: state.id_seq,
    };
    serde_json::to_string(&blob).map_err(|e| e.to_string())
}

/// Parse a blob back into state. None on corrupt data or a version this
/// build does not understand.
pub fn decode(raw: &str) -> Option<EditorState> {
    let blob: PersistedState = serde_json::from_str(raw).ok()?;
    if blob.version != SCHEMA_VERSION {
        return None;
    }
    Some(EditorState {
        menus: blob.menus,
        menu_groups: blob.menu_groups,
        selected_menu_id: blob.selected_menu_id,
        recent_items: blob.recent_items,
        id_seq: blob.id_seq,
    })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a raw string value from localStorage
pub fn get_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a raw string value to localStorage
pub fn set_raw(key: &str, value: &str) -> Result<(), String> {
    let Some(storage) = local_storage() else {
        return Err("localStorage unavailable".to_string());
    };
    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to write key {}", key))
}

/// Load the editor state, falling back to the default on any failure
pub fn load() -> EditorState {
    let Some(raw) = get_raw(STORAGE_KEY) else {
        return EditorState::default();
    };
    match decode(&raw) {
        Some(state) => {
            web_sys::console::log_1(
                &format!("[STORAGE] Loaded {} menus", state.menus.len()).into(),
            );
            state
        }
        None => {
            web_sys::console::warn_1(&"[STORAGE] Discarding unreadable state blob".into());
            EditorState::default()
        }
    }
}

/// Write the full state blob. Failures are logged, never fatal.
pub fn persist(state: &EditorState) {
    let result = encode(state).and_then(|raw| set_raw(STORAGE_KEY, &raw));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[STORAGE] Persist failed: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuPatch;

    #[test]
    fn test_encode_decode_round_trip() {
        let mut state = EditorState::default();
        let menu_id = state.create_menu(None);
        let group_id = state.create_group();
        state.create_menu(Some(&group_id));
        state.create_default_item(&menu_id, 4);
        state.set_selected_menu(Some(&menu_id));
        state.add_to_recent(&menu_id, 1234.5);
        state.update_menu(
            &menu_id,
            &MenuPatch {
                title: Some("Shop".to_string()),
                ..Default::default()
            },
        );

        let raw = encode(&state).unwrap();
        let back = decode(&raw).unwrap();
        assert_eq!(back.menus, state.menus);
        assert_eq!(back.menu_groups, state.menu_groups);
        assert_eq!(back.selected_menu_id, state.selected_menu_id);
        assert_eq!(back.recent_items, state.recent_items);
        assert_eq!(back.id_seq, state.id_seq);
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let mut state = EditorState::default();
        state.create_menu(None);
        let raw = encode(&state).unwrap().replace("\"version\":1", "\"version\":2");
        assert!(decode(&raw).is_none());
    }

    #[test]
    fn test_decode_rejects_corrupt_blob() {
        assert!(decode("not json").is_none());
        assert!(decode("{\"menus\":[]}").is_none());
    }

    #[test]
    fn test_blob_field_names_are_camel_case() {
        let mut state = EditorState::default();
        let menu_id = state.create_menu(None);
        state.add_to_recent(&menu_id, 1.0);
        let raw = encode(&state).unwrap();
        assert!(raw.contains("\"menuGroups\""));
        assert!(raw.contains("\"selectedMenuId\""));
        assert!(raw.contains("\"recentItems\""));
        assert!(raw.contains("\"menuId\""));
    }
}
