//! Editor Page Component
//!
//! Composition root for one open menu: toolbar, canvas, properties panel
//! and the plugin rail, wired to the store.

use leptos::prelude::*;

use crate::components::{EditorToolbar, MenuCanvas, PluginPanel, PropertiesPanel};
use crate::dialog;
use crate::export;
use crate::models::{ItemTemplate, MenuConfig, MenuItem};
use crate::store::{
    store_create_default_item, store_create_item_from_template, store_delete_menu_item,
    store_move_or_swap_item, store_update_menu, store_update_menu_item, use_editor_store,
};

#[component]
pub fn EditorPage(menu: Signal<MenuConfig>) -> impl IntoView {
    let store = use_editor_store();
    let (selected_item_id, set_selected_item_id) = signal(None::<String>);

    let selected_item: Signal<Option<MenuItem>> = Signal::derive(move || {
        let menu = menu.get();
        selected_item_id
            .get()
            .and_then(|id| menu.item(&id).cloned())
    });

    let on_select_item = Callback::new(move |item_id: Option<String>| {
        set_selected_item_id.set(item_id);
    });

    // Empty slot click: create a default item there and select it
    let on_slot_click = Callback::new(move |slot: i32| {
        let menu = menu.get_untracked();
        if let Some(existing) = menu.item_at_slot(slot) {
            set_selected_item_id.set(Some(existing.id.clone()));
            return;
        }
        if let Some(id) = store_create_default_item(&store, &menu.id, slot) {
            set_selected_item_id.set(Some(id));
        }
    });

    let on_item_move = Callback::new(move |(item_id, slot): (String, i32)| {
        store_move_or_swap_item(&store, &menu.get_untracked().id, &item_id, slot);
    });

    let on_item_create = Callback::new(move |template: ItemTemplate| {
        if let Some(id) = store_create_item_from_template(&store, &menu.get_untracked().id, &template) {
            set_selected_item_id.set(Some(id));
        }
    });

    let on_menu_update = Callback::new(move |patch| {
        store_update_menu(&store, &menu.get_untracked().id, &patch);
    });

    let on_item_update = Callback::new(move |(item_id, patch): (String, _)| {
        store_update_menu_item(&store, &menu.get_untracked().id, &item_id, &patch);
    });

    let on_item_delete = Callback::new(move |item_id: String| {
        store_delete_menu_item(&store, &menu.get_untracked().id, &item_id);
        set_selected_item_id.set(None);
    });

    // Toolbar
    let on_save = Callback::new(move |_| {
        dialog::notify("Saved. Changes are written to local storage on every edit.");
    });
    let on_export = Callback::new(move |_| {
        if let Err(e) = export::export_menu(&menu.get_untracked()) {
            dialog::notify(&format!("Export failed: {}", e));
        }
    });
    let on_import = Callback::new(move |_| {
        dialog::notify("Import is not implemented yet.");
    });
    let on_preview = Callback::new(move |_| {
        dialog::notify("Preview is not implemented yet. It will open the menu in a new window.");
    });

    view! {
        <div class="editor-page">
            <EditorToolbar
                menu_name=Signal::derive(move || menu.get().name)
                on_save=on_save
                on_export=on_export
                on_import=on_import
                on_preview=on_preview
            />
            <div class="editor-body">
                <MenuCanvas
                    menu=menu
                    selected_item_id=selected_item_id
                    on_select_item=on_select_item
                    on_slot_click=on_slot_click
                    on_item_move=on_item_move
                />
                <PropertiesPanel
                    menu=menu
                    selected_item=selected_item
                    on_menu_update=on_menu_update
                    on_item_update=on_item_update
                    on_item_delete=on_item_delete
                />
                <PluginPanel
                    menu=menu
                    selected_item=selected_item
                    on_item_create=on_item_create
                />
            </div>
        </div>
    }
}
