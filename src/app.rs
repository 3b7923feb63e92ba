//! MenuCraft Editor App
//!
//! Root component: builds the store from the persisted blob, provides it
//! via context, and switches between the welcome page and the editor.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditorPage, Sidebar, WelcomePage};
use crate::storage;
use crate::store::{store_create_menu, store_open_menu, EditorStore};

#[component]
pub fn App() -> impl IntoView {
    let store: EditorStore = Store::new(storage::load());
    provide_context(store);

    // Keyed on the id so edits inside the menu do not remount the editor
    let current_menu_id = Memo::new(move |_| {
        let state = store.read();
        state
            .selected_menu_id
            .clone()
            .filter(|id| state.menu(id).is_some())
    });

    let on_create_menu = Callback::new(move |()| {
        let id = store_create_menu(&store, None);
        store_open_menu(&store, &id);
    });
    let on_open_menu = Callback::new(move |menu_id: String| {
        store_open_menu(&store, &menu_id);
    });

    let welcome = move || {
        view! {
            <WelcomePage
                recents=Signal::derive(move || store.read().recent_items.clone())
                on_create_menu=on_create_menu
                on_open_menu=on_open_menu
            />
        }
        .into_any()
    };

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                {move || match current_menu_id.get() {
                    Some(id) => {
                        let Some(initial) = store.read_untracked().menu(&id).cloned() else {
                            return welcome();
                        };
                        // Snapshot covers the instant between a delete and
                        // the memo catching up
                        let last_seen = StoredValue::new(initial);
                        let id = StoredValue::new(id);
                        let menu = Signal::derive(move || {
                            match id.with_value(|id| store.read().menu(id).cloned()) {
                                Some(menu) => {
                                    last_seen.set_value(menu.clone());
                                    menu
                                }
                                None => last_seen.get_value(),
                            }
                        });
                        view! { <EditorPage menu=menu /> }.into_any()
                    }
                    None => welcome(),
                }}
            </main>
        </div>
    }
}
