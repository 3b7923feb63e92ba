//! Welcome Page Component
//!
//! Landing view when no menu is open: quick actions and the recent list.

use leptos::prelude::*;

use crate::dialog;
use crate::models::RecentEntry;

fn opened_label(timestamp: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
    String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
}

#[component]
pub fn WelcomePage(
    recents: Signal<Vec<RecentEntry>>,
    on_create_menu: Callback<()>,
    on_open_menu: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="welcome-page">
            <div class="welcome-hero">
                <span class="welcome-logo">"🧰"</span>
                <div>
                    <h1>"Welcome to MenuCraft Editor"</h1>
                    <p>"Design inventory menus visually, without touching a config file"</p>
                </div>
            </div>

            <section class="welcome-actions">
                <h2>"Get Started"</h2>
                <div class="action-grid">
                    <button class="action-card primary" on:click=move |_| on_create_menu.run(())>
                        <span class="action-icon">"＋"</span>
                        <span class="action-title">"New Menu"</span>
                        <span class="action-desc">"Start from a blank canvas"</span>
                    </button>
                    <button class="action-card" on:click=move |_| dialog::notify("Import is not implemented yet.")>
                        <span class="action-icon">"⬆"</span>
                        <span class="action-title">"Import"</span>
                        <span class="action-desc">"Load an existing config file"</span>
                    </button>
                    <button class="action-card" on:click=move |_| dialog::notify("Starting from a template is not implemented yet.")>
                        <span class="action-icon">"✨"</span>
                        <span class="action-title">"From Template"</span>
                        <span class="action-desc">"Begin with a preset layout"</span>
                    </button>
                </div>
            </section>

            <section class="welcome-recents">
                <h2>"Recently Opened"</h2>
                {move || {
                    let recents = recents.get();
                    if recents.is_empty() {
                        view! { <p class="panel-hint">"Menus you open will show up here"</p> }.into_any()
                    } else {
                        view! {
                            <div class="recent-list">
                                {recents.into_iter().map(|entry| {
                                    let menu_id = entry.menu_id.clone();
                                    view! {
                                        <button class="recent-row" on:click=move |_| on_open_menu.run(menu_id.clone())>
                                            <span class="recent-name">{entry.menu_name.clone()}</span>
                                            <span class="recent-time">{opened_label(entry.timestamp)}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>
        </div>
    }
}
