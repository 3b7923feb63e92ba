//! Properties Panel Component
//!
//! Right-hand panel editing the menu fields and, when an item is
//! selected, the item fields. Every edit is pushed as a typed patch.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{MenuConfig, MenuItem, MenuItemPatch, MenuPatch, MenuSize, MenuType};

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().map(|input| input.value()))
        .unwrap_or_default()
}

fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_ref::<web_sys::HtmlSelectElement>().map(|select| select.value()))
        .unwrap_or_default()
}

#[component]
pub fn PropertiesPanel(
    menu: Signal<MenuConfig>,
    selected_item: Signal<Option<MenuItem>>,
    on_menu_update: Callback<MenuPatch>,
    on_item_update: Callback<(String, MenuItemPatch)>,
    on_item_delete: Callback<String>,
) -> impl IntoView {
    let (menu_props_open, set_menu_props_open) = signal(true);
    let (item_props_open, set_item_props_open) = signal(true);

    // Keyed on the id so typing into a field does not remount the editors
    let selected_item_id = Memo::new(move |_| selected_item.get().map(|item| item.id));

    let on_title_input = move |ev: web_sys::Event| {
        on_menu_update.run(MenuPatch {
            title: Some(input_value(&ev)),
            ..Default::default()
        });
    };
    let on_size_change = move |ev: web_sys::Event| {
        if let Ok(size) = select_value(&ev)
            .parse::<i32>()
            .map_err(|e| e.to_string())
            .and_then(MenuSize::try_from)
        {
            on_menu_update.run(MenuPatch {
                size: Some(size),
                ..Default::default()
            });
        }
    };
    let on_type_change = move |ev: web_sys::Event| {
        let menu_type = MenuType::ALL
            .into_iter()
            .find(|t| t.label() == select_value(&ev));
        if let Some(menu_type) = menu_type {
            on_menu_update.run(MenuPatch {
                menu_type: Some(menu_type),
                ..Default::default()
            });
        }
    };

    view! {
        <div class="properties-panel">
            // Menu properties
            <section class="panel-section">
                <button
                    class="panel-section-toggle"
                    on:click=move |_| set_menu_props_open.update(|v| *v = !*v)
                >
                    <span>"Menu Properties"</span>
                    <span>{move || if menu_props_open.get() { "▼" } else { "▶" }}</span>
                </button>
                {move || menu_props_open.get().then(|| view! {
                    <div class="panel-section-body">
                        <label class="field-label" for="menu-title">"Title"</label>
                        <input
                            id="menu-title"
                            prop:value=move || menu.get().title
                            placeholder="Menu title"
                            on:input=on_title_input
                        />

                        <label class="field-label" for="menu-size">"Size"</label>
                        <select id="menu-size" prop:value=move || menu.get().size.slot_count().to_string() on:change=on_size_change>
                            {MenuSize::ALL.map(|size| view! {
                                <option value=size.slot_count().to_string()>
                                    {format!("{} slots ({} rows)", size.slot_count(), size.rows())}
                                </option>
                            })}
                        </select>

                        <label class="field-label" for="menu-type">"Type"</label>
                        <select id="menu-type" prop:value=move || menu.get().menu_type.label() on:change=on_type_change>
                            {MenuType::ALL.map(|menu_type| view! {
                                <option value=menu_type.label()>{menu_type.label()}</option>
                            })}
                        </select>

                        <div class="panel-badges">
                            <span class="badge">{move || format!("{} items", menu.get().items.len())}</span>
                            <span class="badge outline">
                                {move || {
                                    let menu = menu.get();
                                    format!("{} free", menu.size.slot_count() - menu.items.len() as i32)
                                }}
                            </span>
                        </div>
                    </div>
                })}
            </section>

            // Item properties
            <section class="panel-section">
                <button
                    class="panel-section-toggle"
                    on:click=move |_| set_item_props_open.update(|v| *v = !*v)
                >
                    <span>{move || if selected_item.get().is_some() { "Item Properties" } else { "No Item Selected" }}</span>
                    <span>{move || if item_props_open.get() { "▼" } else { "▶" }}</span>
                </button>
                {move || item_props_open.get().then(|| view! {
                    <div class="panel-section-body">
                        {move || match selected_item_id.get() {
                            Some(item_id) => view! {
                                <ItemProperties
                                    item_id=item_id
                                    item=selected_item
                                    on_item_update=on_item_update
                                    on_item_delete=on_item_delete
                                />
                            }.into_any(),
                            None => view! {
                                <p class="panel-hint">"Click an item on the canvas to edit it"</p>
                            }.into_any(),
                        }}
                    </div>
                })}
            </section>
        </div>
    }
}

/// Item field editors for the selected item
#[component]
fn ItemProperties(
    item_id: String,
    item: Signal<Option<MenuItem>>,
    on_item_update: Callback<(String, MenuItemPatch)>,
    on_item_delete: Callback<String>,
) -> impl IntoView {
    let (lore_input, set_lore_input) = signal(String::new());
    let item_id = StoredValue::new(item_id);

    let patch = move |patch: MenuItemPatch| {
        on_item_update.run((item_id.get_value(), patch));
    };

    let on_material_input = move |ev: web_sys::Event| {
        patch(MenuItemPatch {
            material: Some(input_value(&ev).to_uppercase()),
            ..Default::default()
        });
    };
    let on_name_input = move |ev: web_sys::Event| {
        patch(MenuItemPatch {
            display_name: Some(input_value(&ev)),
            ..Default::default()
        });
    };
    let on_amount_input = move |ev: web_sys::Event| {
        if let Ok(amount) = input_value(&ev).parse::<i32>() {
            patch(MenuItemPatch {
                amount: Some(amount),
                ..Default::default()
            });
        }
    };
    let on_model_data_input = move |ev: web_sys::Event| {
        let raw = input_value(&ev);
        let custom_model_data = if raw.trim().is_empty() {
            Some(None)
        } else {
            raw.trim().parse::<i32>().ok().map(Some)
        };
        if let Some(custom_model_data) = custom_model_data {
            patch(MenuItemPatch {
                custom_model_data: Some(custom_model_data),
                ..Default::default()
            });
        }
    };

    let current_lore = move || item.get_untracked().map(|i| i.lore).unwrap_or_default();
    let add_lore = move || {
        let line = lore_input.get_untracked().trim().to_string();
        if line.is_empty() {
            return;
        }
        let mut lore = current_lore();
        lore.push(line);
        patch(MenuItemPatch {
            lore: Some(lore),
            ..Default::default()
        });
        set_lore_input.set(String::new());
    };
    let remove_lore = move |index: usize| {
        let mut lore = current_lore();
        if index < lore.len() {
            lore.remove(index);
        }
        patch(MenuItemPatch {
            lore: Some(lore),
            ..Default::default()
        });
    };

    view! {
        <div class="item-properties">
            <label class="field-label" for="item-material">"Material"</label>
            <input
                id="item-material"
                class="mono"
                prop:value=move || item.get().map(|i| i.material).unwrap_or_default()
                placeholder="DIAMOND"
                on:input=on_material_input
            />

            <label class="field-label" for="item-display-name">"Display Name"</label>
            <input
                id="item-display-name"
                prop:value=move || item.get().and_then(|i| i.display_name).unwrap_or_default()
                placeholder="Custom name"
                on:input=on_name_input
            />

            <div class="field-row">
                <div>
                    <label class="field-label" for="item-amount">"Amount"</label>
                    <input
                        id="item-amount"
                        type="number"
                        min="1"
                        max="64"
                        prop:value=move || item.get().and_then(|i| i.amount).unwrap_or(1).to_string()
                        on:input=on_amount_input
                    />
                </div>
                <div>
                    <label class="field-label" for="item-slot">"Slot"</label>
                    <input
                        id="item-slot"
                        type="number"
                        prop:value=move || item.get().map(|i| i.slot.to_string()).unwrap_or_default()
                        disabled
                    />
                </div>
            </div>

            <label class="field-label" for="item-custom-model">"Custom Model Data"</label>
            <input
                id="item-custom-model"
                type="number"
                prop:value=move || {
                    item.get()
                        .and_then(|i| i.custom_model_data)
                        .map(|d| d.to_string())
                        .unwrap_or_default()
                }
                placeholder="Empty for none"
                on:input=on_model_data_input
            />

            <label class="field-label">"Lore"</label>
            <div class="lore-list">
                {move || item.get().map(|i| i.lore).unwrap_or_default().into_iter().enumerate().map(|(index, line)| view! {
                    <div class="lore-line">
                        <span>{line}</span>
                        <button class="lore-remove" on:click=move |_| remove_lore(index)>"✕"</button>
                    </div>
                }).collect_view()}
            </div>
            <div class="lore-add">
                <input
                    prop:value=move || lore_input.get()
                    placeholder="Add a lore line"
                    on:input=move |ev| set_lore_input.set(input_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" { add_lore(); }
                    }
                />
                <button on:click=move |_| add_lore()>"+"</button>
            </div>

            <div class="actions-card">
                <span class="actions-title">"Click Actions"</span>
                <span class="actions-count">
                    {move || match item.get().map(|i| i.actions.len()).unwrap_or(0) {
                        0 => "No actions".to_string(),
                        n => format!("{} actions", n),
                    }}
                </span>
            </div>

            <button
                class="danger"
                on:click=move |_| on_item_delete.run(item_id.get_value())
            >
                "Delete Item"
            </button>
        </div>
    }
}
