//! Plugin Panel Component
//!
//! Collapsible rail on the far right hosting the content-generator
//! plugins. Each plugin hands item templates back to the editor page
//! through `on_item_create`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::dialog;
use crate::models::{ItemTemplate, MenuConfig, MenuItem};
use crate::plugins::{assets, color_schemes, quick_actions, templates, AVAILABLE_PLUGINS};

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().map(|input| input.value()))
        .unwrap_or_default()
}

#[component]
pub fn PluginPanel(
    menu: Signal<MenuConfig>,
    selected_item: Signal<Option<MenuItem>>,
    on_item_create: Callback<ItemTemplate>,
) -> impl IntoView {
    let (active, set_active) = signal(None::<&'static str>);

    view! {
        <div class="plugin-panel">
            {move || active.get().map(|id| view! {
                <div class="plugin-content">
                    {match id {
                        "item-assets" => view! {
                            <ItemAssetsPlugin selected_item=selected_item on_item_create=on_item_create />
                        }.into_any(),
                        "templates" => view! {
                            <TemplatesPlugin on_item_create=on_item_create />
                        }.into_any(),
                        "quick-actions" => view! {
                            <QuickActionsPlugin menu=menu on_item_create=on_item_create />
                        }.into_any(),
                        "color-scheme" => view! {
                            <ColorSchemePlugin menu=menu on_item_create=on_item_create />
                        }.into_any(),
                        _ => view! { <p class="panel-hint">"Unknown plugin"</p> }.into_any(),
                    }}
                </div>
            })}
            <div class="plugin-rail">
                {AVAILABLE_PLUGINS.map(|plugin| view! {
                    <button
                        class=move || if active.get() == Some(plugin.id) { "plugin-tab active" } else { "plugin-tab" }
                        title=format!("{} — {}", plugin.name, plugin.description)
                        on:click=move |_| set_active.update(|current| {
                            *current = if *current == Some(plugin.id) { None } else { Some(plugin.id) };
                        })
                    >
                        {plugin.icon}
                    </button>
                })}
            </div>
        </div>
    }
}

#[component]
fn TemplatesPlugin(on_item_create: Callback<ItemTemplate>) -> impl IntoView {
    view! {
        <div class="plugin-body">
            <h3>"Menu Templates"</h3>
            {templates::categories().into_iter().map(|category| view! {
                <div class="template-category">
                    <span class="template-category-title">{category}</span>
                    {templates::all()
                        .into_iter()
                        .filter(|template| template.category == category)
                        .map(|template| {
                            let templates::MenuTemplate { name, description, icon, items, .. } = template;
                            let item_count = items.len();
                            let apply = move |_| {
                                let question = format!(
                                    "Apply the \"{}\" template?\nThis creates {} items.",
                                    name, item_count,
                                );
                                if !dialog::confirm(&question) {
                                    return;
                                }
                                for item in &items {
                                    on_item_create.run(item.clone());
                                }
                                dialog::notify(&format!("Template applied: {} items created.", item_count));
                            };
                            view! {
                                <div class="plugin-card">
                                    <div class="plugin-card-header">
                                        <span class="plugin-card-icon">{icon}</span>
                                        <div>
                                            <h4>{name}</h4>
                                            <p>{description}</p>
                                        </div>
                                    </div>
                                    <span class="plugin-card-meta">
                                        {format!("{} items", item_count)}
                                    </span>
                                    <button on:click=apply>"Apply Template"</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn QuickActionsPlugin(
    menu: Signal<MenuConfig>,
    on_item_create: Callback<ItemTemplate>,
) -> impl IntoView {
    let apply_batch = move |items: Vec<ItemTemplate>, done: &str| {
        for item in items {
            on_item_create.run(item);
        }
        dialog::notify(done);
    };

    let fill_border = move |_| {
        if dialog::confirm("Fill the border?\nThis decorates the top and bottom rows.") {
            apply_batch(quick_actions::border(menu.get_untracked().size), "Border filled.");
        }
    };
    let fill_all = move |_| {
        let Some(material) = dialog::prompt("Material to fill with:", "WHITE_STAINED_GLASS_PANE") else {
            return;
        };
        if dialog::confirm(&format!("Fill every slot with {}?", material)) {
            apply_batch(
                quick_actions::fill_all(menu.get_untracked().size, &material.to_uppercase()),
                "All slots filled.",
            );
        }
    };
    let checkerboard = move |_| {
        if dialog::confirm("Create a checkerboard pattern?") {
            apply_batch(quick_actions::checkerboard(menu.get_untracked().size), "Checkerboard created.");
        }
    };
    let corner_buttons = move |_| {
        if dialog::confirm("Add function buttons in the four corners?") {
            apply_batch(quick_actions::corner_buttons(menu.get_untracked().size), "Corner buttons added.");
        }
    };
    let gradient = move |_| {
        if dialog::confirm("Create a rainbow gradient across the top row?") {
            apply_batch(quick_actions::gradient(), "Rainbow gradient created.");
        }
    };

    view! {
        <div class="plugin-body">
            <h3>"Quick Actions"</h3>
            <button class="quick-action" on:click=fill_border>"▦ Fill Border"</button>
            <button class="quick-action" on:click=fill_all>"■ Fill All Slots"</button>
            <button class="quick-action" on:click=checkerboard>"▩ Checkerboard"</button>
            <button class="quick-action" on:click=corner_buttons>"◳ Corner Buttons"</button>
            <button class="quick-action" on:click=gradient>"🌈 Rainbow Gradient"</button>
        </div>
    }
}

#[component]
fn ColorSchemePlugin(
    menu: Signal<MenuConfig>,
    on_item_create: Callback<ItemTemplate>,
) -> impl IntoView {
    view! {
        <div class="plugin-body">
            <h3>"Color Schemes"</h3>
            {color_schemes::SCHEMES.map(|scheme| {
                let apply = move |_| {
                    if !dialog::confirm(&format!("Apply the \"{}\" scheme to the border?", scheme.name)) {
                        return;
                    }
                    for item in color_schemes::apply(&scheme, menu.get_untracked().size) {
                        on_item_create.run(item);
                    }
                    dialog::notify(&format!("Scheme applied: {}.", scheme.name));
                };
                view! {
                    <div class="plugin-card">
                        <div class="plugin-card-header">
                            <div class="scheme-swatches">
                                {scheme.preview.map(|color| view! {
                                    <span class="swatch" style=format!("background-color: {};", color)></span>
                                })}
                            </div>
                            <div>
                                <h4>{scheme.name}</h4>
                                <p>{scheme.description}</p>
                            </div>
                        </div>
                        <button on:click=apply>"Apply Scheme"</button>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn ItemAssetsPlugin(
    selected_item: Signal<Option<MenuItem>>,
    on_item_create: Callback<ItemTemplate>,
) -> impl IntoView {
    let (library, set_library) = signal(assets::load_assets());
    let (query, set_query) = signal(String::new());

    let save_selected = move |_| {
        let Some(item) = selected_item.get_untracked() else {
            dialog::notify("Select an item on the canvas first.");
            return;
        };
        let Some(name) = dialog::prompt("Asset name:", item.display_name.as_deref().unwrap_or("")) else {
            return;
        };
        let now = js_sys::Date::now();
        let asset = assets::ItemAsset {
            id: format!("asset-{}", now as u64),
            name,
            description: None,
            category: "Custom".to_string(),
            tags: Vec::new(),
            created_at: now,
            template: ItemTemplate {
                slot: None,
                material: item.material,
                display_name: item.display_name,
                amount: item.amount,
                lore: item.lore,
                actions: item.actions,
                custom_model_data: item.custom_model_data,
            },
        };
        set_library.update(|library| library.push(asset));
        assets::save_assets(&library.get_untracked());
    };

    let delete_asset = move |asset_id: String| {
        if !dialog::confirm("Delete this asset?") {
            return;
        }
        set_library.update(|library| library.retain(|asset| asset.id != asset_id));
        assets::save_assets(&library.get_untracked());
    };

    view! {
        <div class="plugin-body">
            <h3>"Item Assets"</h3>
            <div class="assets-toolbar">
                <input
                    placeholder="Search assets..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(input_value(&ev))
                />
                <button title="Save the selected item as an asset" on:click=save_selected>"+"</button>
            </div>
            {move || {
                let library = library.get();
                let query = query.get();
                assets::search(&library, &query)
                    .into_iter()
                    .cloned()
                    .map(|asset| {
                        let insert_template = asset.template.clone();
                        let asset_id = asset.id.clone();
                        view! {
                            <div class="plugin-card">
                                <div class="plugin-card-header">
                                    <div>
                                        <h4>{asset.name.clone()}</h4>
                                        {asset.description.clone().map(|d| view! { <p>{d}</p> })}
                                    </div>
                                </div>
                                <span class="plugin-card-meta">{asset.category.clone()}</span>
                                <div class="asset-buttons">
                                    <button on:click=move |_| on_item_create.run(insert_template.clone())>
                                        "Insert"
                                    </button>
                                    <button class="danger" on:click=move |_| delete_asset(asset_id.clone())>
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
