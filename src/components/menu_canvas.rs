//! Menu Canvas Component
//!
//! The slot grid for one menu: 9 columns, `size / 9` rows. Items drag
//! between slots with HTML5 drag events; dropping on an occupied slot
//! swaps the two items.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::icons::material_glyph;
use crate::models::MenuConfig;

#[component]
pub fn MenuCanvas(
    /// The menu being edited
    menu: Signal<MenuConfig>,
    /// Currently selected item id
    selected_item_id: ReadSignal<Option<String>>,
    /// Select an item (None clears the selection)
    on_select_item: Callback<Option<String>>,
    /// Click on an empty slot
    on_slot_click: Callback<i32>,
    /// Drop of (item id, target slot)
    on_item_move: Callback<(String, i32)>,
) -> impl IntoView {
    let (dragged_item_id, set_dragged_item_id) = signal(None::<String>);
    let (drag_over_slot, set_drag_over_slot) = signal(None::<i32>);

    let slot_count = move || menu.get().size.slot_count();
    let rows = move || menu.get().size.rows();

    let render_slot = move |slot: i32| {
        let item = Memo::new(move |_| menu.get().item_at_slot(slot).cloned());
        let is_drag_over = move || drag_over_slot.get() == Some(slot);
        let is_selected = move || {
            matches!((item.get(), selected_item_id.get()),
                (Some(item), Some(selected)) if item.id == selected)
        };

        let on_click = move |_| match item.get_untracked() {
            Some(item) => on_select_item.run(Some(item.id)),
            None => on_slot_click.run(slot),
        };
        let on_dragover = move |ev: DragEvent| {
            ev.prevent_default();
            set_drag_over_slot.set(Some(slot));
        };
        let on_drop = move |ev: DragEvent| {
            ev.prevent_default();
            if let Some(dragged) = dragged_item_id.get_untracked() {
                on_item_move.run((dragged, slot));
            }
            set_dragged_item_id.set(None);
            set_drag_over_slot.set(None);
        };

        view! {
            <div
                class=move || {
                    let mut c = "menu-slot".to_string();
                    if item.get().is_some() { c.push_str(" occupied"); } else { c.push_str(" empty"); }
                    if is_selected() { c.push_str(" selected"); }
                    if is_drag_over() { c.push_str(" drag-over"); }
                    c
                }
                on:click=on_click
                on:dragover=on_dragover
                on:drop=on_drop
            >
                {move || match item.get() {
                    Some(item) => {
                        let item_id = item.id.clone();
                        let is_dragging = {
                            let item_id = item_id.clone();
                            move || dragged_item_id.get().as_deref() == Some(item_id.as_str())
                        };
                        let on_dragstart = {
                            let item_id = item_id.clone();
                            move |ev: DragEvent| {
                                if let Some(transfer) = ev.data_transfer() {
                                    transfer.set_effect_allowed("move");
                                }
                                set_dragged_item_id.set(Some(item_id.clone()));
                            }
                        };
                        let on_dragend = move |_: DragEvent| {
                            set_dragged_item_id.set(None);
                            set_drag_over_slot.set(None);
                        };
                        view! {
                            <div
                                class=move || if is_dragging() { "slot-item dragging" } else { "slot-item" }
                                draggable="true"
                                on:dragstart=on_dragstart
                                on:dragend=on_dragend
                            >
                                <span class="slot-glyph">{material_glyph(&item.material)}</span>
                                {item.amount.filter(|amount| *amount > 1).map(|amount| view! {
                                    <span class="slot-amount">{amount}</span>
                                })}
                                {item.custom_model_data.map(|data| view! {
                                    <span class="slot-model-data">{format!("#{}", data)}</span>
                                })}
                            </div>
                        }.into_any()
                    }
                    None => view! { <div class="slot-empty-mark">"+"</div> }.into_any(),
                }}
                <span class="slot-index">{slot}</span>
            </div>
        }
    };

    view! {
        <div class="menu-canvas">
            <div class="canvas-header">
                <h2>{move || menu.get().title}</h2>
                <p class="canvas-meta">
                    {move || {
                        let menu = menu.get();
                        format!(
                            "{} slots • {} • {} items",
                            menu.size.slot_count(),
                            menu.menu_type.label(),
                            menu.items.len(),
                        )
                    }}
                </p>
            </div>
            <div
                class="menu-grid"
                style=move || format!(
                    "display: grid; grid-template-columns: repeat(9, 1fr); grid-template-rows: repeat({}, 1fr); gap: 4px;",
                    rows()
                )
            >
                {move || (0..slot_count()).map(render_slot).collect_view()}
            </div>
        </div>
    }
}
