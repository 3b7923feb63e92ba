//! Sidebar Component
//!
//! Workspace navigation: recency dropdown, grouped and ungrouped menu
//! lists with mouse-based drag reordering, and group management.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_group_mouseenter,
    make_on_group_zone_mouseenter, make_on_menu_zone_mouseenter, make_on_mousedown, DndSignals,
    DragId, DropTarget,
};

use crate::dialog;
use crate::models::MenuConfig;
use crate::store::{
    handle_menu_drop, store_clear_recent, store_create_group, store_create_menu,
    store_delete_group, store_delete_menu, store_open_menu, store_rename_group,
    store_rename_menu, store_set_selected_menu, use_editor_store,
};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_editor_store();
    let dnd = create_dnd_signals();
    let (show_recents, set_show_recents) = signal(false);
    let (collapsed_groups, set_collapsed_groups) = signal(Vec::<String>::new());

    bind_global_mouseup(dnd, move |dragged, target| {
        handle_menu_drop(&store, dragged, target);
    });

    let go_home = move |_| store_set_selected_menu(&store, None);
    let new_menu = move |_| {
        let id = store_create_menu(&store, None);
        store_open_menu(&store, &id);
    };
    let new_group = move |_| {
        store_create_group(&store);
    };

    let toggle_group = move |group_id: String| {
        set_collapsed_groups.update(|collapsed| {
            if let Some(pos) = collapsed.iter().position(|id| *id == group_id) {
                collapsed.remove(pos);
            } else {
                collapsed.push(group_id);
            }
        });
    };

    view! {
        <div class="sidebar">
            <div class="sidebar-header">
                <span class="sidebar-title">"MenuCraft"</span>
                <div class="sidebar-actions">
                    <button title="New menu" on:click=new_menu>"＋"</button>
                    <button title="New group" on:click=new_group>"🗂"</button>
                </div>
            </div>

            <button class="sidebar-home" on:click=go_home>"🏠 Home"</button>

            <div class="sidebar-recents">
                <button
                    class="recents-toggle"
                    on:click=move |_| set_show_recents.update(|open| *open = !*open)
                >
                    {move || if show_recents.get() { "▾ Recent" } else { "▸ Recent" }}
                    {move || {
                        let count = store.read().recent_items.len();
                        (count > 0).then(|| view! { <span class="recents-count">{count}</span> })
                    }}
                </button>
                {move || show_recents.get().then(|| {
                    let recents = store.read().recent_items.clone();
                    view! {
                        <div class="recents-dropdown">
                            {if recents.is_empty() {
                                view! { <p class="panel-hint">"No recent menus"</p> }.into_any()
                            } else {
                                view! {
                                    <div>
                                        {recents.into_iter().map(|entry| {
                                            let menu_id = entry.menu_id.clone();
                                            view! {
                                                <button
                                                    class="recent-row"
                                                    on:click=move |_| store_open_menu(&store, &menu_id)
                                                >
                                                    {entry.menu_name.clone()}
                                                </button>
                                            }
                                        }).collect_view()}
                                        <button
                                            class="recents-clear"
                                            on:click=move |_| store_clear_recent(&store)
                                        >
                                            "Clear recent"
                                        </button>
                                    </div>
                                }.into_any()
                            }}
                        </div>
                    }
                })}
            </div>

            <div class="sidebar-tree">
                // Groups, each preceded by a reorder zone
                {move || {
                    let groups = store.read().sorted_groups();
                    let count = groups.len() as i32;
                    view! {
                        {groups.into_iter().enumerate().map(|(index, group)| {
                            let group_id = group.id.clone();
                            let collapsed = Memo::new({
                                let group_id = group_id.clone();
                                move |_| collapsed_groups.get().contains(&group_id)
                            });
                            view! {
                                <GroupZone dnd=dnd position={index as i32} />
                                <GroupRow
                                    dnd=dnd
                                    group_id=group_id.clone()
                                    group_name=group.name.clone()
                                    collapsed=collapsed
                                    on_toggle=Callback::new(toggle_group)
                                />
                                {move || (!collapsed.get()).then(|| {
                                    let group_id = group_id.clone();
                                    let menus = store.read().group_menus(&group_id);
                                    view! {
                                        <div class="group-children">
                                            <MenuList dnd=dnd scope=Some(group_id) menus=menus />
                                        </div>
                                    }
                                })}
                            }
                        }).collect_view()}
                        <GroupZone dnd=dnd position=count />
                    }
                }}

                // Ungrouped menus at the root
                {move || {
                    let menus = store.read().ungrouped_menus();
                    view! { <MenuList dnd=dnd scope=None menus=menus /> }
                }}
            </div>
        </div>
    }
}

/// One sibling scope of menu rows with drop zones between them
#[component]
fn MenuList(dnd: DndSignals, scope: Option<String>, menus: Vec<MenuConfig>) -> impl IntoView {
    let count = menus.len() as i32;
    let tail_scope = scope.clone();
    view! {
        {menus.into_iter().enumerate().map(|(index, menu)| {
            let scope = scope.clone();
            view! {
                <MenuZone dnd=dnd scope=scope.clone() position={index as i32} />
                <MenuRow dnd=dnd menu=menu />
            }
        }).collect_view()}
        <MenuZone dnd=dnd scope=tail_scope position=count />
    }
}

#[component]
fn MenuRow(dnd: DndSignals, menu: MenuConfig) -> impl IntoView {
    let store = use_editor_store();
    let menu_id = menu.id.clone();

    let is_selected = Memo::new({
        let menu_id = menu_id.clone();
        move |_| store.read().selected_menu_id.as_deref() == Some(menu_id.as_str())
    });
    let is_dragging = Memo::new({
        let drag_id = DragId::Menu(menu_id.clone());
        move |_| dnd.dragging_read.get().as_ref() == Some(&drag_id)
    });

    let open = {
        let menu_id = menu_id.clone();
        move |_| {
            // A drop that just happened should not also open the menu
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            store_open_menu(&store, &menu_id);
        }
    };
    let rename = {
        let menu_id = menu_id.clone();
        let current = menu.name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if let Some(name) = dialog::prompt("Menu name:", &current) {
                store_rename_menu(&store, &menu_id, &name);
            }
        }
    };
    let delete = {
        let menu_id = menu_id.clone();
        let name = menu.name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if dialog::confirm(&format!("Delete menu \"{}\"?", name)) {
                store_delete_menu(&store, &menu_id);
            }
        }
    };

    view! {
        <div
            class="menu-row"
            class:selected=move || is_selected.get()
            class:dragging=move || is_dragging.get()
            on:mousedown=make_on_mousedown(dnd, DragId::Menu(menu.id.clone()))
            on:click=open
        >
            <span class="menu-row-icon">"▤"</span>
            <span class="menu-row-name">{menu.name.clone()}</span>
            <span class="menu-row-count">{menu.items.len()}</span>
            <span class="row-actions">
                <button title="Rename" on:click=rename>"✎"</button>
                <button title="Delete" on:click=delete>"🗑"</button>
            </span>
        </div>
    }
}

#[component]
fn GroupRow(
    dnd: DndSignals,
    group_id: String,
    group_name: String,
    collapsed: Memo<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let store = use_editor_store();

    let is_drop_target = Memo::new({
        let group_id = group_id.clone();
        move |_| {
            matches!(dnd.drop_target_read.get(), Some(DropTarget::Group(ref id)) if *id == group_id)
        }
    });
    let is_dragging = Memo::new({
        let drag_id = DragId::Group(group_id.clone());
        move |_| dnd.dragging_read.get().as_ref() == Some(&drag_id)
    });

    let toggle = {
        let group_id = group_id.clone();
        move |_| {
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            on_toggle.run(group_id.clone());
        }
    };
    let rename = {
        let group_id = group_id.clone();
        let current = group_name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if let Some(name) = dialog::prompt("Group name:", &current) {
                store_rename_group(&store, &group_id, &name);
            }
        }
    };
    let delete = {
        let group_id = group_id.clone();
        let name = group_name.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let question = format!(
                "Delete group \"{}\"?\nIts menus move back to the workspace root.",
                name,
            );
            if dialog::confirm(&question) {
                store_delete_group(&store, &group_id);
            }
        }
    };
    let add_menu = {
        let group_id = group_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let id = store_create_menu(&store, Some(&group_id));
            store_open_menu(&store, &id);
        }
    };

    view! {
        <div
            class="group-row"
            class=("drop-target", move || is_drop_target.get())
            class:dragging=move || is_dragging.get()
            on:mousedown=make_on_mousedown(dnd, DragId::Group(group_id.clone()))
            on:mouseenter=make_on_group_mouseenter(dnd, group_id.clone())
            on:click=toggle
        >
            <span class="group-row-caret">
                {move || if collapsed.get() { "▸" } else { "▾" }}
            </span>
            <span class="group-row-name">{group_name.clone()}</span>
            <span class="row-actions">
                <button title="New menu in group" on:click=add_menu>"＋"</button>
                <button title="Rename" on:click=rename>"✎"</button>
                <button title="Delete" on:click=delete>"🗑"</button>
            </span>
        </div>
    }
}

/// Thin drop zone between menu rows of one sibling scope
#[component]
fn MenuZone(dnd: DndSignals, scope: Option<String>, position: i32) -> impl IntoView {
    let active = Memo::new({
        let scope = scope.clone();
        move |_| {
            matches!(
                dnd.drop_target_read.get(),
                Some(DropTarget::MenuZone(ref s, p)) if *s == scope && p == position
            )
        }
    });
    view! {
        <div
            class="drop-zone"
            class:active=move || active.get()
            on:mouseenter=make_on_menu_zone_mouseenter(dnd, scope.clone(), position)
        ></div>
    }
}

/// Thin drop zone between group headers
#[component]
fn GroupZone(dnd: DndSignals, position: i32) -> impl IntoView {
    let active = Memo::new(move |_| {
        matches!(
            dnd.drop_target_read.get(),
            Some(DropTarget::GroupZone(p)) if p == position
        )
    });
    view! {
        <div
            class="drop-zone"
            class:active=move || active.get()
            on:mouseenter=make_on_group_zone_mouseenter(dnd, position)
        ></div>
    }
}
