//! Editor Toolbar Component
//!
//! Save/export/import/preview controls for the open menu. Undo/redo are
//! rendered disabled; the history stack is not implemented.

use leptos::prelude::*;

#[component]
pub fn EditorToolbar(
    menu_name: Signal<String>,
    on_save: Callback<()>,
    on_export: Callback<()>,
    on_import: Callback<()>,
    on_preview: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="editor-toolbar">
            <div class="toolbar-left">
                <span class="toolbar-menu-name">{move || menu_name.get()}</span>
                <span class="toolbar-separator"></span>
                <button title="Save (Ctrl+S)" on:click=move |_| on_save.run(())>"💾 Save"</button>
                <button title="Export as file" on:click=move |_| on_export.run(())>"⬇ Export"</button>
                <button title="Import from file" on:click=move |_| on_import.run(())>"⬆ Import"</button>
            </div>
            <div class="toolbar-center">
                <button title="Undo (Ctrl+Z)" disabled>"↶"</button>
                <button title="Redo (Ctrl+Y)" disabled>"↷"</button>
            </div>
            <div class="toolbar-right">
                <button class="primary" title="Preview the menu" on:click=move |_| on_preview.run(())>
                    "▶ Preview"
                </button>
            </div>
        </div>
    }
}
