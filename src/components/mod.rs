//! UI Components
//!
//! Leptos components for the editor.

mod editor_page;
mod editor_toolbar;
mod menu_canvas;
mod plugin_panel;
mod properties_panel;
mod sidebar;
mod welcome_page;

pub use editor_page::EditorPage;
pub use editor_toolbar::EditorToolbar;
pub use menu_canvas::MenuCanvas;
pub use plugin_panel::PluginPanel;
pub use properties_panel::PropertiesPanel;
pub use sidebar::Sidebar;
pub use welcome_page::WelcomePage;
