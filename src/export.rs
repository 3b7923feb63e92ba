//! Menu Export
//!
//! Placeholder export path: serializes one menu to pretty JSON and offers
//! it as a download. There is no import counterpart yet.

use wasm_bindgen::JsCast;

use crate::models::MenuConfig;

/// Render the downloadable blob for one menu
pub fn render_menu(menu: &MenuConfig) -> Result<String, String> {
    serde_json::to_string_pretty(menu).map_err(|e| e.to_string())
}

/// Serialize `menu` and trigger a `<name>.json` download
pub fn export_menu(menu: &MenuConfig) -> Result<(), String> {
    let contents = render_menu(menu)?;
    download(&format!("{}.json", menu.name), &contents)
}

fn download(filename: &str, contents: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("document unavailable")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build blob")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "failed to build url")?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor")?
        .dyn_into()
        .map_err(|_| "failed to create anchor")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditorState;

    #[test]
    fn test_render_menu_is_pretty_json() {
        let mut state = EditorState::default();
        let menu_id = state.create_menu(None);
        state.create_default_item(&menu_id, 0);
        let rendered = render_menu(state.menu(&menu_id).unwrap()).unwrap();
        assert!(rendered.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["size"], 54);
        assert_eq!(parsed["type"], "CHEST");
        assert_eq!(parsed["items"][0]["slot"], 0);
    }
}
