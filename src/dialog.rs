//! Browser Dialogs
//!
//! Thin wrappers over the blocking window dialogs. Unimplemented features
//! are surfaced to the user through `notify`.

/// Blocking notice
pub fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Ok/Cancel confirmation; false when the window is unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Text prompt with a prefilled default. None on cancel; the trimmed
/// input otherwise, dropped when empty.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    let value = web_sys::window()?
        .prompt_with_message_and_default(message, default)
        .ok()??;
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
