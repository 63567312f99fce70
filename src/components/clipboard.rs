//! System clipboard access.

/// Put `text` on the system clipboard. Returns whether it worked.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            tracing::warn!("Clipboard not available: {}", e);
            false
        }
    }
}
