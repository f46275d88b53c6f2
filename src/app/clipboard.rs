//! System clipboard integration for committed selections.

use super::*;

impl App {
    // A new arboard::Clipboard per copy; App never holds one.

    /// Writes text to the system clipboard via arboard.
    pub(super) fn copy_to_clipboard(&self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clip) => {
                if let Err(err) = clip.set_text(text.to_string()) {
                    tracing::debug!(%err, "clipboard write failed");
                }
            }
            Err(err) => tracing::debug!(%err, "clipboard unavailable"),
        }
    }
}
