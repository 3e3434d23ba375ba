//! System clipboard access for the `--copy` flag.

use tracing::warn;

/// Copy `text` to the system clipboard. Returns whether it succeeded.
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "could not copy palette to clipboard");
            false
        }
    }
}
