use std::sync::Mutex;

use crate::app::ports::{ClipboardError, ClipboardWriter};

/// System clipboard through `arboard`.
///
/// The handle is created on first use and kept alive: on X11 the copied text
/// is only served while the owning `Clipboard` exists.
pub struct ArboardClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write(&self, content: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(content)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable(
                "clipboard not initialized".to_string(),
            )),
        }
    }
}
