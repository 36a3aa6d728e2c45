mod arboard;
mod command;

pub use self::arboard::ArboardClipboard;
pub use command::{ClipboardCommand, CommandClipboard, platform_commands};

use crate::app::ports::{ClipboardError, ClipboardWriter};

/// Tries `primary`, then `fallback`. Only the fallback's error is returned.
pub struct FallbackClipboard {
    primary: Box<dyn ClipboardWriter>,
    fallback: Box<dyn ClipboardWriter>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn ClipboardWriter>, fallback: Box<dyn ClipboardWriter>) -> Self {
        Self { primary, fallback }
    }

    /// arboard first, external commands second.
    pub fn system() -> Self {
        Self::new(
            Box::new(ArboardClipboard::new()),
            Box::new(CommandClipboard::new()),
        )
    }
}

impl ClipboardWriter for FallbackClipboard {
    fn write(&self, content: &str) -> Result<(), ClipboardError> {
        match self.primary.write(content) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::info!(error = %e, "primary clipboard failed, trying fallback");
                self.fallback.write(content)
            }
        }
    }
}
