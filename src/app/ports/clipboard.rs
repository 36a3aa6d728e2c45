use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Command not found: {0}")]
    CommandNotFound(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardWriter: Send + Sync {
    fn write(&self, content: &str) -> Result<(), ClipboardError>;
}
