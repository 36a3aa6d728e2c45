use std::time::{Duration, Instant};

/// Generated SQL and how the preview shows it.
#[derive(Debug, Clone)]
pub struct OutputState {
    pub sql: String,
    pub preview_visible: bool,
    pub copied_until: Option<Instant>,
}

impl OutputState {
    pub const COPIED_FLASH: Duration = Duration::from_millis(1200);

    pub fn mark_copied_at(&mut self, now: Instant) {
        self.copied_until = Some(now + Self::COPIED_FLASH);
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| until > now)
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| until <= now) {
            self.copied_until = None;
        }
    }
}

impl Default for OutputState {
    fn default() -> Self {
        Self {
            sql: String::new(),
            preview_visible: true,
            copied_until: None,
        }
    }
}
