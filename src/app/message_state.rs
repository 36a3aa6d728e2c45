use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Single-slot message line; a newer message replaces the current one.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    pub current: Option<Message>,
    pub expires_at: Option<Instant>,
}

impl MessageState {
    const ERROR_TIMEOUT_SECS: u64 = 3;
    const SUCCESS_TIMEOUT_SECS: u64 = 1;
    const INFO_TIMEOUT_SECS: u64 = 3;

    fn set_at(&mut self, kind: MessageKind, text: String, now: Instant, secs: u64) {
        self.current = Some(Message { kind, text });
        self.expires_at = Some(now + Duration::from_secs(secs));
    }

    pub fn set_error_at(&mut self, msg: String, now: Instant) {
        self.set_at(MessageKind::Error, msg, now, Self::ERROR_TIMEOUT_SECS);
    }

    pub fn set_success_at(&mut self, msg: String, now: Instant) {
        self.set_at(MessageKind::Success, msg, now, Self::SUCCESS_TIMEOUT_SECS);
    }

    pub fn set_info_at(&mut self, msg: String, now: Instant) {
        self.set_at(MessageKind::Info, msg, now, Self::INFO_TIMEOUT_SECS);
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.current = None;
            self.expires_at = None;
        }
    }
}
