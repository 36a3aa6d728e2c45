//! Pure functions for calculating redraw deadlines.
//!
//! The UI layer uses the returned deadline to schedule a wake-up so that
//! timed state (message line, copy flash) disappears without user input.

use std::time::Instant;

use crate::app::state::AppState;

/// Returns `None` when nothing is time-dependent (caller can wait for input).
/// Deadlines already in the past are returned as-is so the caller redraws at once.
pub fn next_animation_deadline(state: &AppState) -> Option<Instant> {
    min_instant(state.messages.expires_at, state.output.copied_until)
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn idle_state_returns_none() {
        let state = AppState::default();

        assert!(next_animation_deadline(&state).is_none());
    }

    #[test]
    fn message_timeout_returns_expiration() {
        let mut state = AppState::default();
        let expires_at = Instant::now() + Duration::from_secs(3);
        state.messages.expires_at = Some(expires_at);

        assert_eq!(next_animation_deadline(&state), Some(expires_at));
    }

    #[test]
    fn copy_flash_alone_returns_its_end() {
        let mut state = AppState::default();
        let now = Instant::now();
        state.output.mark_copied_at(now);

        assert_eq!(
            next_animation_deadline(&state),
            Some(now + Duration::from_millis(1200))
        );
    }

    #[test]
    fn earlier_deadline_wins() {
        let mut state = AppState::default();
        let now = Instant::now();
        state.messages.expires_at = Some(now + Duration::from_secs(3));
        state.output.mark_copied_at(now);

        assert_eq!(
            next_animation_deadline(&state),
            Some(now + Duration::from_millis(1200))
        );
    }
}
