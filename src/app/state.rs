use std::time::Instant;

use super::form_state::FormState;
use super::message_state::MessageState;
use super::output_state::OutputState;
use super::settings::FormDefaults;
use super::statement_builder::build_statement;
use super::ui_state::UiState;
use crate::domain::GenerationRequest;

pub struct AppState {
    pub should_quit: bool,
    pub form: FormState,
    pub output: OutputState,
    pub ui: UiState,
    pub messages: MessageState,
    /// What `ResetForm` restores.
    pub defaults: FormDefaults,
    render_dirty: bool,
}

impl AppState {
    pub fn new(defaults: FormDefaults) -> Self {
        let mut state = Self {
            should_quit: false,
            form: FormState::from_defaults(&defaults),
            output: OutputState::default(),
            ui: UiState::default(),
            messages: MessageState::default(),
            defaults,
            render_dirty: true,
        };
        state.regenerate();
        state
    }

    pub fn request(&self) -> GenerationRequest {
        self.form.to_request()
    }

    /// Rebuilds the preview from the current form text.
    pub fn regenerate(&mut self) {
        self.output.sql = build_statement(&self.request());
    }

    pub fn set_error_at(&mut self, msg: String, now: Instant) {
        self.messages.set_error_at(msg, now);
    }

    pub fn set_success_at(&mut self, msg: String, now: Instant) {
        self.messages.set_success_at(msg, now);
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
        self.output.clear_expired_at(now);
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.render_dirty
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}
