use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use super::status_message::StatusMessage;
use crate::app::form_field::FormField;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{EDIT_KEYS, HELP_KEYS, NORMAL_KEYS, idx};
use crate::app::state::AppState;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match &state.messages.current {
            Some(message) => StatusMessage::render_line(message),
            None => hint_line(&Self::get_context_hints(state)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Hint ordering: Actions → Navigation → Help → Quit
    pub fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui.input_mode {
            InputMode::Normal => {
                let mut list = vec![
                    NORMAL_KEYS[idx::normal::COPY].as_hint(),
                    NORMAL_KEYS[idx::normal::EXPORT].as_hint(),
                    NORMAL_KEYS[idx::normal::EXECUTE].as_hint(),
                    NORMAL_KEYS[idx::normal::PREVIEW].as_hint(),
                    NORMAL_KEYS[idx::normal::RESET].as_hint(),
                ];
                if state.form.focused == FormField::StatementKind {
                    list.push(NORMAL_KEYS[idx::normal::ACTION_CYCLE].as_hint());
                } else {
                    list.push(NORMAL_KEYS[idx::normal::EDIT].as_hint());
                }
                list.push(NORMAL_KEYS[idx::normal::ACTION_DIRECT].as_hint());
                list.push(NORMAL_KEYS[idx::normal::FIELD_NAV].as_hint());
                list.push(NORMAL_KEYS[idx::normal::HELP].as_hint());
                list.push(NORMAL_KEYS[idx::normal::QUIT].as_hint());
                list
            }
            InputMode::Editing => {
                let mut list = vec![EDIT_KEYS[idx::edit::DONE].as_hint()];
                if state.form.focused.is_multiline() {
                    list.push(EDIT_KEYS[idx::edit::NEWLINE].as_hint());
                }
                list.push(EDIT_KEYS[idx::edit::NEXT].as_hint());
                list.push(EDIT_KEYS[idx::edit::MOVE].as_hint());
                list.push(EDIT_KEYS[idx::edit::CLEAR].as_hint());
                list
            }
            InputMode::Help => vec![
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }
}
