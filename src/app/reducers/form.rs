//! Form sub-reducer: field focus, text editing and statement kind selection.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::form_field::FormField;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::text_field::TextField;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_form(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::FocusNext => {
            state.ui.input_mode = InputMode::Normal;
            state.form.focused = state.form.focused.next();
            Some(vec![])
        }
        Action::FocusPrev => {
            state.ui.input_mode = InputMode::Normal;
            state.form.focused = state.form.focused.prev();
            Some(vec![])
        }
        Action::BeginEdit => {
            if state.form.focused == FormField::StatementKind {
                state.form.kind = state.form.kind.next();
                state.regenerate();
            } else {
                state.ui.input_mode = InputMode::Editing;
            }
            Some(vec![])
        }
        Action::EndEdit => {
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }

        Action::Input(c) => {
            if state.ui.is_editing() && state.form.insert_char(*c) {
                state.regenerate();
            }
            Some(vec![])
        }
        Action::Paste(text) => {
            if state.ui.is_editing() && state.form.insert_str(text) {
                state.regenerate();
            }
            Some(vec![])
        }
        Action::NewLine => {
            if state.form.focused.is_multiline() {
                if state.form.insert_char('\n') {
                    state.regenerate();
                }
            } else {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::Backspace => {
            edit_focused(state, |field| field.backspace());
            Some(vec![])
        }
        Action::Delete => {
            edit_focused(state, |field| field.delete());
            Some(vec![])
        }
        Action::ClearField => {
            edit_focused(state, |field| field.clear());
            Some(vec![])
        }
        Action::MoveCursor(movement) => {
            if let Some(field) = state.form.focused_field_mut() {
                field.move_cursor(*movement);
            }
            Some(vec![])
        }

        Action::SelectStatementKind(kind) => {
            state.form.kind = *kind;
            state.regenerate();
            Some(vec![])
        }
        Action::NextStatementKind => {
            state.form.kind = state.form.kind.next();
            state.regenerate();
            Some(vec![])
        }
        Action::PrevStatementKind => {
            state.form.kind = state.form.kind.prev();
            state.regenerate();
            Some(vec![])
        }

        _ => None,
    }
}

fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut TextField)) {
    if let Some(field) = state.form.focused_field_mut() {
        edit(field);
        state.regenerate();
    }
}
