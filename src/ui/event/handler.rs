use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::form_field::FormField;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::text_field::CursorMove;
use crate::domain::StatementKind;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Paste(text) => {
            if state.ui.input_mode == InputMode::Editing {
                Action::Paste(text)
            } else {
                Action::None
            }
        }
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key, state.form.focused),
        InputMode::Editing => handle_edit_mode(key),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent, focused: FormField) -> Action {
    match (key.code, key.modifiers) {
        // Shift+Tab: Previous field
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => {
            return Action::FocusPrev;
        }
        // BackTab (some terminals send this for Shift+Tab)
        (KeyCode::BackTab, _) => {
            return Action::FocusPrev;
        }
        (KeyCode::Tab, _) => {
            return Action::FocusNext;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Field navigation
        KeyCode::Down | KeyCode::Char('j') => Action::FocusNext,
        KeyCode::Up | KeyCode::Char('k') => Action::FocusPrev,
        KeyCode::Enter | KeyCode::Char('i') => {
            if key.code == KeyCode::Char('i') && focused == FormField::StatementKind {
                Action::None
            } else {
                Action::BeginEdit
            }
        }

        // Statement kind
        KeyCode::Left | KeyCode::Char('h') => Action::PrevStatementKind,
        KeyCode::Right | KeyCode::Char('l') => Action::NextStatementKind,
        KeyCode::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| StatementKind::from_index(d as usize - 1))
            .map_or(Action::None, Action::SelectStatementKind),

        // Output
        KeyCode::Char('y') => Action::CopySql,
        KeyCode::Char('e') => Action::ExportSql,
        KeyCode::Char('p') => Action::TogglePreview,
        KeyCode::Char('x') => Action::ExecuteSimulated,
        KeyCode::Char('R') => Action::ResetForm,

        _ => Action::None,
    }
}

fn handle_edit_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => {
            return Action::ClearField;
        }
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => {
            return Action::FocusPrev;
        }
        (KeyCode::BackTab, _) => {
            return Action::FocusPrev;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Esc => Action::EndEdit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::Enter => Action::NewLine,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right => Action::MoveCursor(CursorMove::Right),
        KeyCode::Up => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down => Action::MoveCursor(CursorMove::Down),
        KeyCode::Home => Action::MoveCursor(CursorMove::Home),
        KeyCode::End => Action::MoveCursor(CursorMove::End),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::Input(c),
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        _ => Action::None,
    }
}
