//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! Clipboard and file writes leave as [`Effect`]s and come back as actions.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{reduce_form, reduce_output, reduce_overlay};
use crate::app::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_overlay(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_form(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_output(state, &action, now) {
        return effects;
    }

    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(w, h) => {
            state.ui.terminal_width = w;
            state.ui.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_at(now);
            state.clear_dirty();
            vec![Effect::Render]
        }

        // Handled by sub-reducers
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::app::form_field::FormField;
    use crate::app::input_mode::InputMode;
    use crate::app::message_state::MessageKind;
    use crate::app::text_field::CursorMove;
    use crate::domain::StatementKind;

    fn create_test_state() -> AppState {
        AppState::default()
    }

    fn focus(state: &mut AppState, field: FormField) {
        state.form.focused = field;
    }

    mod pure_actions {
        use super::*;
        use rstest::rstest;

        #[test]
        fn quit_sets_should_quit_and_returns_no_effects() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::Quit, Instant::now());

            assert!(state.should_quit);
            assert!(effects.is_empty());
        }

        #[test]
        fn render_returns_render_effect_and_clears_dirty() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::Render, Instant::now());

            assert_eq!(effects, vec![Effect::Render]);
            assert!(!state.is_dirty());
        }

        #[test]
        fn resize_records_terminal_size() {
            let mut state = create_test_state();

            reduce(&mut state, Action::Resize(120, 40), Instant::now());

            assert_eq!(state.ui.terminal_width, 120);
            assert_eq!(state.ui.terminal_height, 40);
        }

        #[rstest]
        #[case(Action::FocusNext)]
        #[case(Action::TogglePreview)]
        #[case(Action::NextStatementKind)]
        fn state_changing_actions_mark_dirty(#[case] action: Action) {
            let mut state = create_test_state();
            state.clear_dirty();

            reduce(&mut state, action, Instant::now());

            assert!(state.is_dirty());
        }

        #[test]
        fn none_does_not_mark_dirty() {
            let mut state = create_test_state();
            state.clear_dirty();

            reduce(&mut state, Action::None, Instant::now());

            assert!(!state.is_dirty());
        }
    }

    mod focus_and_editing {
        use super::*;

        #[test]
        fn focus_next_leaves_edit_mode() {
            let mut state = create_test_state();
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::FocusNext, Instant::now());

            assert_eq!(state.form.focused, FormField::Columns);
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn begin_edit_on_text_field_enters_edit_mode() {
            let mut state = create_test_state();

            reduce(&mut state, Action::BeginEdit, Instant::now());

            assert_eq!(state.ui.input_mode, InputMode::Editing);
        }

        #[test]
        fn begin_edit_on_action_field_cycles_kind() {
            let mut state = create_test_state();
            focus(&mut state, FormField::StatementKind);

            reduce(&mut state, Action::BeginEdit, Instant::now());

            assert_eq!(state.form.kind, StatementKind::Select);
            assert_eq!(state.ui.input_mode, InputMode::Normal);
            assert!(state.output.sql.starts_with("SELECT"));
        }

        #[test]
        fn typing_regenerates_sql() {
            let mut state = create_test_state();
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::Input('2'), Instant::now());

            assert_eq!(state.form.table_name.as_str(), "users2");
            assert!(state.output.sql.starts_with("CREATE TABLE users2 ("));
        }

        #[test]
        fn typing_outside_edit_mode_is_ignored() {
            let mut state = create_test_state();

            reduce(&mut state, Action::Input('x'), Instant::now());

            assert_eq!(state.form.table_name.as_str(), "users");
        }

        #[test]
        fn newline_in_single_line_field_ends_editing() {
            let mut state = create_test_state();
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::NewLine, Instant::now());

            assert_eq!(state.ui.input_mode, InputMode::Normal);
            assert_eq!(state.form.table_name.as_str(), "users");
        }

        #[test]
        fn newline_in_columns_adds_a_line() {
            let mut state = create_test_state();
            focus(&mut state, FormField::Columns);
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::NewLine, Instant::now());
            for c in "active:bool".chars() {
                reduce(&mut state, Action::Input(c), Instant::now());
            }

            assert!(state.output.sql.contains("  active bool\n);"));
        }

        #[test]
        fn clear_field_empties_columns() {
            let mut state = create_test_state();
            focus(&mut state, FormField::Columns);
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::ClearField, Instant::now());

            assert_eq!(state.output.sql, "CREATE TABLE users (\n\n);");
        }

        #[test]
        fn backspace_after_cursor_move_edits_middle() {
            let mut state = create_test_state();
            state.ui.input_mode = InputMode::Editing;

            reduce(&mut state, Action::MoveCursor(CursorMove::Left), Instant::now());
            reduce(&mut state, Action::Backspace, Instant::now());

            assert_eq!(state.form.table_name.as_str(), "uses");
        }

        #[test]
        fn paste_into_where_clause_flattens_lines() {
            let mut state = create_test_state();
            focus(&mut state, FormField::WhereClause);
            state.form.where_clause.clear();
            state.form.kind = StatementKind::Delete;
            state.ui.input_mode = InputMode::Editing;

            reduce(
                &mut state,
                Action::Paste("id = 1\nOR id = 2".to_string()),
                Instant::now(),
            );

            assert_eq!(state.output.sql, "DELETE FROM users WHERE id = 1 OR id = 2;");
        }
    }

    mod statement_kind {
        use super::*;
        use rstest::rstest;

        #[rstest]
        #[case(StatementKind::Select, "SELECT ")]
        #[case(StatementKind::Insert, "INSERT INTO ")]
        #[case(StatementKind::Update, "UPDATE ")]
        #[case(StatementKind::Delete, "DELETE FROM ")]
        fn select_kind_regenerates(#[case] kind: StatementKind, #[case] prefix: &str) {
            let mut state = create_test_state();

            reduce(&mut state, Action::SelectStatementKind(kind), Instant::now());

            assert!(state.output.sql.starts_with(prefix));
        }

        #[test]
        fn prev_from_create_wraps_to_delete() {
            let mut state = create_test_state();

            reduce(&mut state, Action::PrevStatementKind, Instant::now());

            assert_eq!(state.form.kind, StatementKind::Delete);
        }
    }

    mod output {
        use super::*;

        #[test]
        fn copy_emits_clipboard_effect_with_current_sql() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::CopySql, Instant::now());

            assert_eq!(
                effects,
                vec![Effect::CopyToClipboard {
                    content: state.output.sql.clone()
                }]
            );
        }

        #[test]
        fn copy_succeeded_starts_flash() {
            let mut state = create_test_state();
            let now = Instant::now();

            reduce(&mut state, Action::CopySucceeded, now);

            assert!(state.output.is_copied_at(now));
            assert!(!state.output.is_copied_at(now + Duration::from_millis(1200)));
        }

        #[test]
        fn copy_failed_is_silent() {
            let mut state = create_test_state();

            reduce(
                &mut state,
                Action::CopyFailed("no display".to_string()),
                Instant::now(),
            );

            assert!(state.messages.current.is_none());
            assert!(state.output.copied_until.is_none());
        }

        #[test]
        fn export_emits_named_file_effect() {
            let mut state = create_test_state();
            state.form.kind = StatementKind::Insert;
            state.regenerate();

            let effects = reduce(&mut state, Action::ExportSql, Instant::now());

            assert_eq!(
                effects,
                vec![Effect::ExportSql {
                    file_name: "users_insert.sql".to_string(),
                    content: state.output.sql.clone(),
                }]
            );
        }

        #[test]
        fn export_failed_shows_error() {
            let mut state = create_test_state();

            reduce(
                &mut state,
                Action::ExportFailed("permission denied".to_string()),
                Instant::now(),
            );

            let message = state.messages.current.clone().unwrap();
            assert_eq!(message.kind, MessageKind::Error);
            assert!(message.text.contains("permission denied"));
        }

        #[test]
        fn export_succeeded_shows_path() {
            let mut state = create_test_state();

            reduce(
                &mut state,
                Action::ExportSucceeded(PathBuf::from("/tmp/users_create.sql")),
                Instant::now(),
            );

            let message = state.messages.current.clone().unwrap();
            assert_eq!(message.kind, MessageKind::Success);
            assert!(message.text.contains("/tmp/users_create.sql"));
        }

        #[test]
        fn execute_is_simulated_and_emits_no_effects() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::ExecuteSimulated, Instant::now());

            assert!(effects.is_empty());
            let message = state.messages.current.clone().unwrap();
            assert!(message.text.contains("simulated"));
        }

        #[test]
        fn toggle_preview_flips_visibility() {
            let mut state = create_test_state();

            reduce(&mut state, Action::TogglePreview, Instant::now());
            assert!(!state.output.preview_visible);

            reduce(&mut state, Action::TogglePreview, Instant::now());
            assert!(state.output.preview_visible);
        }

        #[test]
        fn reset_restores_defaults_and_regenerates() {
            let mut state = create_test_state();
            state.form.table_name.set("orders");
            state.form.kind = StatementKind::Delete;
            state.form.where_clause.set("x = 1");
            state.regenerate();

            reduce(&mut state, Action::ResetForm, Instant::now());

            assert_eq!(state.form.kind, StatementKind::Create);
            assert!(state.output.sql.starts_with("CREATE TABLE users ("));
            assert_eq!(state.form.where_clause.as_str(), "x = 1");
            assert_eq!(state.request().rows.len(), 1);
        }

        #[test]
        fn render_clears_expired_message_and_flash() {
            let mut state = create_test_state();
            let now = Instant::now();
            reduce(&mut state, Action::CopySucceeded, now);
            reduce(&mut state, Action::ExportFailed("x".to_string()), now);

            reduce(&mut state, Action::Render, now + Duration::from_secs(5));

            assert!(state.output.copied_until.is_none());
            assert!(state.messages.current.is_none());
        }
    }

    mod help {
        use super::*;

        #[test]
        fn open_help_toggles() {
            let mut state = create_test_state();

            reduce(&mut state, Action::OpenHelp, Instant::now());
            assert_eq!(state.ui.input_mode, InputMode::Help);

            reduce(&mut state, Action::OpenHelp, Instant::now());
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn close_help_returns_to_normal() {
            let mut state = create_test_state();
            state.ui.input_mode = InputMode::Help;

            reduce(&mut state, Action::CloseHelp, Instant::now());

            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }
    }
}
