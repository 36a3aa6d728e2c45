//! Output sub-reducer: copy, export, preview visibility, reset and simulated execute.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

pub fn reduce_output(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::TogglePreview => {
            state.output.preview_visible = !state.output.preview_visible;
            Some(vec![])
        }

        Action::CopySql => Some(vec![Effect::CopyToClipboard {
            content: state.output.sql.clone(),
        }]),
        Action::CopySucceeded => {
            state.output.mark_copied_at(now);
            Some(vec![])
        }
        // Logged by the effect runner; the UI stays quiet.
        Action::CopyFailed(_) => Some(vec![]),

        Action::ExportSql => {
            let file_name = state.request().export_file_name();
            Some(vec![Effect::ExportSql {
                file_name,
                content: state.output.sql.clone(),
            }])
        }
        Action::ExportSucceeded(path) => {
            state.set_success_at(format!("Exported to {}", path.display()), now);
            Some(vec![])
        }
        Action::ExportFailed(msg) => {
            state.set_error_at(format!("Export failed: {}", msg), now);
            Some(vec![])
        }

        Action::ExecuteSimulated => {
            let label = state.form.kind.label();
            state
                .messages
                .set_info_at(format!("{} executed (simulated, nothing was run)", label), now);
            Some(vec![])
        }

        Action::ResetForm => {
            let defaults = state.defaults.clone();
            state.form.reset(&defaults);
            state.ui.input_mode = InputMode::Normal;
            state.regenerate();
            Some(vec![])
        }

        _ => None,
    }
}
