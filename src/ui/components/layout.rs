use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::action_bar::ActionBar;
use super::footer::Footer;
use super::form_panel::FormPanel;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::preview::Preview;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
        let area = frame.area();
        let request = state.request();

        let [header_area, main_area, action_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, &request);

        let [form_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(main_area);

        FormPanel::render(frame, form_area, state, &request);
        Preview::render(
            frame,
            preview_area,
            state,
            &request.export_file_name(),
            now,
        );

        ActionBar::render(frame, action_area, state.form.kind);
        Footer::render(frame, footer_area, state);

        if state.ui.input_mode == InputMode::Help {
            HelpOverlay::render(frame);
        }
    }
}
