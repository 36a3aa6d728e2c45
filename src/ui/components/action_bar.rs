use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::StatementKind;
use crate::ui::theme::Theme;

pub struct ActionBar;

impl ActionBar {
    pub fn render(frame: &mut Frame, area: Rect, selected: StatementKind) {
        frame.render_widget(Paragraph::new(Self::line(selected)), area);
    }

    /// `1 CREATE  2 SELECT ...` with the selected kind highlighted.
    pub fn line(selected: StatementKind) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for kind in StatementKind::ALL {
            let label = format!(" {} {} ", kind.index() + 1, kind.as_str().to_uppercase());
            let style = if kind == selected {
                Style::default()
                    .bg(Theme::ACTION_SELECTED_BG)
                    .fg(Theme::ACTION_SELECTED_FG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT_SECONDARY)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}
