use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::GenerationRequest;
use crate::ui::theme::{Palette, Theme};

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, request: &GenerationRequest) {
        let lines = vec![Self::title_line(), Self::stats_line(request)];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn title_line() -> Line<'static> {
        Line::from(vec![
            Span::styled(
                " SQL Generator",
                Style::default()
                    .fg(Theme::TITLE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  schema text in, statements out",
                Style::default().fg(Theme::TEXT_SECONDARY),
            ),
        ])
    }

    /// Columns, action, table and sample row count.
    pub fn stats_line(request: &GenerationRequest) -> Line<'static> {
        let stats = [
            ("Columns", request.columns.len().to_string(), Palette::CYAN),
            ("Action", request.kind.as_str().to_string(), Palette::BLUE),
            ("Table", request.table_name.clone(), Palette::PURPLE),
            ("Rows", request.rows.len().to_string(), Palette::EMERALD),
        ];

        let mut spans = vec![Span::raw(" ")];
        for (i, (label, value, color)) in stats.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Theme::UNFOCUS_BORDER)));
            }
            spans.push(Span::styled(
                format!("{} ", label),
                Style::default().fg(color),
            ));
            spans.push(Span::styled(
                value,
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}
