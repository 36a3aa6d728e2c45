use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::domain::Column;
use crate::ui::components::atoms::type_chip;
use crate::ui::theme::Theme;

const MAX_CHIPS: usize = 4;

pub struct ColumnChips;

impl ColumnChips {
    /// First four columns as chips, then `+N more`.
    pub fn line(columns: &[Column]) -> Line<'static> {
        if columns.is_empty() {
            return Line::from(Span::styled(
                "no columns",
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }

        let mut spans = Vec::new();
        for (i, column) in columns.iter().take(MAX_CHIPS).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(type_chip(column));
        }
        if columns.len() > MAX_CHIPS {
            spans.push(Span::styled(
                format!(" +{} more", columns.len() - MAX_CHIPS),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }
        Line::from(spans)
    }
}
