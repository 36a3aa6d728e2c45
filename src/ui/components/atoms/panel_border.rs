use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::Theme;

/// Creates a panel block with focus-aware border styling.
pub fn panel_block<'a>(title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(Theme::FOCUS_BORDER)
    } else {
        Style::default().fg(Theme::UNFOCUS_BORDER)
    };

    Block::default()
        .title(title.into())
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Form input box: editing wins over focus.
pub fn field_block(label: &str, focused: bool, editing: bool) -> Block<'static> {
    let (border_style, title) = if editing {
        (
            Style::default().fg(Theme::EDIT_BORDER),
            format!(" {} (editing) ", label),
        )
    } else if focused {
        (Style::default().fg(Theme::FOCUS_BORDER), format!(" {} ", label))
    } else {
        (Style::default().fg(Theme::UNFOCUS_BORDER), format!(" {} ", label))
    };

    let title_style = if focused || editing {
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::TEXT_SECONDARY)
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}
