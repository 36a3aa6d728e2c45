use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::{Message, MessageKind};
use crate::ui::theme::Theme;

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &Message) -> Line<'static> {
        let (prefix, color) = match message.kind {
            MessageKind::Error => ("✗ ", Theme::ERROR),
            MessageKind::Success => ("✓ ", Theme::SUCCESS),
            MessageKind::Info => ("• ", Theme::INFO),
        };

        Line::from(vec![Span::styled(
            format!("{}{}", prefix, message.text),
            Style::default().fg(color),
        )])
    }
}
