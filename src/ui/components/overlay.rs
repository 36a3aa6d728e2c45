use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear};

use crate::ui::theme::Theme;

/// Creates a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Clears a centered area and draws a titled modal frame; returns the inner area.
pub fn render_modal(
    frame: &mut Frame,
    width: Constraint,
    height: Constraint,
    title: &str,
    hint: &str,
) -> Rect {
    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::styled(
            format!(" {} ", hint),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::FOCUS_BORDER))
        .style(Style::default().bg(Theme::MODAL_BG));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);

        let rect = centered_rect(area, Constraint::Length(50), Constraint::Length(20));

        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn centered_rect_clamps_to_parent() {
        let area = Rect::new(0, 0, 30, 10);

        let rect = centered_rect(area, Constraint::Length(50), Constraint::Length(20));

        assert!(rect.width <= 30);
        assert!(rect.height <= 10);
    }
}
