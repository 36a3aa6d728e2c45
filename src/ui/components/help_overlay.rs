use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::molecules::chip_hint_line;
use super::overlay::render_modal;
use crate::app::keybindings::{EDIT_KEYS, HELP_KEYS, KeyBinding, NORMAL_KEYS, TIPS};
use crate::ui::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let inner = render_modal(
            frame,
            Constraint::Percentage(70),
            Constraint::Percentage(85),
            "Help",
            "Esc / ? to close",
        );

        let paragraph = Paragraph::new(Self::lines()).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    pub fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        Self::push_section(&mut lines, "Form", NORMAL_KEYS);
        Self::push_section(&mut lines, "Editing", EDIT_KEYS);
        Self::push_section(&mut lines, "Help", HELP_KEYS);

        lines.push(Self::section_header("Tips"));
        lines.extend(TIPS.iter().map(|tip| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(Theme::TEXT_ACCENT)),
                Span::styled(tip.to_string(), Style::default().fg(Theme::TEXT_PRIMARY)),
            ])
        }));
        lines
    }

    fn push_section(lines: &mut Vec<Line<'static>>, title: &str, bindings: &[KeyBinding]) {
        lines.push(Self::section_header(title));
        lines.extend(bindings.iter().map(chip_hint_line));
        lines.push(Line::from(""));
    }

    fn section_header(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("── {} ──", title),
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
    }
}
