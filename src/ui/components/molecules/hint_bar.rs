use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::keybindings::KeyBinding;
use crate::ui::components::atoms::{key_chip, key_text};
use crate::ui::theme::Theme;

/// Footer hint line: `key desc  key desc  ...`
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(key_text(key));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
    }

    Line::from(spans)
}

const CHIP_COLUMN_WIDTH: usize = 28;

/// Help overlay row: `  [key]   description`, descriptions aligned.
pub fn chip_hint_line(binding: &KeyBinding) -> Line<'static> {
    let padding_len = CHIP_COLUMN_WIDTH.saturating_sub(binding.key.width() + 2);

    Line::from(vec![
        Span::raw("  "),
        key_chip(binding.key),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(
            binding.description.to_string(),
            Style::default().fg(Theme::TEXT_PRIMARY),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keybindings::NORMAL_KEYS;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn hint_line_separates_pairs() {
        let line = hint_line(&[("y", "Copy"), ("q", "Quit")]);

        assert_eq!(text(&line), "y Copy  q Quit");
    }

    #[test]
    fn chip_hint_line_aligns_descriptions() {
        let short = chip_hint_line(&NORMAL_KEYS[4]);
        let long = chip_hint_line(&NORMAL_KEYS[0]);

        let short_text = text(&short);
        let long_text = text(&long);
        let short_col = short_text.find(NORMAL_KEYS[4].description).unwrap();
        let long_col = long_text.find(NORMAL_KEYS[0].description).unwrap();
        assert_eq!(
            short_text[..short_col].width(),
            long_text[..long_col].width()
        );
    }
}
