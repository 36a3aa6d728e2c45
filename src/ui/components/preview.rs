use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::sql_lexer::{TokenKind, tokenize_line};
use crate::app::state::AppState;
use crate::ui::components::atoms::panel_block;
use crate::ui::theme::Theme;

pub struct Preview;

impl Preview {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, file_name: &str, now: Instant) {
        let copied = state.output.is_copied_at(now);
        let mut title = vec![Span::styled(
            format!(" Generated SQL · {} ", file_name),
            Style::default().fg(Theme::TEXT_PRIMARY),
        )];
        if copied {
            title.push(Span::styled(
                "Copied! ",
                Style::default()
                    .fg(Theme::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let block = panel_block(Line::from(title), copied);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !state.output.preview_visible {
            let lines = vec![
                Line::from(""),
                Line::styled("Preview hidden", Style::default().fg(Theme::TEXT_SECONDARY)),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Theme::TEXT_SECONDARY)),
                    Span::styled(
                        "p",
                        Style::default()
                            .fg(Theme::TEXT_ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to show SQL", Style::default().fg(Theme::TEXT_SECONDARY)),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            return;
        }

        frame.render_widget(Paragraph::new(Self::highlighted_lines(&state.output.sql)), inner);
    }

    /// Line-numbered, token-coloured SQL.
    pub fn highlighted_lines(sql: &str) -> Vec<Line<'static>> {
        let total = sql.lines().count().max(1);
        let gutter = total.to_string().len();

        sql.lines()
            .enumerate()
            .map(|(i, line)| {
                let mut spans = vec![Span::styled(
                    format!("{:>width$} ", i + 1, width = gutter),
                    Style::default().fg(Theme::LINE_NUMBER),
                )];
                spans.extend(tokenize_line(line).into_iter().map(|token| {
                    Span::styled(token.text(line).to_string(), token_style(token.kind))
                }));
                Line::from(spans)
            })
            .collect()
    }
}

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(Theme::SQL_KEYWORD)
            .add_modifier(Modifier::BOLD),
        TokenKind::Type => Style::default().fg(Theme::SQL_TYPE),
        TokenKind::Function => Style::default().fg(Theme::SQL_FUNCTION),
        TokenKind::StringLiteral => Style::default().fg(Theme::SQL_STRING),
        TokenKind::Number => Style::default().fg(Theme::SQL_NUMBER),
        TokenKind::Placeholder => Style::default()
            .fg(Theme::SQL_PLACEHOLDER)
            .add_modifier(Modifier::BOLD),
        TokenKind::Operator | TokenKind::Punctuation => {
            Style::default().fg(Theme::SQL_PUNCTUATION)
        }
        TokenKind::Comment => Style::default()
            .fg(Theme::SQL_COMMENT)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Identifier | TokenKind::Whitespace => Style::default().fg(Theme::SQL_TEXT),
    }
}
