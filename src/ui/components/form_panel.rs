use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::column_chips::ColumnChips;
use crate::app::form_field::FormField;
use crate::app::state::AppState;
use crate::app::text_field::TextField;
use crate::domain::GenerationRequest;
use crate::ui::components::atoms::{field_block, panel_block};
use crate::ui::theme::Theme;

pub struct FormPanel;

impl FormPanel {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, request: &GenerationRequest) {
        let block = panel_block(" Schema ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [
            table_area,
            columns_area,
            chips_area,
            values_area,
            controls_area,
            where_area,
        ] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        let [kind_area, limit_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(controls_area);

        Self::render_text_field(frame, table_area, state, FormField::TableName, "Enter table name");
        Self::render_text_field(frame, columns_area, state, FormField::Columns, "id:int:pk");
        frame.render_widget(Paragraph::new(ColumnChips::line(&request.columns)), chips_area);
        Self::render_text_field(frame, values_area, state, FormField::SampleValues, "1|John");
        Self::render_kind_field(frame, kind_area, state);
        Self::render_text_field(frame, limit_area, state, FormField::Limit, "0 = no limit");
        Self::render_text_field(
            frame,
            where_area,
            state,
            FormField::WhereClause,
            "id = 1 OR status = 'active'",
        );
    }

    fn render_text_field(
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        field: FormField,
        placeholder: &str,
    ) {
        let Some(text) = state.form.field(field) else {
            return;
        };
        let focused = state.form.focused == field;
        let editing = focused && state.ui.is_editing();

        let block = field_block(field.label(), focused, editing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if text.as_str().is_empty() && !editing {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(Theme::TEXT_SECONDARY),
                )),
                inner,
            );
            return;
        }

        let (scroll, cursor) = viewport(text, inner);
        let lines: Vec<Line> = text.as_str().split('\n').map(Line::raw).collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(Theme::TEXT_PRIMARY))
                .scroll(scroll),
            inner,
        );

        if editing && let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    fn render_kind_field(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.form.focused == FormField::StatementKind;
        let block = field_block(FormField::StatementKind.label(), focused, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let arrow_style = if focused {
            Style::default().fg(Theme::TEXT_ACCENT)
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY)
        };
        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(
                state.form.kind.label(),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", arrow_style),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}

/// Scroll offset `(rows, cols)` keeping the cursor inside `inner`, plus the
/// cursor's screen position when it fits.
fn viewport(text: &TextField, inner: Rect) -> ((u16, u16), Option<(u16, u16)>) {
    if inner.width == 0 || inner.height == 0 {
        return ((0, 0), None);
    }

    let (line_idx, col) = text.cursor_position();
    let line = text.as_str().split('\n').nth(line_idx).unwrap_or("");
    let before_cursor: String = line.chars().take(col).collect();
    let cursor_x = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let cursor_y = u16::try_from(line_idx).unwrap_or(u16::MAX);

    let scroll_y = cursor_y.saturating_sub(inner.height - 1);
    let scroll_x = cursor_x.saturating_sub(inner.width - 1);

    let position = (
        inner.x.saturating_add(cursor_x - scroll_x),
        inner.y.saturating_add(cursor_y - scroll_y),
    );
    ((scroll_y, scroll_x), Some(position))
}
