use ratatui::style::Style;
use ratatui::text::Span;

use crate::domain::Column;
use crate::ui::theme::Theme;

/// ` name: type ` tinted by the column's type category.
pub fn type_chip(column: &Column) -> Span<'static> {
    let color = Theme::type_color(column.type_category());
    Span::styled(
        format!(" {}: {} ", column.name, column.data_type),
        Style::default().fg(color).bg(Theme::KEY_CHIP_BG),
    )
}
