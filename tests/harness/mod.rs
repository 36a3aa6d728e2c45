pub mod fixtures;

use std::ops::RangeInclusive;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use sqlgen::app::state::AppState;
use sqlgen::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

pub fn create_test_state() -> AppState {
    AppState::default()
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_and_get_buffer(
    terminal: &mut Terminal<TestBackend>,
    state: &AppState,
    now: Instant,
) -> Buffer {
    terminal
        .draw(|frame| MainLayout::render(frame, state, now))
        .unwrap();

    terminal.backend().buffer().clone()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState, now: Instant) -> String {
    buffer_to_string(&render_and_get_buffer(terminal, state, now))
}

/// Selected screen rows, trailing blanks trimmed, for inline snapshots.
pub fn render_rows_to_string(
    terminal: &mut Terminal<TestBackend>,
    state: &AppState,
    now: Instant,
    rows: RangeInclusive<u16>,
) -> String {
    let buffer = render_and_get_buffer(terminal, state, now);
    rows.map(|y| {
        let line: String = (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol())
            .collect();
        line.trim_end().to_string()
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
