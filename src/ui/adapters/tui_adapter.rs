use std::time::Instant;

use color_eyre::eyre::Result;

use crate::app::ports::Renderer;
use crate::app::state::AppState;
use crate::ui::components::layout::MainLayout;
use crate::ui::tui::TuiRunner;

pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &AppState) -> Result<()> {
        let now = Instant::now();
        self.tui.terminal().draw(|frame| {
            MainLayout::render(frame, state, now);
        })?;
        Ok(())
    }
}
