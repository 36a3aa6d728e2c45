use super::input_mode::InputMode;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub input_mode: InputMode,
    pub terminal_height: u16,
    pub terminal_width: u16,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Editing
    }
}
