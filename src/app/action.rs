use std::path::PathBuf;

use crate::app::text_field::CursorMove;
use crate::domain::StatementKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Form navigation
    FocusNext,
    FocusPrev,
    BeginEdit,
    EndEdit,

    // Text editing (focused field)
    Input(char),
    Paste(String),
    NewLine,
    Backspace,
    Delete,
    MoveCursor(CursorMove),
    ClearField,

    // Statement kind
    SelectStatementKind(StatementKind),
    NextStatementKind,
    PrevStatementKind,

    // Output
    TogglePreview,
    CopySql,
    CopySucceeded,
    CopyFailed(String),
    ExportSql,
    ExportSucceeded(PathBuf),
    ExportFailed(String),
    ExecuteSimulated,
    ResetForm,

    // Overlays
    OpenHelp,
    CloseHelp,
}

impl Action {
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
