//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "^C", "j/k")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+C", "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Copy")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod normal {
        pub const FIELD_NAV: usize = 0;
        pub const EDIT: usize = 1;
        pub const ACTION_CYCLE: usize = 2;
        pub const ACTION_DIRECT: usize = 3;
        pub const COPY: usize = 4;
        pub const EXPORT: usize = 5;
        pub const PREVIEW: usize = 6;
        pub const EXECUTE: usize = 7;
        pub const RESET: usize = 8;
        pub const HELP: usize = 9;
        pub const QUIT: usize = 10;
    }

    pub mod edit {
        pub const DONE: usize = 0;
        pub const NEXT: usize = 1;
        pub const NEWLINE: usize = 2;
        pub const MOVE: usize = 3;
        pub const CLEAR: usize = 4;
    }

    pub mod help {
        pub const CLOSE: usize = 0;
        pub const QUIT: usize = 1;
    }
}

// =============================================================================
// Normal mode
// =============================================================================

pub const NORMAL_KEYS: &[KeyBinding] = &[
    // idx 0: FIELD_NAV
    KeyBinding {
        key_short: "Tab/j/k",
        key: "Tab / j / ↓, ⇧Tab / k / ↑",
        desc_short: "Field",
        description: "Next / previous field",
        action: Action::FocusNext,
    },
    // idx 1: EDIT
    KeyBinding {
        key_short: "Enter",
        key: "Enter / i",
        desc_short: "Edit",
        description: "Edit focused field (cycles action on the action field)",
        action: Action::BeginEdit,
    },
    // idx 2: ACTION_CYCLE
    KeyBinding {
        key_short: "h/l",
        key: "h / ←, l / →",
        desc_short: "Action",
        description: "Previous / next statement kind",
        action: Action::NextStatementKind,
    },
    // idx 3: ACTION_DIRECT
    KeyBinding {
        key_short: "1-5",
        key: "1 - 5",
        desc_short: "Pick",
        description: "CREATE / SELECT / INSERT / UPDATE / DELETE",
        action: Action::None,
    },
    // idx 4: COPY
    KeyBinding {
        key_short: "y",
        key: "y",
        desc_short: "Copy",
        description: "Copy SQL to clipboard",
        action: Action::CopySql,
    },
    // idx 5: EXPORT
    KeyBinding {
        key_short: "e",
        key: "e",
        desc_short: "Export",
        description: "Export SQL to <table>_<action>.sql",
        action: Action::ExportSql,
    },
    // idx 6: PREVIEW
    KeyBinding {
        key_short: "p",
        key: "p",
        desc_short: "Preview",
        description: "Show / hide SQL preview",
        action: Action::TogglePreview,
    },
    // idx 7: EXECUTE
    KeyBinding {
        key_short: "x",
        key: "x",
        desc_short: "Execute",
        description: "Execute (simulated, nothing is run)",
        action: Action::ExecuteSimulated,
    },
    // idx 8: RESET
    KeyBinding {
        key_short: "R",
        key: "R",
        desc_short: "Reset",
        description: "Reset table, columns, values and action",
        action: Action::ResetForm,
    },
    // idx 9: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::OpenHelp,
    },
    // idx 10: QUIT
    KeyBinding {
        key_short: "q",
        key: "q / Ctrl+C",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];

// =============================================================================
// Edit mode
// =============================================================================

pub const EDIT_KEYS: &[KeyBinding] = &[
    // idx 0: DONE
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Done",
        description: "Stop editing",
        action: Action::EndEdit,
    },
    // idx 1: NEXT
    KeyBinding {
        key_short: "Tab",
        key: "Tab",
        desc_short: "Next",
        description: "Stop editing and move to next field",
        action: Action::FocusNext,
    },
    // idx 2: NEWLINE
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Newline",
        description: "New line (multi-line fields) / stop editing",
        action: Action::NewLine,
    },
    // idx 3: MOVE
    KeyBinding {
        key_short: "←↑↓→",
        key: "Arrows / Home / End",
        desc_short: "Move",
        description: "Move cursor",
        action: Action::None,
    },
    // idx 4: CLEAR
    KeyBinding {
        key_short: "^U",
        key: "Ctrl+U",
        desc_short: "Clear",
        description: "Clear field",
        action: Action::ClearField,
    },
];

// =============================================================================
// Help overlay
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: CLOSE
    KeyBinding {
        key_short: "Esc/?",
        key: "Esc / ?",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    // idx 1: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];

pub const TIPS: &[&str] = &[
    "Use name:type:attr per line (or comma-separated) for columns",
    "Sample values are pipe | separated, one row per line",
    "Single quotes in sample values are escaped automatically",
    "now() and null are inserted unquoted",
    "Execute is simulated; no database is touched",
];
