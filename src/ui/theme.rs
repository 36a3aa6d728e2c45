use ratatui::style::Color;

use crate::domain::TypeCategory;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const CATPPUCCIN_MOCHA: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);

    pub const CYAN: Color = Color::Rgb(0x22, 0xd3, 0xee);
    pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
    pub const EMERALD: Color = Color::Rgb(0x10, 0xb9, 0x81);
    pub const AMBER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
    pub const VIOLET: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
    pub const PURPLE: Color = Color::Rgb(0xc0, 0x84, 0xfc);
    pub const YELLOW: Color = Color::Rgb(0xfd, 0xe0, 0x47);
    pub const GRAY_300: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
    pub const GRAY_500: Color = Color::Rgb(0x6b, 0x72, 0x80);
    pub const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;

    // Borders
    pub const FOCUS_BORDER: Color = Palette::CYAN;
    pub const EDIT_BORDER: Color = Palette::AMBER;
    pub const UNFOCUS_BORDER: Color = Palette::GRAY_700;

    // Text
    pub const TEXT_PRIMARY: Color = Palette::GRAY_300;
    pub const TEXT_SECONDARY: Color = Palette::GRAY_500;
    pub const TEXT_ACCENT: Color = Palette::CYAN;
    pub const TITLE: Color = Palette::BLUE;

    // Key chips (help overlay)
    pub const KEY_CHIP_BG: Color = Palette::GRAY_700;
    pub const KEY_CHIP_FG: Color = Palette::CYAN;

    // Action bar
    pub const ACTION_SELECTED_BG: Color = Palette::BLUE;
    pub const ACTION_SELECTED_FG: Color = Color::White;

    // Status
    pub const SUCCESS: Color = Palette::EMERALD;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Palette::CYAN;

    // SQL preview
    pub const LINE_NUMBER: Color = Palette::GRAY_500;
    pub const SQL_KEYWORD: Color = Palette::CYAN;
    pub const SQL_TYPE: Color = Palette::EMERALD;
    pub const SQL_FUNCTION: Color = Palette::BLUE;
    pub const SQL_STRING: Color = Palette::YELLOW;
    pub const SQL_NUMBER: Color = Palette::PURPLE;
    pub const SQL_PLACEHOLDER: Color = Palette::AMBER;
    pub const SQL_PUNCTUATION: Color = Palette::GRAY_500;
    pub const SQL_COMMENT: Color = Palette::GRAY_500;
    pub const SQL_TEXT: Color = Palette::GRAY_300;

    pub const fn type_color(category: TypeCategory) -> Color {
        match category {
            TypeCategory::Integer => Palette::BLUE,
            TypeCategory::Text => Palette::EMERALD,
            TypeCategory::Temporal => Palette::AMBER,
            TypeCategory::Boolean => Palette::VIOLET,
            TypeCategory::Other => Palette::GRAY_500,
        }
    }
}
