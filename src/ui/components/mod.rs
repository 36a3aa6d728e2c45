pub mod action_bar;
pub mod atoms;
pub mod column_chips;
pub mod footer;
pub mod form_panel;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod overlay;
pub mod preview;
pub mod status_message;
