pub mod action;
pub mod effect;
pub mod effect_runner;
pub mod form_field;
pub mod form_state;
pub mod input_mode;
pub mod keybindings;
pub mod message_state;
pub mod output_state;
pub mod ports;
pub mod reducer;
mod reducers;
pub mod render_schedule;
pub mod sample_parser;
pub mod schema_parser;
pub mod settings;
pub mod sql_lexer;
pub mod state;
pub mod statement_builder;
pub mod text_field;
pub mod ui_state;
