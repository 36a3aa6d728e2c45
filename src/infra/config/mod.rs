pub mod paths;
pub mod settings_file;
