pub mod clipboard;
pub mod renderer;
pub mod settings_store;
pub mod sql_exporter;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use renderer::Renderer;
pub use settings_store::{SettingsError, SettingsStore};
pub use sql_exporter::{ExportError, SqlExporter};
