use std::path::PathBuf;

use thiserror::Error;

use crate::app::settings::Settings;
use crate::domain::UnknownStatementKind;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unsupported settings version {found} in {path} (expected {expected})")]
    Version {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
    #[error(transparent)]
    Action(#[from] UnknownStatementKind),
}

#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// A missing file yields the defaults.
    fn load(&self) -> Result<Settings, SettingsError>;
}
