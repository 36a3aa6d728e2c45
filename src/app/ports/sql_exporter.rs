use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export file name {name:?}: must be a plain file name")]
    InvalidFileName { name: String },
    #[error("Cannot create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes generated SQL to a named file and returns where it landed.
#[cfg_attr(test, mockall::automock)]
pub trait SqlExporter: Send + Sync {
    fn export(&self, file_name: &str, content: &str) -> Result<PathBuf, ExportError>;
}
