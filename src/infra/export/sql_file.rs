use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::app::ports::{ExportError, SqlExporter};

/// Writes exports into one directory, creating it on demand.
pub struct FsSqlExporter {
    dir: PathBuf,
}

impl FsSqlExporter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl SqlExporter for FsSqlExporter {
    fn export(&self, file_name: &str, content: &str) -> Result<PathBuf, ExportError> {
        if !is_plain_file_name(file_name) {
            return Err(ExportError::InvalidFileName {
                name: file_name.to_string(),
            });
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;
        }

        let path = self.dir.join(file_name);
        fs::write(&path, content).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Exactly one normal component: no separators, no `..`, no root or prefix.
fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !file_name.contains(['/', '\\'])
}
