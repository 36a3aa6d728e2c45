use std::fs;
use std::path::PathBuf;

use crate::app::ports::{SettingsError, SettingsStore};
use crate::app::settings::Settings;
use crate::infra::config::settings_file::{CURRENT_VERSION, SettingsFile};

pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: SettingsFile = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if file.version != CURRENT_VERSION {
            return Err(SettingsError::Version {
                path: self.path.clone(),
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        let settings = file.into_settings()?;
        tracing::info!(path = %self.path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementKind;
    use tempfile::TempDir;

    fn store_with(content: Option<&str>) -> (TempDir, TomlSettingsStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        (temp_dir, TomlSettingsStore::new(path))
    }

    #[test]
    fn missing_file_returns_defaults() {
        let (_dir, store) = store_with(None);

        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn full_file_is_applied() {
        let (_dir, store) = store_with(Some(
            r#"
version = 1

[form]
table_name = "products"
columns = "sku:varchar(32):pk\nprice:numeric"
sample_values = "A1|9.99"
where_clause = ""
limit = 0
action = "insert"

[export]
dir = "out"
"#,
        ));

        let settings = store.load().unwrap();

        assert_eq!(settings.form.table_name, "products");
        assert_eq!(settings.form.columns, "sku:varchar(32):pk\nprice:numeric");
        assert_eq!(settings.form.sample_values, "A1|9.99");
        assert_eq!(settings.form.where_clause, "");
        assert_eq!(settings.form.limit, 0);
        assert_eq!(settings.form.kind, StatementKind::Insert);
        assert_eq!(settings.export_dir, PathBuf::from("out"));
    }

    #[test]
    fn version_mismatch_is_an_error() {
        let (_dir, store) = store_with(Some("version = 2"));

        let err = store.load().unwrap_err();

        assert!(matches!(
            err,
            SettingsError::Version {
                found: 2,
                expected: 1,
                ..
            }
        ));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let (_dir, store) = store_with(Some("[form\ntable_name = "));

        assert!(matches!(store.load(), Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn unknown_action_is_an_error() {
        let (_dir, store) = store_with(Some("[form]\naction = \"upsert\""));

        let err = store.load().unwrap_err();

        assert!(matches!(err, SettingsError::Action(_)));
        assert!(err.to_string().contains("upsert"));
    }
}
