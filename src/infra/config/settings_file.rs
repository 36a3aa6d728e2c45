//! On-disk settings format (`config.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::app::settings::{FormDefaults, Settings};
use crate::domain::{StatementKind, UnknownStatementKind};

pub const CURRENT_VERSION: u32 = 1;

fn current_version() -> u32 {
    CURRENT_VERSION
}

/// Every key is optional; absent keys keep the built-in defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub form: FormSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSection {
    pub table_name: Option<String>,
    pub columns: Option<String>,
    pub sample_values: Option<String>,
    pub where_clause: Option<String>,
    pub limit: Option<u64>,
    pub action: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    pub dir: Option<PathBuf>,
}

impl SettingsFile {
    pub fn into_settings(self) -> Result<Settings, UnknownStatementKind> {
        let mut settings = Settings::default();
        let form = self.form;
        let defaults: &mut FormDefaults = &mut settings.form;

        if let Some(table_name) = form.table_name {
            defaults.table_name = table_name;
        }
        if let Some(columns) = form.columns {
            defaults.columns = columns;
        }
        if let Some(sample_values) = form.sample_values {
            defaults.sample_values = sample_values;
        }
        if let Some(where_clause) = form.where_clause {
            defaults.where_clause = where_clause;
        }
        if let Some(limit) = form.limit {
            defaults.limit = limit;
        }
        if let Some(action) = form.action {
            defaults.kind = action.parse::<StatementKind>()?;
        }
        if let Some(dir) = self.export.dir {
            settings.export_dir = dir;
        }

        Ok(settings)
    }
}
