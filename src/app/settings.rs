//! Resolved startup settings: form defaults and export location.

use std::path::PathBuf;

use crate::domain::StatementKind;

pub const DEFAULT_TABLE_NAME: &str = "users";
pub const DEFAULT_COLUMNS: &str =
    "id:int:pk\nname:varchar(255)\nemail:varchar(255):unique\ncreated_at:timestamp";
pub const DEFAULT_SAMPLE_VALUES: &str =
    "1|John Doe|john@example.com|now()\n2|Jane|jane@example.com|now()";
pub const DEFAULT_WHERE_CLAUSE: &str = "id = 1";
pub const DEFAULT_LIMIT: u64 = 100;

/// Initial form contents; also what `Reset` restores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub table_name: String,
    pub columns: String,
    pub sample_values: String,
    pub where_clause: String,
    pub limit: u64,
    pub kind: StatementKind,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            columns: DEFAULT_COLUMNS.to_string(),
            sample_values: DEFAULT_SAMPLE_VALUES.to_string(),
            where_clause: DEFAULT_WHERE_CLAUSE.to_string(),
            limit: DEFAULT_LIMIT,
            kind: StatementKind::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub form: FormDefaults,
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            form: FormDefaults::default(),
            export_dir: PathBuf::from("."),
        }
    }
}
