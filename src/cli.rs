//! Command-line flags and the non-interactive `--print` output.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use serde_json::json;

use crate::app::settings::Settings;
use crate::app::statement_builder::build_statement;
use crate::domain::{GenerationRequest, StatementKind};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Table name
    #[arg(long)]
    pub table: Option<String>,

    /// Statement kind: create, select, insert, update or delete
    #[arg(long)]
    pub action: Option<StatementKind>,

    /// Column definitions, `name:type:attr` per line or comma-separated
    #[arg(long)]
    pub columns: Option<String>,

    /// Sample rows, one per line, cells separated by `|`
    #[arg(long)]
    pub values: Option<String>,

    /// WHERE clause for select/update/delete
    #[arg(long = "where")]
    pub where_clause: Option<String>,

    /// Row limit for select; 0 disables LIMIT
    #[arg(long)]
    pub limit: Option<u64>,

    /// Settings file (defaults to <config_dir>/sqlgen/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory exported .sql files are written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Print the generated SQL and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Args {
    /// Flags win over the settings file.
    pub fn apply(&self, settings: &mut Settings) {
        let form = &mut settings.form;
        if let Some(table) = &self.table {
            form.table_name.clone_from(table);
        }
        if let Some(kind) = self.action {
            form.kind = kind;
        }
        if let Some(columns) = &self.columns {
            form.columns.clone_from(columns);
        }
        if let Some(values) = &self.values {
            form.sample_values.clone_from(values);
        }
        if let Some(where_clause) = &self.where_clause {
            form.where_clause.clone_from(where_clause);
        }
        if let Some(limit) = self.limit {
            form.limit = limit;
        }
        if let Some(dir) = &self.export_dir {
            settings.export_dir.clone_from(dir);
        }
    }
}

pub fn render_print(request: &GenerationRequest, format: OutputFormat) -> Result<String> {
    let sql = build_statement(request);
    match format {
        OutputFormat::Text => Ok(sql),
        OutputFormat::Json => {
            let value = json!({
                "request": request,
                "sql": sql,
                "file_name": request.export_file_name(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
