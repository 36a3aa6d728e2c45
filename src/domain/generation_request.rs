use serde::Serialize;

use super::column::Column;
use super::row::Row;
use super::statement_kind::StatementKind;

/// Everything that determines one generated statement.
///
/// Rebuilt from the form text on every change; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub kind: StatementKind,
    pub table_name: String,
    pub columns: Vec<Column>,
    pub where_clause: String,
    /// `0` means no LIMIT clause.
    pub limit: u64,
    pub rows: Vec<Row>,
}

impl GenerationRequest {
    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// `<table>_<action>.sql`
    pub fn export_file_name(&self) -> String {
        format!("{}_{}.sql", self.table_name, self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(kind: StatementKind) -> GenerationRequest {
        GenerationRequest {
            kind,
            table_name: "users".to_string(),
            columns: vec![Column::new("id", "int"), Column::new("name", "text")],
            where_clause: String::new(),
            limit: 0,
            rows: vec![],
        }
    }

    #[test]
    fn export_file_name_uses_table_and_action() {
        let request = make_request(StatementKind::Update);

        assert_eq!(request.export_file_name(), "users_update.sql");
    }

    #[test]
    fn first_row_is_none_without_rows() {
        assert!(make_request(StatementKind::Insert).first_row().is_none());
    }
}
