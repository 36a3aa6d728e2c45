//! Builds one SQL statement string from a `GenerationRequest`.
//!
//! Plain string templating: no dialect handling, no identifier quoting, and the
//! only literal escaping is single-quote doubling.

use crate::domain::{Column, GenerationRequest, Row, StatementKind};

const PLACEHOLDER: &str = "?";
const DEFAULT_WHERE: &str = "id = ?";
/// Column skipped by UPDATE's SET list.
const ID_COLUMN: &str = "id";

pub fn build_statement(request: &GenerationRequest) -> String {
    match request.kind {
        StatementKind::Create => build_create(&request.table_name, &request.columns),
        StatementKind::Select => build_select(
            &request.table_name,
            &request.columns,
            &request.where_clause,
            request.limit,
        ),
        StatementKind::Insert => {
            build_insert(&request.table_name, &request.columns, request.first_row())
        }
        StatementKind::Update => build_update(
            &request.table_name,
            &request.columns,
            request.first_row(),
            &request.where_clause,
        ),
        StatementKind::Delete => build_delete(&request.table_name, &request.where_clause),
    }
}

pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// INSERT value: `now()` and `null` (any case) pass through unquoted.
pub fn insert_value_expr(value: &str) -> String {
    if value.eq_ignore_ascii_case("now()") || value.eq_ignore_ascii_case("null") {
        value.to_string()
    } else {
        quote_literal(value)
    }
}

fn column_list(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn where_or_default(where_clause: &str) -> &str {
    if where_clause.is_empty() {
        DEFAULT_WHERE
    } else {
        where_clause
    }
}

fn build_create(table: &str, columns: &[Column]) -> String {
    let lines = columns
        .iter()
        .map(|c| {
            let attrs = c.attributes_display();
            if attrs.is_empty() {
                format!("  {} {}", c.name, c.data_type)
            } else {
                format!("  {} {} {}", c.name, c.data_type, attrs)
            }
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("CREATE TABLE {table} (\n{lines}\n);")
}

fn build_select(table: &str, columns: &[Column], where_clause: &str, limit: u64) -> String {
    let mut sql = format!("SELECT {} FROM {}", column_list(columns), table);
    if !where_clause.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(where_clause);
    }
    if limit != 0 {
        sql.push_str(&format!("\nLIMIT {limit}"));
    }
    sql.push(';');
    sql
}

fn build_insert(table: &str, columns: &[Column], row: Option<&Row>) -> String {
    let values = (0..columns.len())
        .map(|i| match row.and_then(|r| r.get(i)) {
            Some(cell) => insert_value_expr(cell),
            None => PLACEHOLDER.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        column_list(columns),
        values
    )
}

fn build_update(table: &str, columns: &[Column], row: Option<&Row>, where_clause: &str) -> String {
    // Cells are looked up by the column's position in the full schema, so the
    // skipped id column still consumes its cell.
    let assignments = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name != ID_COLUMN)
        .map(|(i, c)| {
            let value = row
                .and_then(|r| r.get(i))
                .filter(|cell| !cell.is_empty())
                .map_or_else(|| PLACEHOLDER.to_string(), quote_literal);
            format!("{} = {}", c.name, value)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {};",
        table,
        assignments,
        where_or_default(where_clause)
    )
}

fn build_delete(table: &str, where_clause: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {};",
        table,
        where_or_default(where_clause)
    )
}
