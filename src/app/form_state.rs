//! Editable form backing the generator: one text buffer per input plus the
//! selected statement kind.

use crate::app::form_field::FormField;
use crate::app::sample_parser::parse_rows;
use crate::app::schema_parser::parse_columns;
use crate::app::settings::FormDefaults;
use crate::app::text_field::TextField;
use crate::domain::{GenerationRequest, StatementKind};

#[derive(Debug, Clone)]
pub struct FormState {
    pub table_name: TextField,
    pub columns: TextField,
    pub sample_values: TextField,
    pub where_clause: TextField,
    pub limit: TextField,
    pub kind: StatementKind,
    pub focused: FormField,
}

impl FormState {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            table_name: TextField::single_line(defaults.table_name.as_str()),
            columns: TextField::multi_line(defaults.columns.as_str()),
            sample_values: TextField::multi_line(defaults.sample_values.as_str()),
            where_clause: TextField::single_line(defaults.where_clause.as_str()),
            limit: TextField::single_line(defaults.limit.to_string()),
            kind: defaults.kind,
            focused: FormField::default(),
        }
    }

    /// Restores table, columns and kind; sample values shrink to the first
    /// default row. WHERE and limit are kept.
    pub fn reset(&mut self, defaults: &FormDefaults) {
        self.table_name.set(&defaults.table_name);
        self.columns.set(&defaults.columns);
        self.sample_values
            .set(defaults.sample_values.lines().next().unwrap_or_default());
        self.kind = defaults.kind;
    }

    pub fn field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::TableName => Some(&self.table_name),
            FormField::Columns => Some(&self.columns),
            FormField::SampleValues => Some(&self.sample_values),
            FormField::Limit => Some(&self.limit),
            FormField::WhereClause => Some(&self.where_clause),
            FormField::StatementKind => None,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::TableName => Some(&mut self.table_name),
            FormField::Columns => Some(&mut self.columns),
            FormField::SampleValues => Some(&mut self.sample_values),
            FormField::Limit => Some(&mut self.limit),
            FormField::WhereClause => Some(&mut self.where_clause),
            FormField::StatementKind => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        self.field_mut(self.focused)
    }

    /// Inserts into the focused field; the limit field only takes digits.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.focused == FormField::Limit && !c.is_ascii_digit() {
            return false;
        }
        match self.focused_field_mut() {
            Some(field) => {
                field.insert_char(c);
                true
            }
            None => false,
        }
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        let text = if self.focused == FormField::Limit {
            text.chars().filter(char::is_ascii_digit).collect()
        } else {
            text.to_string()
        };
        if text.is_empty() {
            return false;
        }
        match self.focused_field_mut() {
            Some(field) => {
                field.insert_str(&text);
                true
            }
            None => false,
        }
    }

    /// Non-numeric or overflowing input counts as no limit.
    pub fn limit_value(&self) -> u64 {
        self.limit.as_str().trim().parse().unwrap_or(0)
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            kind: self.kind,
            table_name: self.table_name.as_str().to_string(),
            columns: parse_columns(self.columns.as_str()),
            where_clause: self.where_clause.as_str().to_string(),
            limit: self.limit_value(),
            rows: parse_rows(self.sample_values.as_str()),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}
