#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    TableName,
    Columns,
    SampleValues,
    StatementKind,
    Limit,
    WhereClause,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::TableName,
        FormField::Columns,
        FormField::SampleValues,
        FormField::StatementKind,
        FormField::Limit,
        FormField::WhereClause,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::TableName => "Table Name",
            FormField::Columns => "Columns (name:type:attrs)",
            FormField::SampleValues => "Sample Values (| separated)",
            FormField::StatementKind => "Action Type",
            FormField::Limit => "Limit",
            FormField::WhereClause => "WHERE Clause",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Columns | FormField::SampleValues)
    }

    /// The action selector is cycled, never typed into.
    pub fn is_text(self) -> bool {
        self != FormField::StatementKind
    }
}
