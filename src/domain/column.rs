use serde::Serialize;

pub const DEFAULT_COLUMN_NAME: &str = "col";
pub const DEFAULT_COLUMN_TYPE: &str = "varchar(255)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub attributes: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attribute tail as it appears in a column definition (`"pk unique"`).
    pub fn attributes_display(&self) -> String {
        self.attributes.join(" ")
    }

    pub fn type_category(&self) -> TypeCategory {
        TypeCategory::classify(&self.data_type)
    }
}

/// Coarse type family used only for presentation (chip colours).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Integer,
    Text,
    Temporal,
    Boolean,
    Other,
}

impl TypeCategory {
    pub fn classify(data_type: &str) -> Self {
        let lower = data_type.to_ascii_lowercase();
        if lower.contains("int") || lower.contains("serial") {
            Self::Integer
        } else if lower.contains("varchar") || lower.contains("text") {
            Self::Text
        } else if lower.contains("timestamp") || lower.contains("date") {
            Self::Temporal
        } else if lower.contains("bool") {
            Self::Boolean
        } else {
            Self::Other
        }
    }
}
