//! Column text (`name:type:attr...`, one per line or comma-separated) to `Column`s.
//!
//! Total over all inputs: malformed segments fall back to defaults instead of failing.

use crate::domain::{Column, DEFAULT_COLUMN_NAME, DEFAULT_COLUMN_TYPE};

pub fn parse_columns(text: &str) -> Vec<Column> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Column {
    let mut parts = segment.split(':').map(str::trim);

    let name = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_COLUMN_NAME);
    let data_type = parts
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_COLUMN_TYPE);
    let attributes = parts.map(str::to_string).collect();

    Column::new(name, data_type).with_attributes(attributes)
}
