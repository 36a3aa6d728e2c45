//! Pipe-delimited sample values to `Row`s. Blank lines are not special-cased.

use crate::domain::Row;

pub fn parse_rows(text: &str) -> Vec<Row> {
    text.split('\n')
        .map(|line| Row::new(line.split('|').map(|c| c.trim().to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_cells() {
        let rows = parse_rows("1|John Doe|john@example.com|now()\n2|Jane|jane@example.com|now()");

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            Row::from(vec!["1", "John Doe", "john@example.com", "now()"])
        );
        assert_eq!(rows[1].get(1), Some("Jane"));
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = parse_rows("  1 |  O'Brien  ");

        assert_eq!(rows[0], Row::from(vec!["1", "O'Brien"]));
    }

    #[test]
    fn empty_input_yields_one_row_with_empty_cell() {
        let rows = parse_rows("");

        assert_eq!(rows, vec![Row::from(vec![""])]);
    }

    #[test]
    fn blank_line_yields_row_with_empty_cell() {
        let rows = parse_rows("1|a\n\n2|b");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], Row::from(vec![""]));
    }

    #[test]
    fn empty_cells_are_preserved() {
        let rows = parse_rows("1||x|");

        assert_eq!(rows[0], Row::from(vec!["1", "", "x", ""]));
    }
}
