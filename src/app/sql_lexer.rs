//! Line lexer for colouring the generated SQL preview.
//!
//! Only distinguishes what the preview paints differently. A string literal that is
//! still open at the end of the line runs to the end of the line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    /// Column type name such as `int` or `varchar`.
    Type,
    Function,
    Identifier,
    StringLiteral,
    Number,
    Placeholder,
    Operator,
    Punctuation,
    Comment,
    Whitespace,
}

/// Byte range into the lexed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "LIMIT", "OFFSET", "INSERT", "INTO", "VALUES", "UPDATE", "SET",
    "DELETE", "CREATE", "TABLE", "DROP", "ALTER", "AND", "OR", "NOT", "NULL", "IN", "IS", "LIKE",
    "BETWEEN", "ORDER", "BY", "GROUP", "HAVING", "JOIN", "ON", "AS", "PRIMARY", "KEY", "UNIQUE",
    "DEFAULT", "REFERENCES", "TRUE", "FALSE", "ASC", "DESC", "DISTINCT",
];

const SQL_TYPES: &[&str] = &[
    "int", "integer", "bigint", "smallint", "serial", "bigserial", "varchar", "char", "text",
    "timestamp", "timestamptz", "date", "time", "bool", "boolean", "numeric", "decimal", "uuid",
];

fn is_type(word: &str) -> bool {
    SQL_TYPES.iter().any(|t| t.eq_ignore_ascii_case(word))
}

fn is_keyword(word: &str) -> bool {
    SQL_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = if c.is_whitespace() {
            while chars.next_if(|(_, n)| n.is_whitespace()).is_some() {}
            TokenKind::Whitespace
        } else if c == '-' && chars.peek().is_some_and(|(_, n)| *n == '-') {
            while chars.next().is_some() {}
            TokenKind::Comment
        } else if c == '\'' {
            loop {
                match chars.next() {
                    // '' is an escaped quote inside the literal
                    Some((_, '\'')) => {
                        if chars.next_if(|(_, n)| *n == '\'').is_none() {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => break,
                }
            }
            TokenKind::StringLiteral
        } else if c.is_ascii_digit() {
            while chars
                .next_if(|(_, n)| n.is_ascii_digit() || *n == '.')
                .is_some()
            {}
            TokenKind::Number
        } else if is_word_char(c) {
            while chars.next_if(|(_, n)| is_word_char(*n)).is_some() {}
            let end = chars.peek().map_or(line.len(), |(i, _)| *i);
            let word = &line[start..end];
            if is_keyword(word) {
                TokenKind::Keyword
            } else if is_type(word) {
                TokenKind::Type
            } else if chars.peek().is_some_and(|(_, n)| *n == '(') {
                TokenKind::Function
            } else {
                TokenKind::Identifier
            }
        } else if c == '?' {
            TokenKind::Placeholder
        } else if matches!(c, '=' | '<' | '>' | '!' | '+' | '-' | '*' | '/' | '%') {
            while chars
                .next_if(|(_, n)| matches!(*n, '=' | '<' | '>'))
                .is_some()
            {}
            TokenKind::Operator
        } else {
            TokenKind::Punctuation
        };

        let end = chars.peek().map_or(line.len(), |(i, _)| *i);
        tokens.push(Token { kind, start, end });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(line: &str) -> Vec<(TokenKind, &str)> {
        tokenize_line(line)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text(line)))
            .collect()
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize_line("").is_empty());
    }

    #[test]
    fn tokens_cover_the_whole_line() {
        let line = "INSERT INTO users (id) VALUES ('a''b', now(), ?);";

        let rebuilt: String = tokenize_line(line).iter().map(|t| t.text(line)).collect();

        assert_eq!(rebuilt, line);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds_and_text("select a from t"),
            vec![
                (TokenKind::Keyword, "select"),
                (TokenKind::Identifier, "a"),
                (TokenKind::Keyword, "from"),
                (TokenKind::Identifier, "t"),
            ]
        );
    }

    #[test]
    fn doubled_quote_stays_inside_literal() {
        assert_eq!(
            kinds_and_text("name = 'O''Brien',"),
            vec![
                (TokenKind::Identifier, "name"),
                (TokenKind::Operator, "="),
                (TokenKind::StringLiteral, "'O''Brien'"),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn unterminated_literal_runs_to_end_of_line() {
        assert_eq!(
            kinds_and_text("x = 'open"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::StringLiteral, "'open"),
            ]
        );
    }

    #[test]
    fn function_call_and_type_arguments() {
        assert_eq!(
            kinds_and_text("email varchar(255) now()"),
            vec![
                (TokenKind::Identifier, "email"),
                (TokenKind::Type, "varchar"),
                (TokenKind::Punctuation, "("),
                (TokenKind::Number, "255"),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Function, "now"),
                (TokenKind::Punctuation, "("),
                (TokenKind::Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn bare_type_names_are_types() {
        assert_eq!(
            kinds_and_text("  id INT pk,"),
            vec![
                (TokenKind::Identifier, "id"),
                (TokenKind::Type, "INT"),
                (TokenKind::Identifier, "pk"),
                (TokenKind::Punctuation, ","),
            ]
        );
    }

    #[test]
    fn placeholders_and_compound_operators() {
        assert_eq!(
            kinds_and_text("id >= ?"),
            vec![
                (TokenKind::Identifier, "id"),
                (TokenKind::Operator, ">="),
                (TokenKind::Placeholder, "?"),
            ]
        );
    }

    #[test]
    fn line_comment_consumes_rest_of_line() {
        assert_eq!(
            kinds_and_text("-- choose an action"),
            vec![(TokenKind::Comment, "-- choose an action")]
        );
    }
}
