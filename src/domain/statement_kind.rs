use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    #[default]
    Create,
    Select,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}' (expected one of: create, select, insert, update, delete)")]
pub struct UnknownStatementKind(pub String);

impl StatementKind {
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Select,
        Self::Insert,
        Self::Update,
        Self::Delete,
    ];

    /// Lowercase wire name, also used in export file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE TABLE",
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementKind {
    type Err = UnknownStatementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| UnknownStatementKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("create", StatementKind::Create)]
    #[case("SELECT", StatementKind::Select)]
    #[case(" insert ", StatementKind::Insert)]
    #[case("Update", StatementKind::Update)]
    #[case("delete", StatementKind::Delete)]
    fn from_str_accepts_known_kinds(#[case] input: &str, #[case] expected: StatementKind) {
        assert_eq!(input.parse::<StatementKind>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("drop")]
    #[case("upsert")]
    fn from_str_rejects_unknown_kinds(#[case] input: &str) {
        assert_eq!(
            input.parse::<StatementKind>(),
            Err(UnknownStatementKind(input.to_string()))
        );
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(StatementKind::Delete.next(), StatementKind::Create);
        assert_eq!(StatementKind::Create.next(), StatementKind::Select);
    }

    #[test]
    fn prev_wraps_around() {
        assert_eq!(StatementKind::Create.prev(), StatementKind::Delete);
        assert_eq!(StatementKind::Update.prev(), StatementKind::Insert);
    }

    #[test]
    fn display_matches_wire_name() {
        for kind in StatementKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            action: StatementKind,
        }

        let parsed: Wrapper = toml::from_str("action = \"update\"").unwrap();

        assert_eq!(parsed.action, StatementKind::Update);
    }
}
