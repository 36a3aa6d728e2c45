pub mod column;
pub mod generation_request;
pub mod row;
pub mod statement_kind;

pub use column::{Column, DEFAULT_COLUMN_NAME, DEFAULT_COLUMN_TYPE, TypeCategory};
pub use generation_request::GenerationRequest;
pub use row::Row;
pub use statement_kind::{StatementKind, UnknownStatementKind};
