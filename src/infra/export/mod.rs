mod sql_file;

pub use sql_file::FsSqlExporter;
