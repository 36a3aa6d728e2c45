pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;
pub mod ui;
