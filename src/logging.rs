//! File logging. The terminal belongs to the TUI, so nothing is written there.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "SQLGEN_LOG";

/// Like [`init`], but when `required` is false a missing cache directory or an
/// unopenable log file only means running without a log.
pub fn init_from(log_path: Result<PathBuf>, required: bool) -> Result<()> {
    match log_path.and_then(|path| init(&path)) {
        Ok(()) => Ok(()),
        Err(e) if required => Err(e),
        Err(_) => Ok(()),
    }
}

pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err_with(|| format!("Cannot open log file {}", log_path.display()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;
    use tempfile::TempDir;

    #[test]
    fn missing_cache_dir_is_fatal_only_when_required() {
        assert!(init_from(Err(eyre!("Could not find cache directory")), true).is_err());
        assert!(init_from(Err(eyre!("Could not find cache directory")), false).is_ok());
    }

    #[test]
    fn unopenable_log_file_is_skipped_when_optional() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("missing").join("sqlgen.log");

        assert!(init_from(Ok(log_path.clone()), false).is_ok());
        assert!(init_from(Ok(log_path), true).is_err());
    }
}
