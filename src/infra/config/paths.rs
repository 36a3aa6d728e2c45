use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

pub const APP_DIR_NAME: &str = "sqlgen";
const SETTINGS_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "sqlgen.log";

/// `<config_dir>/sqlgen/config.toml`; the file itself may not exist.
pub fn default_settings_path() -> Result<PathBuf> {
    let config_base = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    Ok(config_base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// `<cache_dir>/sqlgen/sqlgen.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().ok_or_else(|| eyre!("Could not find cache directory"))?;
    let log_dir = cache_base.join(APP_DIR_NAME);

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir.join(LOG_FILE_NAME))
}
