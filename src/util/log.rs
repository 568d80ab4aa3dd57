// src/util/log.rs

//! File-based logging. The terminal belongs to the UI, so nothing is written to stdout/stderr.
use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use tracing::Level;

use crate::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "angle-dial.log";

/// `DEBUG=true` in the environment turns on debug output regardless of config.
pub fn debug_enabled(config: &LoggingConfig) -> bool {
    config.debug || std::env::var("DEBUG").unwrap_or_default() == "true"
}

/// Creates/truncates the log file (start fresh each run).
pub fn open_log_file(log_dir: &Path) -> std::io::Result<(PathBuf, File)> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Installs the global tracing subscriber writing to `<dir>/angle-dial.log`.
pub fn init_logging(config: &LoggingConfig) -> color_eyre::Result<PathBuf> {
    let (path, file) = open_log_file(&config.dir)?;
    let level = if debug_enabled(config) { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {}", e))?;

    tracing::info!("Logging to {} at {}", path.display(), level);
    Ok(path)
}
