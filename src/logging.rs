use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ConfigError;

/// Open (append) the log file, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.display().to_string(),
            source,
        })
}

pub fn parse_filter(filter: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(filter).map_err(|e| ConfigError::LogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber. Without `--log-file` nothing is installed
/// and tracing macros are no-ops; stdout belongs to the terminal UI.
pub fn init(config: &Config) -> Result<(), ConfigError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let filter = parse_filter(&config.log_level)?;
    let file = open_log_file(path)?;

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
