//! File logging for the binary.
//!
//! The terminal front-end owns the screen and the agent loop owns stdout, so
//! log records go to a file through `log4rs`. Without a file, nothing is
//! installed and the `log` macros in the engine are no-ops.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

/// Record layout: timestamp, level, target, message
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Build a config appending records at `level` or above to `path`
pub fn file_config(path: &Path, level: LevelFilter) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("invalid logging configuration")?;
    Ok(config)
}

/// Install the global file logger
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<Handle> {
    let config = file_config(path, level)?;
    log4rs::init_config(config).context("logger already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_creates_log_file() {
        let path = std::env::temp_dir().join(format!("tetris-env-log-{}.log", std::process::id()));
        let config = file_config(&path, LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_config_reports_unopenable_path() {
        // A directory cannot be opened as a log file.
        let dir = std::env::temp_dir();
        let err = file_config(&dir, LevelFilter::Info).unwrap_err();
        assert!(err.to_string().contains("log file"));
    }
}
