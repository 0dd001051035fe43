//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so `tracing` output is written to a log
//! file (default: `~/.local/share/stepper-tui/stepper-tui.log`). `RUST_LOG`
//! overrides the configured filter.

use crate::config::LoggingConfig;
use crate::error::{Result, StepperError};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config.log_file.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stepper-tui")
            .join("stepper-tui.log")
    })
}

/// Install the global subscriber. Returns the log path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_path(config);
    let open_err = |source: std::io::Error| StepperError::LogFile {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(open_err)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init();

    Ok(Some(path))
}
