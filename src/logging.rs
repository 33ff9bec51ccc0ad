//! Tracing setup
//!
//! The alternate screen owns the terminal while the form runs, so log output
//! always goes to a file: `--log-file` when given, otherwise
//! `signup-tui.log` in the platform's local data directory. Without either,
//! events are filtered but not written anywhere.

use crate::cli::Cli;
use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "signup_tui=info";

/// Initialize the global subscriber
pub fn init(cli: &Cli) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let file_layer = match log_target(cli.log_file.as_deref(), AppConfig::log_path()) {
        Some(path) => {
            let file = open_log_file(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

/// Where log output goes; never the terminal
pub fn log_target(explicit: Option<&Path>, default: Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or(default)
}

/// Open `path` for appending, creating missing parent directories
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
