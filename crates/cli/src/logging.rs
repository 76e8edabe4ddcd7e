//! Tracing setup.
//!
//! The interactive demo owns the terminal, so its logs go to a file.
//! Snapshot mode prints to stdout and logs to stderr.

use std::{
    env,
    fs::{OpenOptions, create_dir_all},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use dirs_next::data_dir;
use tracing_subscriber::EnvFilter;

use crate::config::expand_tilde;

pub const LOG_PATH_ENV: &str = "STEPLINE_LOG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

/// Log file location: `STEPLINE_LOG_PATH`, else `<data_dir>/stepline/stepline.log`.
pub fn log_file_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stepline")
        .join("stepline.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            let path = log_file_path();
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
