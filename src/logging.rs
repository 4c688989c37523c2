//! File logging for the CLI.
//!
//! The terminal belongs to the menu, so log output only goes to the file
//! named by `--log-file`; without one no subscriber is installed.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, e.g. `pickmenu=trace`
pub const LOG_ENV: &str = "PICKMENU_LOG";

pub fn init(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {LOG_ENV} filter '{directives}'"))?,
        Err(_) => EnvFilter::new(default_directive(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "pickmenu=warn",
        1 => "pickmenu=info",
        2 => "pickmenu=debug",
        _ => "pickmenu=trace",
    }
}
