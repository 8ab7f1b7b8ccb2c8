//! Log output setup.
//!
//! The game draws on stdout, so events only go somewhere when a log file is
//! configured. Plain text, no ANSI colours.

use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Parse a log filter such as `info` or `blockdrop_engine=debug,warn`.
pub fn parse_filter(spec: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(spec).with_context(|| format!("invalid log filter {spec:?}"))
}

/// Install the global subscriber. Returns false when no log file is configured.
pub fn init(settings: &Settings) -> Result<bool> {
    let Some(path) = &settings.log_file else {
        return Ok(false);
    };

    let filter = parse_filter(&settings.log_level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;
    Ok(true)
}
