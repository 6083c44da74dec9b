//! Log setup.
//!
//! The terminal is owned by the game view, so logs only go to a file, and only
//! when one is configured.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::config::GameConfig;

/// Install a file-backed `tracing` subscriber if `config.log_path` is set.
///
/// Returns whether logging was enabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("cannot create log file {}", path))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {}", e))?;

    Ok(true)
}
