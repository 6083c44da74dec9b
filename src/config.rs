//! Startup configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_WIDTH` | 12 | Field columns (4 to 200) |
//! | `BLOCKFALL_HEIGHT` | 20 | Field rows (4 to 200) |
//! | `BLOCKFALL_DROP_MS` | 1000 | Gravity interval |
//! | `BLOCKFALL_SEED` | wall clock | Shape sequence seed |
//! | `BLOCKFALL_LOG_PATH` | unset | Write logs to this file |
//! | `BLOCKFALL_LOG_LEVEL` | info | `error`, `warn`, `info`, `debug` or `trace` |
//!
//! Missing, unparsable or out-of-range values fall back to the default.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::Level;

use crate::types::{
    DEFAULT_DROP_INTERVAL_MS, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, MAX_FIELD_DIM,
    MIN_FIELD_DIM,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u32,
    pub seed: u32,
    pub log_path: Option<String>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            seed: clock_seed(),
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dim = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|v| (MIN_FIELD_DIM..=MAX_FIELD_DIM).contains(v))
                .unwrap_or(default)
        };

        let drop_interval_ms = lookup("BLOCKFALL_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_DROP_INTERVAL_MS);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            width: dim("BLOCKFALL_WIDTH", DEFAULT_FIELD_WIDTH),
            height: dim("BLOCKFALL_HEIGHT", DEFAULT_FIELD_HEIGHT),
            drop_interval_ms,
            seed,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
