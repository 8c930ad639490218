//! Configuration - grid size, seed, and log destination
//!
//! Values come from environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_SIZE` | 4 | Grid side length |
//! | `TUI_2048_SEED` | clock-derived | Seed for the built-in RNG |
//! | `TUI_2048_LOG_PATH` | unset | File that receives log output |

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {size} is outside {min}..={max}")]
    SizeOutOfRange { size: u8, min: u8, max: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: u8,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let size = env::var("TUI_2048_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_GRID_SIZE);

        let seed = env::var("TUI_2048_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = env::var("TUI_2048_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            size,
            seed,
            log_path,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                size: self.size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}

/// Seed derived from the wall clock (sub-second nanos mixed with seconds)
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
