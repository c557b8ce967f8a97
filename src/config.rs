//! Runtime configuration read from `TUI_2048_*` environment variables.

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::types::GameMode;

pub const ENV_MODE: &str = "TUI_2048_MODE";
pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG: &str = "TUI_2048_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Win target of the first game.
    pub mode: GameMode,
    /// Fixed seed for a reproducible game; entropy when unset.
    pub seed: Option<u64>,
    /// Log level; logging stays off when unset.
    pub log_level: Option<LevelFilter>,
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Blank values count as unset. Values that are present but malformed are
    /// errors rather than silently falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mode = match get(ENV_MODE) {
            Some(raw) => raw
                .parse::<GameMode>()
                .with_context(|| format!("{ENV_MODE}={raw}"))?,
            None => GameMode::default(),
        };

        let seed = get(ENV_SEED)
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("{ENV_SEED}={raw} is not a u64"))
            })
            .transpose()?;

        let log_level = get(ENV_LOG)
            .map(|raw| {
                raw.parse::<LevelFilter>()
                    .with_context(|| format!("{ENV_LOG}={raw} is not a log level"))
            })
            .transpose()?;

        Ok(Self {
            mode,
            seed,
            log_level,
        })
    }
}
