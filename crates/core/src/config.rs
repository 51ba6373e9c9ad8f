//! Game configuration, read from the environment.
//!
//! - `TWENTY48_SEED`: fixed seed for reproducible games (default: entropy)
//! - `TWENTY48_NOOP_CHECK`: `legacy` or `symmetric` (default: `legacy`)
//! - `TWENTY48_LOG_FILE`: log destination for the terminal binary
//!
//! Unparseable values fall back to the defaults.

use std::path::PathBuf;

use crate::rng::{RandTileRng, SimpleRng, TileRng};

/// Which moves are screened by a no-op probe before being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoopCheck {
    /// Only Right/Down are probed (Right and Down both unchanged => skip).
    /// Up/Left always go straight to the move.
    #[default]
    Legacy,
    /// Every direction is probed on its own before moving.
    Symmetric,
}

impl NoopCheck {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Some(NoopCheck::Legacy),
            "symmetric" => Some(NoopCheck::Symmetric),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u32>,
    pub noop_check: NoopCheck,
    pub log_file: Option<PathBuf>,
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TWENTY48_SEED").and_then(|s| s.trim().parse().ok());

        let noop_check = lookup("TWENTY48_NOOP_CHECK")
            .and_then(|s| NoopCheck::from_str(&s))
            .unwrap_or_default();

        let log_file = lookup("TWENTY48_LOG_FILE")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            noop_check,
            log_file,
        }
    }

    /// Seeded LCG when a seed is configured, entropy-seeded `rand` otherwise.
    pub fn tile_rng(&self) -> Box<dyn TileRng> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(RandTileRng::from_entropy()),
        }
    }
}
