//! Bot configuration: how deep to search, with which evaluation and algorithm.

use derive_more::{Display, Error};
use pengwin_search::eval::UnknownStrategy;
use pengwin_search::search::UnknownAlgorithm;
use pengwin_search::{Algorithm, Evaluation};
use serde::{Deserialize, Serialize};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 10;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "invalid player config: {}", source)]
    Parse { source: serde_json::Error },
    #[display(fmt = "{}", source)]
    UnknownStrategy { source: UnknownStrategy },
    #[display(fmt = "{}", source)]
    UnknownAlgorithm { source: UnknownAlgorithm },
    #[display(fmt = "search depth must be at least 1")]
    ZeroDepth,
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        ConfigError::Parse { source }
    }
}

impl From<UnknownStrategy> for ConfigError {
    fn from(source: UnknownStrategy) -> Self {
        ConfigError::UnknownStrategy { source }
    }
}

impl From<UnknownAlgorithm> for ConfigError {
    fn from(source: UnknownAlgorithm) -> Self {
        ConfigError::UnknownAlgorithm { source }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Plies searched from the root, including the root move itself.
    pub depth: u8,
    pub strategy: Evaluation,
    pub algorithm: Algorithm,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            strategy: Evaluation::default(),
            algorithm: Algorithm::default(),
        }
    }
}

impl PlayerConfig {
    /// Build a config from strategy and algorithm names.
    pub fn new(depth: u8, strategy: &str, algorithm: &str) -> Result<Self, ConfigError> {
        Self {
            depth,
            strategy: strategy.parse()?,
            algorithm: algorithm.parse()?,
        }
        .validated()
    }

    /// Piece-count player.
    pub fn greedy(depth: u8) -> Self {
        Self {
            depth,
            strategy: Evaluation::Material,
            algorithm: Algorithm::AlphaBeta,
        }
    }

    /// Mobility and corner player.
    pub fn pengwin(depth: u8) -> Self {
        Self {
            depth,
            strategy: Evaluation::Composite,
            algorithm: Algorithm::AlphaBeta,
        }
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Reject configs the selector cannot run.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(self)
    }
}
