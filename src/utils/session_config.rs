//! Console session configuration.
//!
//! Settings are read from environment variables so the driver can be
//! scripted without flags:
//!
//! - `CHESS_ENGINE_START_FEN`: starting position (default: standard start).
//! - `CHESS_ENGINE_LOG`: tracing filter directive (default: `warn`).
//! - `CHESS_ENGINE_SEED`: seed for the `random` command (default: entropy).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;

pub const START_FEN_VAR: &str = "CHESS_ENGINE_START_FEN";
pub const LOG_FILTER_VAR: &str = "CHESS_ENGINE_LOG";
pub const SEED_VAR: &str = "CHESS_ENGINE_SEED";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_fen: String,
    pub log_filter: String,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let defaults = SessionConfig::default();
        SessionConfig {
            start_fen: read(START_FEN_VAR).unwrap_or(defaults.start_fen),
            log_filter: read(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
            seed: read(SEED_VAR).and_then(|value| value.parse().ok()),
        }
    }

    /// Position the session starts from.
    pub fn initial_state(&self) -> Result<GameState, ChessErrors> {
        GameState::from_fen(&self.start_fen)
    }
}
