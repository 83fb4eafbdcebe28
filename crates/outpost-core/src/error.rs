//! Errors raised while loading or validating a match configuration.

use thiserror::Error;

use crate::faction::FactionId;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed match config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Local faction {0} is not among the configured factions")]
    UnknownLocalFaction(FactionId),

    #[error("Faction {0} is declared more than once")]
    DuplicateFaction(FactionId),

    #[error("Control point {index} is owned by unknown {owner}")]
    UnknownOwner { index: usize, owner: FactionId },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
