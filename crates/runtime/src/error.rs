//! Unified error types surfaced by the runtime API.
use thiserror::Error;

use crate::session::SessionState;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session is {actual}, expected {expected}")]
    InvalidState {
        expected: SessionState,
        actual: SessionState,
    },

    #[error("encounter with {monster} is already over")]
    EncounterOver { monster: String },

    #[error("unknown hero class '{0}'")]
    UnknownHeroClass(String),

    #[error("hero level must be at least 1, got {0}")]
    InvalidLevel(u32),

    #[error("roster has no monsters to spawn")]
    NoMonsters,

    #[error("session requires a hero before building")]
    MissingHero,

    #[error("failed to build the stock roster")]
    Roster(#[from] game_core::RosterError),
}
