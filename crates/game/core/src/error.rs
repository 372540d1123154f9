//! Common error infrastructure for game-core.
//!
//! Every error in the crate is a `thiserror` enum that also implements
//! [`GameError`], so callers can branch on severity without matching on each
//! concrete type.
//!
//! Combat itself never fails for alive, valid participants: stochastic outcomes
//! are not errors, and a caller passing an attack range the attacker does not
//! have is reported as an outcome (see [`crate::combat::AttackOutcome`]), not a
//! `Result`. What remains here is load-time validation and misuse of the
//! progression API.

use crate::archetype::ArchetypeCategory;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed archetype data, duplicate roster entries
    Validation,

    /// Internal error - a caller broke an API contract.
    ///
    /// Examples: awarding a victory to a monster
    Internal,

    /// Fatal error - state is corrupted and cannot continue.
    Fatal,
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics and tests. Default implementation uses the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Malformed archetype data, rejected before any combatant is created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArchetypeError {
    #[error("archetype name must not be empty")]
    EmptyName,

    #[error("archetype '{name}': {field} must not be negative (got {value})")]
    NegativeStat {
        name: String,
        field: &'static str,
        value: i32,
    },

    #[error("archetype '{name}': base_hp must be positive")]
    ZeroHitPoints { name: String },

    #[error("archetype '{name}': crit_chance must be within 0..=100 (got {value})")]
    CritChanceOutOfBounds { name: String, value: i32 },

    #[error("archetype '{name}': at least one of melee or ranged attacks must be available")]
    NoAvailableRange { name: String },
}

impl GameError for ArchetypeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "ARCHETYPE_EMPTY_NAME",
            Self::NegativeStat { .. } => "ARCHETYPE_NEGATIVE_STAT",
            Self::ZeroHitPoints { .. } => "ARCHETYPE_ZERO_HP",
            Self::CritChanceOutOfBounds { .. } => "ARCHETYPE_CRIT_OUT_OF_BOUNDS",
            Self::NoAvailableRange { .. } => "ARCHETYPE_NO_RANGE",
        }
    }
}

/// Roster assembly failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Archetype(#[from] ArchetypeError),

    #[error("duplicate {category} archetype '{name}'")]
    DuplicateName {
        category: ArchetypeCategory,
        name: String,
    },

    #[error("roster has no {0} archetypes")]
    Empty(ArchetypeCategory),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Archetype(inner) => inner.error_code(),
            Self::DuplicateName { .. } => "ROSTER_DUPLICATE_NAME",
            Self::Empty(_) => "ROSTER_EMPTY",
        }
    }
}

/// Misuse of the leveling engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("'{0}' is not a hero and cannot gain experience")]
    NotAHero(String),

    #[error("'{0}' is not a monster and carries no experience reward")]
    NotAMonster(String),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAHero(_) => "PROGRESSION_NOT_A_HERO",
            Self::NotAMonster(_) => "PROGRESSION_NOT_A_MONSTER",
        }
    }
}
