//! Turn-based combat rules for a hero-versus-monster role-playing game.
//!
//! `game-core` defines the canonical rules and exposes pure APIs:
//!
//! - [`archetype`] / [`roster`]: immutable hero-class and monster-type templates
//! - [`combatant`]: live participants with stats derived from archetype and level
//! - [`combat`]: round planning and attack resolution
//! - [`progression`]: hero experience and level-ups
//!
//! Nothing here performs I/O. Randomness comes in through [`CombatRng`] and
//! everything observable goes out as [`CombatEvent`]s.
pub mod archetype;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod error;
pub mod event;
pub mod progression;
pub mod range;
pub mod rng;
pub mod roster;

pub use archetype::{Archetype, ArchetypeCategory, ArchetypeSpec};
pub use combat::{AttackOutcome, AttackResult, RoundPlan, on_victory, plan_round, resolve_attack};
pub use combatant::{Bounty, Combatant, DerivedStats, Progression, Role};
pub use config::CombatConfig;
pub use error::{ArchetypeError, ErrorSeverity, GameError, ProgressionError, RosterError};
pub use event::CombatEvent;
pub use progression::{award_victory, level_up, xp_for_level};
pub use range::{RangeKind, RangeSet};
pub use rng::{CombatRng, FixedRng, SeededRng};
pub use roster::Roster;
