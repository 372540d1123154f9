//! Structured combat events.
//!
//! The resolver and the leveling engine never print. They return these
//! events in the order things happened, and a presentation layer decides how
//! to render them.

use crate::range::RangeKind;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum CombatEvent {
    /// A melee attack was attempted in a ranged round.
    OutOfReach { attacker: String, defender: String },

    /// The attacker asked for an attack range it does not have.
    ///
    /// Handled like a reach failure, but always points at a caller bug.
    InvalidAttackRange {
        attacker: String,
        requested: RangeKind,
    },

    /// Damage was dealt.
    Damage {
        attacker: String,
        defender: String,
        amount: i32,
        critical: bool,
        defender_hp: i32,
    },

    /// The defender dropped to zero hit points or below.
    Victory { victor: String, defeated: String },

    /// A hero banked the reward for a defeated monster.
    Progress {
        hero: String,
        victories: u32,
        xp_gained: u32,
        xp_total: u32,
    },

    /// Experience still missing before the next level.
    XpRemaining { hero: String, remaining: f64 },

    /// A hero gained a level and was fully healed.
    LevelUp {
        hero: String,
        level: u32,
        full_hp: i32,
        dmg: i32,
        xp_next_level: f64,
    },
}

impl CombatEvent {
    /// Events that mean the caller passed inconsistent input.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidAttackRange { .. })
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfReach { .. } => "out_of_reach",
            Self::InvalidAttackRange { .. } => "invalid_attack_range",
            Self::Damage { .. } => "damage",
            Self::Victory { .. } => "victory",
            Self::Progress { .. } => "progress",
            Self::XpRemaining { .. } => "xp_remaining",
            Self::LevelUp { .. } => "level_up",
        }
    }
}
