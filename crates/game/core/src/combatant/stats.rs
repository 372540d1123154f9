//! Stat derivation from archetype and level.
//!
//! Formulas:
//! - `hp  = level × base_hp`
//! - `dmg = floor((level + 1) × base_dmg / 2)`
//!
//! Both are recomputed from scratch whenever the level changes, never adjusted
//! incrementally, so the same `(archetype, level)` always yields the same stats.

use crate::archetype::Archetype;

/// Level-dependent stats of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub hp: i32,
    pub dmg: i32,
}

impl DerivedStats {
    pub fn compute(archetype: &Archetype, level: u32) -> Self {
        Self {
            hp: Self::compute_hp(archetype, level),
            dmg: Self::compute_dmg(archetype, level),
        }
    }

    /// Formula: level × base_hp
    pub fn compute_hp(archetype: &Archetype, level: u32) -> i32 {
        saturate(i64::from(level) * i64::from(archetype.base_hp()))
    }

    /// Formula: floor((level + 1) × base_dmg / 2)
    ///
    /// `base_dmg` is validated non-negative, so integer division is the floor.
    pub fn compute_dmg(archetype: &Archetype, level: u32) -> i32 {
        saturate((i64::from(level) + 1) * i64::from(archetype.base_dmg()) / 2)
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
