//! Live battle participants.
//!
//! A [`Combatant`] is the shared fighting state (hit points, damage, crit
//! chance, available ranges) plus a [`Role`] payload: heroes carry their
//! [`Progression`], monsters carry the [`Bounty`] they are worth.
//!
//! Monsters spawn at the hero's level and are dropped when the encounter ends.
//! The hero lives for the whole session.

mod stats;

use std::sync::Arc;

pub use stats::DerivedStats;

use crate::archetype::Archetype;
use crate::progression::xp_for_level;
use crate::range::RangeSet;

/// Hero-only progression record.
#[derive(Clone, Debug, PartialEq)]
pub struct Progression {
    /// Hit points at the current level; the hero is healed back to this.
    pub(crate) full_hp: i32,
    /// Cumulative, never reset on level-up.
    pub(crate) xp: u32,
    pub(crate) xp_next_level: f64,
    pub(crate) victories: u32,
    /// Append-only kill log, oldest first.
    pub(crate) defeated_monsters: Vec<Combatant>,
}

impl Progression {
    fn new(full_hp: i32, level: u32) -> Self {
        Self {
            full_hp,
            xp: 0,
            xp_next_level: xp_for_level(level),
            victories: 0,
            defeated_monsters: Vec::new(),
        }
    }

    pub fn full_hp(&self) -> i32 {
        self.full_hp
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn xp_next_level(&self) -> f64 {
        self.xp_next_level
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    pub fn defeated_monsters(&self) -> &[Combatant] {
        &self.defeated_monsters
    }

    /// Experience still missing before the next level (never negative).
    pub fn xp_remaining(&self) -> f64 {
        (self.xp_next_level - f64::from(self.xp)).max(0.0)
    }
}

/// Monster-only reward record, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounty {
    pub(crate) xp_reward: u32,
}

impl Bounty {
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Role {
    Hero(Progression),
    Monster(Bounty),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    pub(crate) name: String,
    pub(crate) archetype: Arc<Archetype>,
    pub(crate) level: u32,
    /// May go negative after a hit; alive means `hp > 0`.
    pub(crate) hp: i32,
    pub(crate) dmg: i32,
    pub(crate) crit_chance: i32,
    pub(crate) available_range: RangeSet,
    pub(crate) role: Role,
}

impl Combatant {
    /// Creates a hero with an empty kill log and no experience.
    ///
    /// # Panics
    ///
    /// Panics if `level` is 0.
    pub fn hero(name: impl Into<String>, archetype: Arc<Archetype>, level: u32) -> Self {
        let stats = derive(&archetype, level);
        let progression = Progression::new(stats.hp, level);
        Self::with_role(name.into(), archetype, level, stats, Role::Hero(progression))
    }

    /// Creates a monster named after its archetype.
    ///
    /// # Panics
    ///
    /// Panics if `level` is 0.
    pub fn monster(archetype: Arc<Archetype>, level: u32) -> Self {
        let stats = derive(&archetype, level);
        let base_xp = u32::try_from(archetype.base_xp()).unwrap_or(0);
        let bounty = Bounty {
            xp_reward: level.saturating_mul(base_xp),
        };
        let name = archetype.name().to_owned();
        Self::with_role(name, archetype, level, stats, Role::Monster(bounty))
    }

    fn with_role(
        name: String,
        archetype: Arc<Archetype>,
        level: u32,
        stats: DerivedStats,
        role: Role,
    ) -> Self {
        Self {
            name,
            crit_chance: archetype.crit_chance(),
            available_range: archetype.available_range(),
            archetype,
            level,
            hp: stats.hp,
            dmg: stats.dmg,
            role,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> &Arc<Archetype> {
        &self.archetype
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Current base damage (before variance, range and crit).
    pub fn dmg(&self) -> i32 {
        self.dmg
    }

    pub fn crit_chance(&self) -> i32 {
        self.crit_chance
    }

    pub fn available_range(&self) -> RangeSet {
        self.available_range
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_hero(&self) -> bool {
        matches!(self.role, Role::Hero(_))
    }

    pub fn is_monster(&self) -> bool {
        matches!(self.role, Role::Monster(_))
    }

    pub fn progression(&self) -> Option<&Progression> {
        match &self.role {
            Role::Hero(progression) => Some(progression),
            Role::Monster(_) => None,
        }
    }

    /// Experience granted for defeating this combatant, if it is a monster.
    pub fn xp_reward(&self) -> Option<u32> {
        match &self.role {
            Role::Monster(bounty) => Some(bounty.xp_reward),
            Role::Hero(_) => None,
        }
    }

    /// Hit points this combatant heals back to.
    pub fn full_hp(&self) -> i32 {
        match &self.role {
            Role::Hero(progression) => progression.full_hp,
            Role::Monster(_) => DerivedStats::compute_hp(&self.archetype, self.level),
        }
    }

    /// Restores hit points to [`Self::full_hp`].
    pub fn heal(&mut self) {
        self.hp = self.full_hp();
    }

    /// Subtracts `amount` and returns the remaining hit points.
    ///
    /// Negative amounts add hit points; the damage sample is not clamped.
    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }
}

fn derive(archetype: &Archetype, level: u32) -> DerivedStats {
    assert!(level >= 1, "combatant level must be at least 1");
    DerivedStats::compute(archetype, level)
}
