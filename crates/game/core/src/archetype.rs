//! Archetypes: immutable templates for hero classes and monster types.
//!
//! Raw data arrives as an [`ArchetypeSpec`] (hand-written or deserialized from
//! content files) and is turned into an [`Archetype`] by
//! [`Archetype::from_spec`], which rejects malformed values. An `Archetype`
//! has no setters; combatants share it behind an `Arc`.

use crate::error::ArchetypeError;
use crate::range::{RangeKind, RangeSet};

/// Which side of the fight an archetype belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArchetypeCategory {
    /// Playable hero class.
    Hero,
    /// Monster type met in encounters.
    Monster,
}

/// Unvalidated archetype record.
///
/// Field defaults match the stock content: 10% crit, no experience reward,
/// melee only, no preferred range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeSpec {
    pub category: ArchetypeCategory,
    pub name: String,
    pub base_hp: i32,
    pub base_dmg: i32,
    #[cfg_attr(feature = "serde", serde(default = "ArchetypeSpec::default_crit_chance"))]
    pub crit_chance: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_xp: i32,
    #[cfg_attr(feature = "serde", serde(default = "ArchetypeSpec::default_melee"))]
    pub melee: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranged: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_range: Option<RangeKind>,
}

impl ArchetypeSpec {
    pub const DEFAULT_CRIT_CHANCE: i32 = 10;

    /// Spec with stock defaults for everything but the identifying stats.
    pub fn new(
        category: ArchetypeCategory,
        name: impl Into<String>,
        base_hp: i32,
        base_dmg: i32,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            base_hp,
            base_dmg,
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            base_xp: 0,
            melee: Self::default_melee(),
            ranged: false,
            preferred_range: None,
        }
    }

    pub fn hero(name: impl Into<String>, base_hp: i32, base_dmg: i32) -> Self {
        Self::new(ArchetypeCategory::Hero, name, base_hp, base_dmg)
    }

    pub fn monster(name: impl Into<String>, base_hp: i32, base_dmg: i32) -> Self {
        Self::new(ArchetypeCategory::Monster, name, base_hp, base_dmg)
    }

    #[must_use]
    pub fn with_crit_chance(mut self, crit_chance: i32) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    #[must_use]
    pub fn with_base_xp(mut self, base_xp: i32) -> Self {
        self.base_xp = base_xp;
        self
    }

    /// Sets both attack capabilities at once.
    #[must_use]
    pub fn with_ranges(mut self, melee: bool, ranged: bool) -> Self {
        self.melee = melee;
        self.ranged = ranged;
        self
    }

    #[must_use]
    pub fn with_preferred_range(mut self, range: RangeKind) -> Self {
        self.preferred_range = Some(range);
        self
    }

    #[cfg(feature = "serde")]
    fn default_crit_chance() -> i32 {
        Self::DEFAULT_CRIT_CHANCE
    }

    const fn default_melee() -> bool {
        true
    }
}

/// Validated, immutable archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Archetype {
    category: ArchetypeCategory,
    name: String,
    base_hp: i32,
    base_dmg: i32,
    crit_chance: i32,
    base_xp: i32,
    available_range: RangeSet,
    preferred_range: Option<RangeKind>,
}

impl Archetype {
    /// Validates a spec.
    ///
    /// Rejects an empty name, negative stats, a non-positive `base_hp`, a crit
    /// chance outside `0..=100`, and an archetype that can attack at no range.
    pub fn from_spec(spec: ArchetypeSpec) -> Result<Self, ArchetypeError> {
        if spec.name.trim().is_empty() {
            return Err(ArchetypeError::EmptyName);
        }

        for (field, value) in [
            ("base_hp", spec.base_hp),
            ("base_dmg", spec.base_dmg),
            ("base_xp", spec.base_xp),
        ] {
            if value < 0 {
                return Err(ArchetypeError::NegativeStat {
                    name: spec.name,
                    field,
                    value,
                });
            }
        }

        if spec.base_hp == 0 {
            return Err(ArchetypeError::ZeroHitPoints { name: spec.name });
        }

        if !(0..=100).contains(&spec.crit_chance) {
            return Err(ArchetypeError::CritChanceOutOfBounds {
                name: spec.name,
                value: spec.crit_chance,
            });
        }

        let available_range = RangeSet::from_capabilities(spec.melee, spec.ranged);
        if available_range.is_empty() {
            return Err(ArchetypeError::NoAvailableRange { name: spec.name });
        }

        Ok(Self {
            category: spec.category,
            name: spec.name,
            base_hp: spec.base_hp,
            base_dmg: spec.base_dmg,
            crit_chance: spec.crit_chance,
            base_xp: spec.base_xp,
            available_range,
            preferred_range: spec.preferred_range,
        })
    }

    pub fn category(&self) -> ArchetypeCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_hp(&self) -> i32 {
        self.base_hp
    }

    pub fn base_dmg(&self) -> i32 {
        self.base_dmg
    }

    /// Critical hit chance in percent.
    pub fn crit_chance(&self) -> i32 {
        self.crit_chance
    }

    /// Experience granted per level when a monster of this type is defeated.
    pub fn base_xp(&self) -> i32 {
        self.base_xp
    }

    /// Never empty.
    pub fn available_range(&self) -> RangeSet {
        self.available_range
    }

    /// Reserved. No combat rule reads this yet.
    pub fn preferred_range(&self) -> Option<RangeKind> {
        self.preferred_range
    }

    pub fn is_hero(&self) -> bool {
        self.category == ArchetypeCategory::Hero
    }

    pub fn is_monster(&self) -> bool {
        self.category == ArchetypeCategory::Monster
    }
}

impl TryFrom<ArchetypeSpec> for Archetype {
    type Error = ArchetypeError;

    fn try_from(spec: ArchetypeSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}
