//! Combat distance categories.
//!
//! A round is fought at one [`RangeKind`] (the combat range) and each attacker
//! strikes with one [`RangeKind`] (the attack range). What a combatant is able
//! to do is described by a [`RangeSet`].

use bitflags::bitflags;

/// Distance category of a round or an attack.
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
pub enum RangeKind {
    /// Close quarters.
    Melee,
    /// At a distance.
    Range,
}

impl RangeKind {
    /// Single-member set containing this range.
    pub const fn as_set(self) -> RangeSet {
        match self {
            Self::Melee => RangeSet::MELEE,
            Self::Range => RangeSet::RANGE,
        }
    }
}

bitflags! {
    /// Set of ranges a combatant can fight at.
    ///
    /// Iteration yields `MELEE` before `RANGE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RangeSet: u8 {
        const MELEE = 1 << 0;
        const RANGE = 1 << 1;
    }
}

impl RangeSet {
    /// Builds a set from the two capability flags used in archetype data.
    pub const fn from_capabilities(melee: bool, ranged: bool) -> Self {
        let mut bits = 0;
        if melee {
            bits |= Self::MELEE.bits();
        }
        if ranged {
            bits |= Self::RANGE.bits();
        }
        Self::from_bits_truncate(bits)
    }

    /// Whether `range` is a member of this set.
    pub const fn allows(self, range: RangeKind) -> bool {
        self.contains(range.as_set())
    }

    /// Member ranges in canonical order.
    pub fn kinds(self) -> impl Iterator<Item = RangeKind> {
        [RangeKind::Melee, RangeKind::Range]
            .into_iter()
            .filter(move |kind| self.allows(*kind))
    }

    /// Number of member ranges.
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// The member when the set holds exactly one range.
    pub fn single(self) -> Option<RangeKind> {
        if self.len() == 1 { self.kinds().next() } else { None }
    }
}

impl core::fmt::Display for RangeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&str> = self
            .kinds()
            .map(|kind| match kind {
                RangeKind::Melee => "Melee",
                RangeKind::Range => "Range",
            })
            .collect();
        f.write_str(&names.join(", "))
    }
}
