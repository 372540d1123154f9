//! Per-round range selection.
//!
//! Each side proposes a combat range and picks an attack range. The hero's
//! choices come from the caller; the monster picks uniformly among what it
//! can do. When the two proposals disagree, the round's combat range is a
//! coin flip between them.

use crate::combatant::Combatant;
use crate::range::{RangeKind, RangeSet};
use crate::rng::CombatRng;

/// Ranges in effect for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundPlan {
    pub combat_range: RangeKind,
    pub hero_attack: RangeKind,
    pub monster_attack: RangeKind,
}

/// Picks uniformly from `available`.
///
/// A single-member set is returned without drawing. Returns `None` only for
/// an empty set, which validated archetypes never produce.
pub fn choose_range(available: RangeSet, rng: &mut (impl CombatRng + ?Sized)) -> Option<RangeKind> {
    if let Some(only) = available.single() {
        return Some(only);
    }
    let kinds: Vec<RangeKind> = available.kinds().collect();
    if kinds.is_empty() {
        return None;
    }
    kinds.get(rng.index(kinds.len())).copied()
}

/// Resolves disagreeing combat-range proposals with a uniform pick.
///
/// Matching proposals are returned without drawing.
pub fn negotiate_combat_range(
    hero_proposal: RangeKind,
    monster_proposal: RangeKind,
    rng: &mut (impl CombatRng + ?Sized),
) -> RangeKind {
    if hero_proposal == monster_proposal {
        return hero_proposal;
    }
    if rng.index(2) == 0 {
        hero_proposal
    } else {
        monster_proposal
    }
}

/// Builds the round plan from the hero's choices and the monster's picks.
///
/// Draws, in order: monster combat proposal, monster attack range, then the
/// negotiation pick if the proposals differ. The hero's choices are passed
/// through unchecked; an attack range the hero lacks is flagged by the
/// resolver.
pub fn plan_round(
    hero_combat: RangeKind,
    hero_attack: RangeKind,
    monster: &Combatant,
    rng: &mut (impl CombatRng + ?Sized),
) -> RoundPlan {
    let available = monster.available_range();
    let monster_combat = choose_range(available, rng).unwrap_or(RangeKind::Melee);
    let monster_attack = choose_range(available, rng).unwrap_or(RangeKind::Melee);
    let combat_range = negotiate_combat_range(hero_combat, monster_combat, rng);

    RoundPlan {
        combat_range,
        hero_attack,
        monster_attack,
    }
}
