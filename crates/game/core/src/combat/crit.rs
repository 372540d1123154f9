//! Critical hit checks.

use crate::config::CombatConfig;
use crate::range::RangeKind;
use crate::rng::CombatRng;

/// Crit threshold after range adjustment.
///
/// # Formula
///
/// ```text
/// threshold = crit_chance
/// if combat_range == Melee and attack_range == Range:
///     threshold -= ranged_in_melee_crit_penalty
/// ```
pub fn effective_crit_threshold(
    crit_chance: i32,
    combat_range: RangeKind,
    attack_range: RangeKind,
    config: &CombatConfig,
) -> i32 {
    if combat_range == RangeKind::Melee && attack_range == RangeKind::Range {
        crit_chance - config.ranged_in_melee_crit_penalty
    } else {
        crit_chance
    }
}

/// A roll is critical when it does not exceed the threshold (inclusive).
pub fn check_crit(threshold: i32, roll: u32) -> bool {
    i64::from(roll) <= i64::from(threshold)
}

/// Draws a roll in `[0, crit_roll_max]` and checks it against the threshold.
pub fn roll_crit(
    threshold: i32,
    rng: &mut (impl CombatRng + ?Sized),
    config: &CombatConfig,
) -> bool {
    check_crit(threshold, rng.range_inclusive(0, config.crit_roll_max))
}
