//! Damage sampling and range modifiers.

use crate::config::CombatConfig;
use crate::range::RangeKind;
use crate::rng::CombatRng;

/// Draws the raw damage of one attack.
///
/// # Formula
///
/// ```text
/// raw = trunc(Normal(mean = dmg, sd = damage_std_dev))
/// ```
///
/// Truncation is toward zero; low draws may be negative.
pub fn sample_damage(
    dmg: i32,
    rng: &mut (impl CombatRng + ?Sized),
    config: &CombatConfig,
) -> i32 {
    rng.normal(f64::from(dmg), config.damage_std_dev).trunc() as i32
}

/// Multiplier applied to a ranged attack, `None` for melee attacks.
///
/// - ranged attack, ranged round: `ranged_vs_ranged_multiplier` (0.80)
/// - ranged attack, melee round: `ranged_in_melee_multiplier` (1.05)
pub fn range_multiplier(
    combat_range: RangeKind,
    attack_range: RangeKind,
    config: &CombatConfig,
) -> Option<f64> {
    match (attack_range, combat_range) {
        (RangeKind::Melee, _) => None,
        (RangeKind::Range, RangeKind::Range) => Some(config.ranged_vs_ranged_multiplier),
        (RangeKind::Range, RangeKind::Melee) => Some(config.ranged_in_melee_multiplier),
    }
}

/// Applies the range multiplier and truncates toward zero.
pub fn apply_range_modifier(
    raw: i32,
    combat_range: RangeKind,
    attack_range: RangeKind,
    config: &CombatConfig,
) -> i32 {
    match range_multiplier(combat_range, attack_range, config) {
        Some(multiplier) => (f64::from(raw) * multiplier).trunc() as i32,
        None => raw,
    }
}

/// Extra damage of a critical hit: half the attacker's base damage, floored.
///
/// Uses the base `dmg`, not the sampled value.
pub fn crit_bonus(dmg: i32) -> i32 {
    dmg.div_euclid(2)
}
