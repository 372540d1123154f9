//! Combat result types and attack resolution.

use crate::combatant::Combatant;
use crate::config::CombatConfig;
use crate::event::CombatEvent;
use crate::progression::award_victory;
use crate::range::RangeKind;
use crate::rng::CombatRng;

use super::crit::{effective_crit_threshold, roll_crit};
use super::damage::{apply_range_modifier, crit_bonus, sample_damage};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Non-ranged attack in a ranged round; nothing happened.
    OutOfReach,
    /// The attacker does not have the requested attack range; nothing happened.
    InvalidRange,
    /// Damage was dealt.
    Hit,
    /// Damage including the critical bonus was dealt.
    Critical,
}

/// Result of one attack exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Damage dealt (None if the attack never landed).
    pub damage: Option<i32>,

    /// Whether this attack brought the defender to zero hit points or below.
    pub defender_defeated: bool,

    /// Everything that happened, in order.
    pub events: Vec<CombatEvent>,
}

impl AttackResult {
    pub fn is_critical(&self) -> bool {
        self.outcome == AttackOutcome::Critical
    }

    fn rejected(outcome: AttackOutcome, event: CombatEvent) -> Self {
        Self {
            outcome,
            damage: None,
            defender_defeated: false,
            events: vec![event],
        }
    }
}

/// Resolve one attack of `attacker` against `defender`.
///
/// # Steps
///
/// 1. The attack range must be one the attacker has, otherwise
///    [`AttackOutcome::InvalidRange`]
/// 2. Reach: in a ranged round only a ranged attack connects, otherwise
///    [`AttackOutcome::OutOfReach`]
/// 3. Sample raw damage around the attacker's `dmg`
/// 4. Apply the range multiplier
/// 5. Roll for a crit against the (range-adjusted) threshold and add half
///    the attacker's base `dmg` on success
/// 6. Subtract from the defender's hit points
/// 7. On defeat, run [`on_victory`]
///
/// Rejected attacks (1, 2) leave both combatants untouched and draw nothing
/// from `rng`. Step 1 wins over step 2: a melee attack from an attacker
/// without melee is reported as [`AttackOutcome::InvalidRange`] even in a
/// ranged round, so the reach failure only ever concerns valid requests.
pub fn resolve_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    combat_range: RangeKind,
    attack_range: RangeKind,
    rng: &mut (impl CombatRng + ?Sized),
    config: &CombatConfig,
) -> AttackResult {
    if !attacker.available_range().allows(attack_range) {
        return AttackResult::rejected(
            AttackOutcome::InvalidRange,
            CombatEvent::InvalidAttackRange {
                attacker: attacker.name().to_owned(),
                requested: attack_range,
            },
        );
    }

    if combat_range == RangeKind::Range && attack_range != RangeKind::Range {
        return AttackResult::rejected(
            AttackOutcome::OutOfReach,
            CombatEvent::OutOfReach {
                attacker: attacker.name().to_owned(),
                defender: defender.name().to_owned(),
            },
        );
    }

    let raw = sample_damage(attacker.dmg(), rng, config);
    let mut damage = apply_range_modifier(raw, combat_range, attack_range, config);

    let threshold =
        effective_crit_threshold(attacker.crit_chance(), combat_range, attack_range, config);
    let critical = roll_crit(threshold, rng, config);
    if critical {
        damage = damage.saturating_add(crit_bonus(attacker.dmg()));
    }

    let defender_hp = defender.take_damage(damage);
    let mut events = vec![CombatEvent::Damage {
        attacker: attacker.name().to_owned(),
        defender: defender.name().to_owned(),
        amount: damage,
        critical,
        defender_hp,
    }];

    let defender_defeated = !defender.is_alive();
    if defender_defeated {
        events.extend(on_victory(attacker, defender));
    }

    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage: Some(damage),
        defender_defeated,
        events,
    }
}

/// Win resolution.
///
/// Always emits [`CombatEvent::Victory`]. A hero defeating a monster is then
/// credited by the leveling engine; a monster's victory changes nothing.
pub fn on_victory(victor: &mut Combatant, defeated: &Combatant) -> Vec<CombatEvent> {
    let mut events = vec![CombatEvent::Victory {
        victor: victor.name().to_owned(),
        defeated: defeated.name().to_owned(),
    }];

    if victor.is_hero() && defeated.is_monster() {
        // Roles are checked above, so the award cannot be refused.
        if let Ok(progress) = award_victory(victor, defeated) {
            events.extend(progress);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::archetype::{Archetype, ArchetypeSpec};
    use crate::progression::level_up;
    use crate::rng::FixedRng;

    fn hero(base_hp: i32, base_dmg: i32, melee: bool, ranged: bool, crit: i32) -> Combatant {
        let archetype = Archetype::from_spec(
            ArchetypeSpec::hero("Hero", base_hp, base_dmg)
                .with_ranges(melee, ranged)
                .with_crit_chance(crit),
        )
        .unwrap();
        Combatant::hero("Aria", Arc::new(archetype), 1)
    }

    fn goblin(level: u32) -> Combatant {
        let archetype =
            Archetype::from_spec(ArchetypeSpec::monster("Goblin", 200, 10).with_base_xp(25))
                .unwrap();
        Combatant::monster(Arc::new(archetype), level)
    }

    /// Records the parameters of every normal draw.
    #[derive(Default)]
    struct RecordingRng {
        normals: Vec<(f64, f64)>,
    }

    impl CombatRng for RecordingRng {
        fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
            self.normals.push((mean, std_dev));
            mean
        }

        fn range_inclusive(&mut self, _min: u32, max: u32) -> u32 {
            max
        }
    }

    #[test]
    fn damage_is_sampled_around_current_dmg() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, true, 10);
        level_up(&mut attacker).unwrap();
        let mut defender = goblin(1);
        let mut rng = RecordingRng::default();

        resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Range,
            &mut rng,
            &config,
        );

        // Level 2: dmg = 3 × 40 / 2 = 60.
        assert_eq!(attacker.dmg(), 60);
        assert_eq!(rng.normals, vec![(60.0, 5.0)]);
    }

    #[test]
    fn unavailable_range_takes_precedence_over_reach() {
        let config = CombatConfig::default();
        let mut attacker = hero(300, 25, false, true, 20);
        let mut defender = goblin(1);
        let mut rng = RecordingRng::default();

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Range,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert_eq!(result.outcome, AttackOutcome::InvalidRange);
        assert_eq!(
            result.events,
            vec![CombatEvent::InvalidAttackRange {
                attacker: "Aria".into(),
                requested: RangeKind::Melee,
            }]
        );
        assert!(rng.normals.is_empty());
        assert_eq!(defender.hp(), 200);
    }

    #[test]
    fn plain_melee_hit() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, false, 10);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([40.0]).with_integers([100]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, Some(40));
        assert!(!result.defender_defeated);
        assert_eq!(defender.hp(), 160);
        assert_eq!(
            result.events,
            vec![CombatEvent::Damage {
                attacker: "Aria".into(),
                defender: "Goblin".into(),
                amount: 40,
                critical: false,
                defender_hp: 160,
            }]
        );
    }

    #[test]
    fn melee_attack_in_ranged_round_is_out_of_reach() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, true, 100);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([999.0]).with_integers([0]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Range,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert_eq!(result.outcome, AttackOutcome::OutOfReach);
        assert_eq!(result.damage, None);
        assert_eq!(defender.hp(), 200);
        assert_eq!(rng.remaining(), (1, 1));
        assert_eq!(
            result.events,
            vec![CombatEvent::OutOfReach {
                attacker: "Aria".into(),
                defender: "Goblin".into(),
            }]
        );
    }

    #[test]
    fn unavailable_attack_range_is_flagged_separately() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, false, 10);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([40.0]).with_integers([100]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Range,
            &mut rng,
            &config,
        );

        assert_eq!(result.outcome, AttackOutcome::InvalidRange);
        assert_eq!(defender.hp(), 200);
        assert_eq!(rng.remaining(), (1, 1));
        assert!(result.events[0].is_caller_error());
    }

    #[test]
    fn ranged_vs_ranged_with_crit() {
        let config = CombatConfig::default();
        let mut attacker = hero(300, 25, false, true, 20);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([26.7]).with_integers([20]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Range,
            RangeKind::Range,
            &mut rng,
            &config,
        );

        // trunc(26.7) = 26, × 0.8 = 20.8 → 20, + 25 / 2 = 12 → 32
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, Some(32));
        assert_eq!(defender.hp(), 168);
    }

    #[test]
    fn ranged_in_melee_crit_threshold_is_reduced() {
        let config = CombatConfig::default();
        let mut attacker = hero(300, 25, false, true, 20);
        let mut defender = goblin(1);
        // Roll 16 > 20 - 5: no crit.
        let mut rng = FixedRng::new().with_normals([25.0]).with_integers([16]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Range,
            &mut rng,
            &config,
        );

        // 25 × 1.05 = 26.25 → 26
        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, Some(26));

        let mut rng = FixedRng::new().with_normals([25.0]).with_integers([15]);
        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Range,
            &mut rng,
            &config,
        );
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, Some(26 + 12));
    }

    #[test]
    fn crit_bonus_uses_base_damage_not_sample() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, false, 100);
        let mut defender = goblin(5);
        let mut rng = FixedRng::new().with_normals([10.0]).with_integers([0]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert_eq!(result.damage, Some(10 + 20));
    }

    #[test]
    fn negative_sample_is_applied_as_is() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 2, true, false, 0);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([-4.2]).with_integers([50]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert_eq!(result.damage, Some(-4));
        assert_eq!(defender.hp(), 204);
    }

    #[test]
    fn lethal_hit_credits_the_hero() {
        let config = CombatConfig::default();
        let mut attacker = hero(500, 40, true, false, 10);
        let mut defender = goblin(1);
        let mut rng = FixedRng::new().with_normals([250.0]).with_integers([100]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert!(result.defender_defeated);
        assert_eq!(defender.hp(), -50);
        let kinds: Vec<_> = result.events.iter().map(CombatEvent::as_str).collect();
        assert_eq!(kinds, vec!["damage", "victory", "progress", "xp_remaining"]);

        let progression = attacker.progression().unwrap();
        assert_eq!(progression.victories(), 1);
        assert_eq!(progression.xp(), 25);
    }

    #[test]
    fn monster_victory_changes_nothing_else() {
        let config = CombatConfig::default();
        let mut attacker = goblin(1);
        let mut defender = hero(5, 40, true, false, 10);
        let mut rng = FixedRng::new().with_normals([10.0]).with_integers([100]);

        let result = resolve_attack(
            &mut attacker,
            &mut defender,
            RangeKind::Melee,
            RangeKind::Melee,
            &mut rng,
            &config,
        );

        assert!(result.defender_defeated);
        assert!(!defender.is_alive());
        assert_eq!(
            result.events.last(),
            Some(&CombatEvent::Victory {
                victor: "Goblin".into(),
                defeated: "Aria".into(),
            })
        );
        assert_eq!(defender.progression().unwrap().victories(), 0);
    }

    #[test]
    fn on_victory_between_heroes_only_announces() {
        let mut a = hero(500, 40, true, false, 10);
        let b = hero(500, 40, true, false, 10);

        let events = on_victory(&mut a, &b);

        assert_eq!(events.len(), 1);
        assert_eq!(a.progression().unwrap().victories(), 0);
    }
}
