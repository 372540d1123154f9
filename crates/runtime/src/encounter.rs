//! A fight between the hero and one monster, played round by round.
use game_core::{
    AttackResult, CombatConfig, CombatEvent, CombatRng, Combatant, RangeKind, Roster, RoundPlan,
    plan_round, resolve_attack,
};
use strum::Display;
use tracing::Span;

use crate::error::{Result, RuntimeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EncounterStatus {
    Ongoing,
    HeroVictorious,
    HeroDefeated,
}

impl EncounterStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// 1-based round number within the encounter.
    pub round: u32,
    pub plan: RoundPlan,
    pub hero_attack: AttackResult,
    /// `None` when the hero's attack ended the fight.
    pub monster_attack: Option<AttackResult>,
    pub status: EncounterStatus,
}

impl RoundReport {
    /// All events of the round in the order they happened.
    pub fn events(&self) -> impl Iterator<Item = &CombatEvent> {
        self.hero_attack
            .events
            .iter()
            .chain(self.monster_attack.iter().flat_map(|a| a.events.iter()))
    }
}

#[derive(Debug)]
pub struct Encounter {
    monster: Combatant,
    rounds: u32,
    status: EncounterStatus,
    span: Span,
}

impl Encounter {
    /// Picks a monster archetype uniformly and spawns it at `hero_level`.
    pub fn spawn(
        roster: &Roster,
        hero_level: u32,
        rng: &mut (impl CombatRng + ?Sized),
    ) -> Result<Self> {
        let monsters = roster.monsters();
        let archetype = monsters
            .get(rng.index(monsters.len()))
            .ok_or(RuntimeError::NoMonsters)?;
        Ok(Self::with_monster(Combatant::monster(
            archetype.clone(),
            hero_level,
        )))
    }

    /// Starts an encounter against an already built monster.
    pub fn with_monster(monster: Combatant) -> Self {
        let span = tracing::info_span!(
            "encounter",
            monster = %monster.name(),
            level = monster.level()
        );
        span.in_scope(|| {
            tracing::info!(hp = monster.hp(), dmg = monster.dmg(), "monster appears");
        });
        Self {
            monster,
            rounds: 0,
            status: EncounterStatus::Ongoing,
            span,
        }
    }

    pub fn monster(&self) -> &Combatant {
        &self.monster
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn status(&self) -> EncounterStatus {
        self.status
    }

    /// Plays one round: the hero attacks, then the monster if it survived.
    pub fn play_round(
        &mut self,
        hero: &mut Combatant,
        hero_combat: RangeKind,
        hero_attack: RangeKind,
        rng: &mut (impl CombatRng + ?Sized),
        config: &CombatConfig,
    ) -> Result<RoundReport> {
        if self.status.is_over() {
            return Err(RuntimeError::EncounterOver {
                monster: self.monster.name().to_owned(),
            });
        }

        let span = self.span.clone();
        let _enter = span.enter();

        self.rounds += 1;
        let plan = plan_round(hero_combat, hero_attack, &self.monster, rng);
        tracing::debug!(
            round = self.rounds,
            combat_range = %plan.combat_range,
            hero_attack = %plan.hero_attack,
            monster_attack = %plan.monster_attack,
            "round planned"
        );

        let hero_result = resolve_attack(
            hero,
            &mut self.monster,
            plan.combat_range,
            plan.hero_attack,
            rng,
            config,
        );

        let monster_result = if self.monster.is_alive() {
            Some(resolve_attack(
                &mut self.monster,
                hero,
                plan.combat_range,
                plan.monster_attack,
                rng,
                config,
            ))
        } else {
            None
        };

        self.status = if !self.monster.is_alive() {
            EncounterStatus::HeroVictorious
        } else if !hero.is_alive() {
            EncounterStatus::HeroDefeated
        } else {
            EncounterStatus::Ongoing
        };
        if self.status.is_over() {
            tracing::info!(rounds = self.rounds, status = %self.status, "encounter over");
        }

        Ok(RoundReport {
            round: self.rounds,
            plan,
            hero_attack: hero_result,
            monster_attack: monster_result,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_core::{Archetype, ArchetypeSpec, AttackOutcome, FixedRng};

    use super::*;

    fn warrior() -> Arc<Archetype> {
        Arc::new(Archetype::from_spec(ArchetypeSpec::hero("Warrior", 500, 20)).unwrap())
    }

    fn goblin() -> Arc<Archetype> {
        Arc::new(
            Archetype::from_spec(ArchetypeSpec::monster("Goblin", 200, 10).with_base_xp(25))
                .unwrap(),
        )
    }

    #[test]
    fn hero_strikes_first_and_monster_answers() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let mut encounter = Encounter::with_monster(Combatant::monster(goblin(), 1));
        // Hero: 20 dmg, roll 100. Goblin: 10 dmg, roll 100.
        let mut rng = FixedRng::new()
            .with_normals([20.0, 10.0])
            .with_integers([100, 100]);

        let report = encounter
            .play_round(
                &mut hero,
                RangeKind::Melee,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.hero_attack.damage, Some(20));
        assert_eq!(report.monster_attack.as_ref().unwrap().damage, Some(10));
        assert_eq!(report.status, EncounterStatus::Ongoing);
        assert_eq!(encounter.monster().hp(), 180);
        assert_eq!(hero.hp(), 490);
        assert_eq!(report.events().count(), 2);
        assert_eq!(rng.remaining(), (0, 0));
    }

    #[test]
    fn killing_blow_skips_monster_attack() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let mut encounter = Encounter::with_monster(Combatant::monster(goblin(), 1));
        let mut rng = FixedRng::new().with_normals([250.0]).with_integers([100]);

        let report = encounter
            .play_round(
                &mut hero,
                RangeKind::Melee,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap();

        assert!(report.monster_attack.is_none());
        assert_eq!(report.status, EncounterStatus::HeroVictorious);
        assert_eq!(hero.progression().unwrap().victories(), 1);

        let err = encounter
            .play_round(
                &mut hero,
                RangeKind::Melee,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap_err();
        assert!(matches!(err, RuntimeError::EncounterOver { .. }));
    }

    #[test]
    fn ranged_round_leaves_melee_fighters_untouched() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let mut encounter = Encounter::with_monster(Combatant::monster(goblin(), 1));
        // Warrior asks for a ranged round it cannot fight in; goblin proposes melee.
        // Negotiation coin 1 picks the goblin's melee proposal.
        let mut rng = FixedRng::new()
            .with_normals([20.0, 10.0])
            .with_integers([1, 100, 100]);

        let report = encounter
            .play_round(
                &mut hero,
                RangeKind::Range,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap();
        assert_eq!(report.plan.combat_range, RangeKind::Melee);
        assert_eq!(report.hero_attack.outcome, AttackOutcome::Hit);

        // Coin 0 keeps the hero's ranged proposal: neither side can reach.
        let mut rng = FixedRng::new().with_integers([0]);
        let report = encounter
            .play_round(
                &mut hero,
                RangeKind::Range,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap();
        assert_eq!(report.hero_attack.outcome, AttackOutcome::OutOfReach);
        assert_eq!(
            report.monster_attack.unwrap().outcome,
            AttackOutcome::OutOfReach
        );
        assert_eq!(report.status, EncounterStatus::Ongoing);
    }

    #[test]
    fn hero_death_ends_encounter() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let mut encounter = Encounter::with_monster(Combatant::monster(goblin(), 1));
        let mut rng = FixedRng::new()
            .with_normals([20.0, 600.0])
            .with_integers([100, 100]);

        let report = encounter
            .play_round(
                &mut hero,
                RangeKind::Melee,
                RangeKind::Melee,
                &mut rng,
                &CombatConfig::default(),
            )
            .unwrap();

        assert_eq!(report.status, EncounterStatus::HeroDefeated);
        assert!(!hero.is_alive());
    }

    #[test]
    fn spawn_matches_hero_level() {
        let roster = Roster::from_specs([
            ArchetypeSpec::hero("Warrior", 500, 20),
            ArchetypeSpec::monster("Goblin", 200, 10).with_base_xp(25),
            ArchetypeSpec::monster("Hobgoblin", 400, 25).with_base_xp(60),
        ])
        .unwrap();
        let mut rng = FixedRng::new().with_integers([1]);

        let encounter = Encounter::spawn(&roster, 3, &mut rng).unwrap();

        assert_eq!(encounter.monster().name(), "Hobgoblin");
        assert_eq!(encounter.monster().level(), 3);
        assert_eq!(encounter.monster().hp(), 1200);
        assert_eq!(encounter.status(), EncounterStatus::Ongoing);
    }
}
