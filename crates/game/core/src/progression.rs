//! Hero leveling engine.
//!
//! Triggered when a hero defeats a monster. Experience is cumulative: it is
//! never reset on level-up, only compared against a threshold that grows with
//! the level (`100 × level^1.5`). One award grants at most one level.

use crate::combatant::{Combatant, DerivedStats, Role};
use crate::error::ProgressionError;
use crate::event::CombatEvent;

/// Experience required to leave `level`: `100 × level^1.5`.
pub fn xp_for_level(level: u32) -> f64 {
    let level = f64::from(level);
    100.0 * level * level.sqrt()
}

/// Credits `hero` with the defeat of `monster`.
///
/// Increments the victory count, appends the monster to the kill log, adds
/// its experience reward, then either levels up or reports how much
/// experience is still missing.
pub fn award_victory(
    hero: &mut Combatant,
    monster: &Combatant,
) -> Result<Vec<CombatEvent>, ProgressionError> {
    let Role::Monster(bounty) = &monster.role else {
        return Err(ProgressionError::NotAMonster(monster.name.clone()));
    };
    let xp_gained = bounty.xp_reward;

    let Role::Hero(progression) = &mut hero.role else {
        return Err(ProgressionError::NotAHero(hero.name.clone()));
    };

    progression.victories += 1;
    progression.defeated_monsters.push(monster.clone());
    progression.xp = progression.xp.saturating_add(xp_gained);

    let mut events = vec![CombatEvent::Progress {
        hero: hero.name.clone(),
        victories: progression.victories,
        xp_gained,
        xp_total: progression.xp,
    }];

    if f64::from(progression.xp) >= progression.xp_next_level {
        events.push(level_up(hero)?);
    } else {
        events.push(CombatEvent::XpRemaining {
            hero: hero.name.clone(),
            remaining: progression.xp_remaining(),
        });
    }

    Ok(events)
}

/// Raises `hero` by one level, recomputes its stats and fully heals it.
pub fn level_up(hero: &mut Combatant) -> Result<CombatEvent, ProgressionError> {
    let Role::Hero(progression) = &mut hero.role else {
        return Err(ProgressionError::NotAHero(hero.name.clone()));
    };

    hero.level = hero.level.saturating_add(1);
    progression.xp_next_level = xp_for_level(hero.level);

    let stats = DerivedStats::compute(&hero.archetype, hero.level);
    progression.full_hp = stats.hp;
    hero.dmg = stats.dmg;
    hero.hp = progression.full_hp;

    Ok(CombatEvent::LevelUp {
        hero: hero.name.clone(),
        level: hero.level,
        full_hp: progression.full_hp,
        dmg: hero.dmg,
        xp_next_level: progression.xp_next_level,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::archetype::{Archetype, ArchetypeSpec};
    use crate::error::{ErrorSeverity, GameError};

    fn warrior() -> Arc<Archetype> {
        Arc::new(Archetype::from_spec(ArchetypeSpec::hero("Warrior", 500, 20)).unwrap())
    }

    fn goblin() -> Arc<Archetype> {
        Arc::new(
            Archetype::from_spec(ArchetypeSpec::monster("Goblin", 200, 10).with_base_xp(25))
                .unwrap(),
        )
    }

    fn hobgoblin() -> Arc<Archetype> {
        Arc::new(
            Archetype::from_spec(
                ArchetypeSpec::monster("Hobgoblin", 400, 25)
                    .with_base_xp(60)
                    .with_ranges(true, true),
            )
            .unwrap(),
        )
    }

    #[test]
    fn xp_curve() {
        assert_eq!(xp_for_level(1), 100.0);
        assert_eq!(xp_for_level(4), 800.0);
        assert_eq!(xp_for_level(9), 2700.0);
        assert!((xp_for_level(2) - 282.842_712_474_619).abs() < 1e-9);
        assert!((xp_for_level(3) - 519.615_242_270_663_2).abs() < 1e-9);
    }

    #[test]
    fn victory_below_threshold_reports_remaining() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let monster = Combatant::monster(goblin(), 1);

        let events = award_victory(&mut hero, &monster).unwrap();

        let progression = hero.progression().unwrap();
        assert_eq!(progression.victories(), 1);
        assert_eq!(progression.xp(), 25);
        assert_eq!(progression.defeated_monsters().len(), 1);
        assert_eq!(progression.defeated_monsters()[0].name(), "Goblin");
        assert_eq!(hero.level(), 1);
        assert_eq!(
            events,
            vec![
                CombatEvent::Progress {
                    hero: "Aria".into(),
                    victories: 1,
                    xp_gained: 25,
                    xp_total: 25,
                },
                CombatEvent::XpRemaining {
                    hero: "Aria".into(),
                    remaining: 75.0,
                },
            ]
        );
    }

    #[test]
    fn reaching_threshold_exactly_levels_up() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        for _ in 0..3 {
            award_victory(&mut hero, &Combatant::monster(goblin(), 1)).unwrap();
        }
        assert_eq!(hero.level(), 1);

        hero.take_damage(321);
        let events = award_victory(&mut hero, &Combatant::monster(goblin(), 1)).unwrap();

        assert_eq!(hero.level(), 2);
        assert_eq!(hero.hp(), 1000);
        assert_eq!(hero.dmg(), 30);
        let progression = hero.progression().unwrap();
        assert_eq!(progression.full_hp(), 1000);
        assert_eq!(progression.xp(), 100);
        assert_eq!(progression.xp_next_level(), xp_for_level(2));
        assert!(matches!(
            events.last(),
            Some(CombatEvent::LevelUp {
                level: 2,
                full_hp: 1000,
                dmg: 30,
                ..
            })
        ));
    }

    #[test]
    fn level_three_scenario() {
        // Hero at level 3 needs 60 more xp; a level-3 goblin is worth 75.
        let mut hero = Combatant::hero("Aria", warrior(), 3);
        if let Role::Hero(progression) = &mut hero.role {
            progression.xp = 460;
            progression.xp_next_level = 520.0;
        }
        let monster = Combatant::monster(goblin(), 3);
        assert_eq!(monster.xp_reward(), Some(75));

        award_victory(&mut hero, &monster).unwrap();

        assert_eq!(hero.level(), 4);
        assert_eq!(hero.hp(), hero.progression().unwrap().full_hp());
        assert_eq!(hero.progression().unwrap().xp_next_level(), 800.0);
    }

    #[test]
    fn xp_accumulates_and_one_level_per_award() {
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        // Level-5 hobgoblin: 300 xp, enough to clear both level 1 and level 2 thresholds.
        let monster = Combatant::monster(hobgoblin(), 5);

        award_victory(&mut hero, &monster).unwrap();

        assert_eq!(hero.level(), 2);
        assert_eq!(hero.progression().unwrap().xp(), 300);

        // Next victory compares cumulative xp against the level-2 threshold.
        award_victory(&mut hero, &Combatant::monster(goblin(), 1)).unwrap();
        assert_eq!(hero.level(), 3);
        assert_eq!(hero.progression().unwrap().xp(), 325);
    }

    #[test]
    fn recomputed_stats_are_stable() {
        let mut a = Combatant::hero("A", warrior(), 1);
        let mut b = Combatant::hero("B", warrior(), 1);
        level_up(&mut a).unwrap();
        level_up(&mut b).unwrap();

        assert_eq!(a.progression().unwrap().full_hp(), b.progression().unwrap().full_hp());
        assert_eq!(a.dmg(), b.dmg());
    }

    #[test]
    fn roles_are_checked() {
        let mut monster = Combatant::monster(goblin(), 1);
        let mut hero = Combatant::hero("Aria", warrior(), 1);
        let other_hero = Combatant::hero("Bram", warrior(), 1);

        let err = award_victory(&mut monster, &Combatant::monster(goblin(), 1)).unwrap_err();
        assert_eq!(err, ProgressionError::NotAHero("Goblin".into()));
        assert_eq!(err.severity(), ErrorSeverity::Internal);

        let err = award_victory(&mut hero, &other_hero).unwrap_err();
        assert_eq!(err, ProgressionError::NotAMonster("Bram".into()));
        assert_eq!(hero.progression().unwrap().victories(), 0);

        assert!(level_up(&mut monster).is_err());
        assert_eq!(monster.level(), 1);
    }
}
