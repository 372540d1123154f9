//! Stock hero classes and monster types.

use game_core::{ArchetypeSpec, Roster, RosterError};

/// Specs of the stock content, heroes first.
///
/// | Archetype     | HP  | DMG | Crit | XP | Ranges         |
/// |---------------|-----|-----|------|----|----------------|
/// | Warrior       | 500 | 20  | 10   |    | melee          |
/// | Archer        | 300 | 25  | 20   |    | range          |
/// | Ranger        | 350 | 25  | 10   |    | melee, range   |
/// | Thief         | 300 | 30  | 30   |    | melee          |
/// | Goblin        | 200 | 10  | 10   | 25 | melee          |
/// | Goblin rogue  | 140 | 25  | 35   | 35 | melee          |
/// | Goblin archer | 125 | 20  | 15   | 25 | range          |
/// | Hobgoblin     | 400 | 25  | 10   | 60 | melee, range   |
pub fn builtin_specs() -> Vec<ArchetypeSpec> {
    vec![
        ArchetypeSpec::hero("Warrior", 500, 20),
        ArchetypeSpec::hero("Archer", 300, 25)
            .with_crit_chance(20)
            .with_ranges(false, true),
        ArchetypeSpec::hero("Ranger", 350, 25).with_ranges(true, true),
        ArchetypeSpec::hero("Thief", 300, 30).with_crit_chance(30),
        ArchetypeSpec::monster("Goblin", 200, 10).with_base_xp(25),
        ArchetypeSpec::monster("Goblin rogue", 140, 25)
            .with_base_xp(35)
            .with_crit_chance(35),
        ArchetypeSpec::monster("Goblin archer", 125, 20)
            .with_base_xp(25)
            .with_crit_chance(15)
            .with_ranges(false, true),
        ArchetypeSpec::monster("Hobgoblin", 400, 25)
            .with_base_xp(60)
            .with_ranges(true, true),
    ]
}

/// The stock roster.
pub fn roster() -> Result<Roster, RosterError> {
    Roster::from_specs(builtin_specs())
}

#[cfg(test)]
mod tests {
    use game_core::RangeSet;

    use super::*;

    #[test]
    fn stock_roster_is_valid() {
        let roster = roster().unwrap();

        let heroes: Vec<_> = roster.heroes().iter().map(|a| a.name()).collect();
        let monsters: Vec<_> = roster.monsters().iter().map(|a| a.name()).collect();
        assert_eq!(heroes, vec!["Warrior", "Archer", "Ranger", "Thief"]);
        assert_eq!(
            monsters,
            vec!["Goblin", "Goblin rogue", "Goblin archer", "Hobgoblin"]
        );
    }

    #[test]
    fn stock_ranges() {
        let roster = roster().unwrap();

        assert_eq!(roster.hero("Archer").unwrap().available_range(), RangeSet::RANGE);
        assert_eq!(roster.hero("Ranger").unwrap().available_range(), RangeSet::all());
        assert_eq!(roster.monster("Goblin").unwrap().available_range(), RangeSet::MELEE);
        assert_eq!(
            roster.monster("Goblin archer").unwrap().available_range(),
            RangeSet::RANGE
        );
    }
}
