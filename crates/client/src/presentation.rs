//! Text rendering for the console.
use game_core::{Archetype, CombatEvent, Combatant, RangeKind, RoundPlan};
use runtime::SessionSummary;

const SEPARATOR_WIDTH: usize = 60;

/// Decorates a single-line message: `***** msg *****`.
pub fn warning_msg(msg: &str) -> String {
    let decorator = "*".repeat(5);
    format!("\n{decorator} {msg} {decorator}")
}

/// Surrounds `msg` with a `#` box.
pub fn box_msg(msg: &str) -> String {
    let edge = "#".repeat(msg.chars().count() + 4);
    format!("\n{edge}\n# {msg} #\n{edge}\n")
}

pub fn range_label(kind: RangeKind) -> &'static str {
    match kind {
        RangeKind::Melee => "Melee",
        RangeKind::Range => "Range",
    }
}

/// Roster entry shown while picking a class.
pub fn archetype_card(archetype: &Archetype) -> String {
    let mut lines = vec![
        "-".repeat(SEPARATOR_WIDTH),
        archetype.name().to_uppercase(),
        format!(
            "Base hit points: {}, Base damage: {}, Crit chance: {}",
            archetype.base_hp(),
            archetype.base_dmg(),
            archetype.crit_chance()
        ),
    ];
    if archetype.is_monster() {
        lines.push(format!("Base XP: {}", archetype.base_xp()));
    }
    lines.push(archetype.available_range().to_string());
    lines.join("\n")
}

/// Live stats of a hero or monster.
pub fn combatant_card(combatant: &Combatant) -> String {
    let mut lines = vec![
        "-".repeat(SEPARATOR_WIDTH),
        combatant.name().to_uppercase(),
        format!(
            "Hit points: {}, Damage: {}, Crit chance: {}",
            combatant.hp(),
            combatant.dmg(),
            combatant.crit_chance()
        ),
    ];
    match combatant.xp_reward() {
        Some(xp) => lines.push(format!("Experience points: {xp}")),
        None => lines.push(format!(
            "Class: {}, Level: {}",
            combatant.archetype().name(),
            combatant.level()
        )),
    }
    lines.push(combatant.available_range().to_string());
    lines.join("\n")
}

pub fn round_intro(plan: &RoundPlan, monster: &str) -> String {
    format!(
        "\nThe round range is {}, you will be performing a {} attack and the {monster} a {} attack.",
        range_label(plan.combat_range),
        range_label(plan.hero_attack),
        range_label(plan.monster_attack),
    )
}

/// One console line (or block) per combat event.
pub fn render_event(event: &CombatEvent) -> String {
    match event {
        CombatEvent::OutOfReach { attacker, defender } => {
            format!("{attacker} could not reach {defender}.")
        }
        CombatEvent::InvalidAttackRange {
            attacker,
            requested,
        } => format!(
            "{attacker} cannot perform a {} attack.",
            range_label(*requested)
        ),
        CombatEvent::Damage {
            attacker,
            defender,
            amount,
            critical,
            defender_hp,
        } => {
            let prefix = if *critical { "Critical hit! " } else { "" };
            format!("{prefix}{attacker} deals {amount}. {defender} has {defender_hp} hp left.")
        }
        CombatEvent::Victory { victor, defeated } => {
            format!("\n{victor} won the battle against {defeated}.\n")
        }
        CombatEvent::Progress {
            victories,
            xp_gained,
            xp_total,
            ..
        } => format!(
            "You have won {victories} times.\nYou just won {xp_gained}xp. You currently have {xp_total}xp."
        ),
        CombatEvent::XpRemaining { remaining, .. } => {
            format!("You need {remaining:.0} for your next level.")
        }
        CombatEvent::LevelUp { level, .. } => {
            format!("Congratulation! You just won a level. You are now level {level}")
        }
    }
}

pub fn summary_card(summary: &SessionSummary) -> String {
    let defeated = if summary.defeated.is_empty() {
        "none".to_owned()
    } else {
        summary.defeated.join(", ")
    };
    [
        "-".repeat(SEPARATOR_WIDTH),
        format!(
            "Name: {}, Class: {}, Level: {}",
            summary.hero, summary.class, summary.level
        ),
        format!("Victories: {}, XP: {}", summary.victories, summary.xp),
        format!("Defeated: {defeated}"),
    ]
    .join("\n")
}
