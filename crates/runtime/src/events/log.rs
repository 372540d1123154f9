use game_core::CombatEvent;

/// Ordered record of the combat events of a session.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records and traces one event.
    pub fn record(&mut self, event: &CombatEvent) {
        trace_event(event);
        self.entries.push(event.clone());
    }

    pub fn extend<'a>(&mut self, events: impl IntoIterator<Item = &'a CombatEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn entries(&self) -> &[CombatEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded events that point at a caller bug.
    pub fn caller_errors(&self) -> usize {
        self.entries.iter().filter(|e| e.is_caller_error()).count()
    }
}

/// Emits a `tracing` record for one combat event.
pub fn trace_event(event: &CombatEvent) {
    match event {
        CombatEvent::InvalidAttackRange {
            attacker,
            requested,
        } => {
            tracing::warn!(
                attacker = %attacker,
                requested = %requested,
                "attack range not available to attacker; treated as out of reach"
            );
        }
        CombatEvent::OutOfReach { attacker, defender } => {
            tracing::debug!(attacker = %attacker, defender = %defender, "out of reach");
        }
        CombatEvent::Damage {
            attacker,
            defender,
            amount,
            critical,
            defender_hp,
        } => {
            tracing::debug!(
                attacker = %attacker,
                defender = %defender,
                amount,
                critical,
                defender_hp,
                "damage dealt"
            );
        }
        CombatEvent::Victory { victor, defeated } => {
            tracing::info!(victor = %victor, defeated = %defeated, "victory");
        }
        CombatEvent::Progress {
            hero,
            victories,
            xp_gained,
            xp_total,
        } => {
            tracing::info!(hero = %hero, victories, xp_gained, xp_total, "experience gained");
        }
        CombatEvent::XpRemaining { hero, remaining } => {
            tracing::debug!(hero = %hero, remaining, "experience to next level");
        }
        CombatEvent::LevelUp {
            hero,
            level,
            full_hp,
            dmg,
            ..
        } => {
            tracing::info!(hero = %hero, level, full_hp, dmg, "level up");
        }
    }
}
