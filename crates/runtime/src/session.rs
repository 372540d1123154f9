//! Session state machine.
//!
//! A session follows one hero from creation to death or retirement:
//!
//! ```text
//! Exploring ──next_encounter──▶ InEncounter ──victory──▶ Exploring
//!     │                              │
//!   retire                         defeat
//!     ▼                              ▼
//!  Retired                          Dead
//! ```
//!
//! The hero is healed to full hit points each time a new encounter starts.
use std::fmt;

use game_core::{CombatConfig, CombatRng, Combatant, RangeKind, Roster, SeededRng};
use strum::Display;

use crate::encounter::{Encounter, EncounterStatus, RoundReport};
use crate::error::{Result, RuntimeError};
use crate::events::EventLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    Exploring,
    InEncounter,
    Dead,
    Retired,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Dead | Self::Retired)
    }
}

/// End-of-session record shown to the player.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub hero: String,
    pub class: String,
    pub level: u32,
    pub xp: u32,
    pub victories: u32,
    /// Defeated monster names, oldest first.
    pub defeated: Vec<String>,
    pub state: SessionState,
}

pub struct Session {
    hero: Combatant,
    roster: Roster,
    config: CombatConfig,
    rng: Box<dyn CombatRng>,
    encounter: Option<Encounter>,
    state: SessionState,
    encounters: u32,
    log: EventLog,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("hero", &self.hero.name())
            .field("level", &self.hero.level())
            .field("state", &self.state)
            .field("encounters", &self.encounters)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// The running encounter, if any.
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// Number of encounters started so far.
    pub fn encounters(&self) -> u32 {
        self.encounters
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Heals the hero and spawns a monster at the hero's level.
    pub fn next_encounter(&mut self) -> Result<&Encounter> {
        self.expect_state(SessionState::Exploring)?;

        self.hero.heal();
        let encounter = Encounter::spawn(&self.roster, self.hero.level(), self.rng.as_mut())?;
        self.encounters += 1;
        self.state = SessionState::InEncounter;

        Ok(&*self.encounter.insert(encounter))
    }

    /// Plays one round of the running encounter with the hero's choices.
    ///
    /// When the encounter ends the session moves back to
    /// [`SessionState::Exploring`], or to [`SessionState::Dead`] if the hero
    /// fell.
    pub fn play_round(
        &mut self,
        hero_combat: RangeKind,
        hero_attack: RangeKind,
    ) -> Result<RoundReport> {
        self.expect_state(SessionState::InEncounter)?;
        let Some(encounter) = self.encounter.as_mut() else {
            return Err(RuntimeError::InvalidState {
                expected: SessionState::InEncounter,
                actual: self.state,
            });
        };

        let report = encounter.play_round(
            &mut self.hero,
            hero_combat,
            hero_attack,
            self.rng.as_mut(),
            &self.config,
        )?;
        self.log.extend(report.events());

        match report.status {
            EncounterStatus::Ongoing => {}
            EncounterStatus::HeroVictorious => {
                self.encounter = None;
                self.state = SessionState::Exploring;
            }
            EncounterStatus::HeroDefeated => {
                self.encounter = None;
                self.state = SessionState::Dead;
                tracing::info!(
                    hero = %self.hero.name(),
                    level = self.hero.level(),
                    "hero has fallen"
                );
            }
        }

        Ok(report)
    }

    /// Ends the session by the player's choice.
    pub fn retire(&mut self) -> Result<SessionSummary> {
        self.expect_state(SessionState::Exploring)?;
        self.state = SessionState::Retired;
        tracing::info!(hero = %self.hero.name(), level = self.hero.level(), "hero retired");
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        let (xp, victories, defeated) = match self.hero.progression() {
            Some(p) => (
                p.xp(),
                p.victories(),
                p.defeated_monsters()
                    .iter()
                    .map(|m| m.name().to_owned())
                    .collect(),
            ),
            None => (0, 0, Vec::new()),
        };

        SessionSummary {
            hero: self.hero.name().to_owned(),
            class: self.hero.archetype().name().to_owned(),
            level: self.hero.level(),
            xp,
            victories,
            defeated,
            state: self.state,
        }
    }

    fn expect_state(&self, expected: SessionState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RuntimeError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }
}

/// Builder for [`Session`].
///
/// Only the hero is required. The roster defaults to the built-in one, the
/// combat constants to [`CombatConfig::default`] and randomness to a
/// [`SeededRng`] with seed 0.
#[derive(Default)]
pub struct SessionBuilder {
    roster: Option<Roster>,
    config: CombatConfig,
    rng: Option<Box<dyn CombatRng>>,
    hero: Option<(String, String)>,
    level: Option<u32>,
}

impl SessionBuilder {
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(SeededRng::new(seed))
    }

    pub fn rng(mut self, rng: impl CombatRng + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Hero name and class (a hero archetype name, case-insensitive).
    pub fn hero(mut self, name: impl Into<String>, class: impl Into<String>) -> Self {
        self.hero = Some((name.into(), class.into()));
        self
    }

    /// Starting level, 1 by default. Level 0 is rejected by [`Self::build`].
    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn build(self) -> Result<Session> {
        let (name, class) = self.hero.ok_or(RuntimeError::MissingHero)?;
        let roster = match self.roster {
            Some(roster) => roster,
            None => game_content::roster()?,
        };
        let archetype = roster
            .hero(&class)
            .cloned()
            .ok_or(RuntimeError::UnknownHeroClass(class))?;

        let level = self.level.unwrap_or(1);
        if level == 0 {
            return Err(RuntimeError::InvalidLevel(level));
        }
        let hero = Combatant::hero(name, archetype, level);
        tracing::info!(
            hero = %hero.name(),
            class = %hero.archetype().name(),
            level = hero.level(),
            "session started"
        );

        Ok(Session {
            hero,
            roster,
            config: self.config,
            rng: self
                .rng
                .unwrap_or_else(|| Box::new(SeededRng::new(0))),
            encounter: None,
            state: SessionState::Exploring,
            encounters: 0,
            log: EventLog::new(),
        })
    }
}
