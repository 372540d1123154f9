//! The console game loop.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use game_core::{CombatConfig, Combatant, RangeKind, Roster};
use runtime::{EncounterStatus, Session, SessionState};

use crate::presentation::{
    archetype_card, box_msg, combatant_card, range_label, render_event, round_intro, summary_card,
};
use crate::prompt::{Choice, Prompter};

pub struct Game<R, W> {
    prompter: Prompter<R, W>,
    roster: Roster,
    combat: CombatConfig,
    seed: u64,
    runs: u64,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(prompter: Prompter<R, W>, roster: Roster, combat: CombatConfig, seed: u64) -> Self {
        Self {
            prompter,
            roster,
            combat,
            seed,
            runs: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Plays sessions until the player declines to start over or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.run_sessions() {
            Err(err) if is_eof(&err) => {
                tracing::info!("input closed, leaving the cavern");
                Ok(())
            }
            other => other,
        }
    }

    fn run_sessions(&mut self) -> Result<()> {
        self.prompter.say("Welcome to my game!")?;
        loop {
            self.play_session()?;
            if !self.prompter.ask_yes_no("Do you want to start over?")? {
                return Ok(());
            }
        }
    }

    fn play_session(&mut self) -> Result<()> {
        let mut session = self.create_session()?;

        self.prompter.say("You enter a cavern.")?;
        self.prompter
            .say("You venture into a tunnel until you encounter:")?;
        self.prompter.press_to_continue()?;

        loop {
            let monster = session.next_encounter()?.monster();
            self.prompter.say(combatant_card(monster))?;
            let monster_name = monster.name().to_owned();
            self.prompter.press_to_continue()?;

            self.fight(&mut session, &monster_name)?;

            if session.state() == SessionState::Dead {
                self.prompter.say(box_msg("Too bad you are dead!"))?;
                break;
            }

            if !self.prompter.ask_continue()? {
                let summary = session.retire()?;
                self.prompter.say(box_msg("Congratulation, you retired!"))?;
                self.prompter.say(summary_card(&summary))?;
                break;
            }
            self.prompter.say(
                "You heal yourself and venture further into the tunnel until you encounter:\n",
            )?;
        }

        Ok(())
    }

    fn create_session(&mut self) -> Result<Session> {
        let mut name = self.prompter.ask_line("Please write your hero name: ")?;
        if name.is_empty() {
            name = "Hero".to_owned();
        }

        for archetype in self.roster.heroes() {
            self.prompter.say(archetype_card(archetype))?;
        }
        let classes: Vec<Choice<String>> = self
            .roster
            .heroes()
            .iter()
            .map(|a| Choice::new(a.name(), a.name().to_owned()))
            .collect();
        let class = self
            .prompter
            .ask_selection("Please select your hero class.", &classes)?;

        let seed = self.seed.wrapping_add(self.runs);
        self.runs += 1;
        let session = Session::builder()
            .roster(self.roster.clone())
            .config(self.combat.clone())
            .seed(seed)
            .hero(name, class)
            .build()?;

        self.prompter.say("You have successfully created your hero.")?;
        self.prompter.say(combatant_card(session.hero()))?;
        self.prompter.press_to_continue()?;

        Ok(session)
    }

    fn fight(&mut self, session: &mut Session, monster_name: &str) -> Result<()> {
        loop {
            let hero_combat =
                self.choose_range(session.hero(), "\nAt what RANGE do you want to attack?")?;
            let hero_attack = self.choose_range(
                session.hero(),
                "\nWhat KIND of attack do you want to perform?",
            )?;

            let report = session.play_round(hero_combat, hero_attack)?;
            self.prompter.say(round_intro(&report.plan, monster_name))?;
            for event in report.events() {
                self.prompter.say(render_event(event))?;
                if matches!(event, game_core::CombatEvent::LevelUp { .. }) {
                    self.prompter.say(combatant_card(session.hero()))?;
                }
            }

            if report.status != EncounterStatus::Ongoing {
                return Ok(());
            }
            if session.hero().available_range().len() == 1 {
                self.prompter.press_to_continue()?;
            }
        }
    }

    /// Asks only when the hero has a real choice.
    fn choose_range(&mut self, hero: &Combatant, msg: &str) -> io::Result<RangeKind> {
        let available = hero.available_range();
        if let Some(only) = available.single() {
            return Ok(only);
        }
        let choices: Vec<Choice<RangeKind>> = available
            .kinds()
            .map(|kind| Choice::new(range_label(kind), kind))
            .collect();
        self.prompter.ask_selection(msg, &choices)
    }
}

fn is_eof(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
