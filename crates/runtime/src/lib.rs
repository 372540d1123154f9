//! Encounter and session orchestration around the combat rules.
//!
//! `game-core` resolves single attacks; this crate strings them into rounds,
//! rounds into encounters and encounters into a session, the way the console
//! game plays them. It owns the random source, heals the hero between
//! encounters, and mirrors every combat event to `tracing`.
//!
//! Modules are organized by responsibility:
//! - [`encounter`] runs rounds between the hero and one monster
//! - [`session`] hosts the session state machine and its builder
//! - [`events`] records and traces combat events
pub mod encounter;
pub mod error;
pub mod events;
pub mod session;

pub use encounter::{Encounter, EncounterStatus, RoundReport};
pub use error::{Result, RuntimeError};
pub use events::EventLog;
pub use session::{Session, SessionBuilder, SessionState, SessionSummary};
