//! Combat event recording.
//!
//! Every event a session produces is kept in an [`EventLog`] and mirrored to
//! `tracing` at a level matching its weight.

mod log;

pub use log::{EventLog, trace_event};
