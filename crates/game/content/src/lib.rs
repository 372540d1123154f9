//! Data-driven content definitions and loaders.
//!
//! This crate houses the stock archetype roster and loaders for RON/TOML data files:
//! - Hero classes and monster types (built in, or data-driven via RON)
//! - Combat tunables (data-driven via TOML)
//!
//! Content is consumed by the runtime and never changes after startup.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_specs, roster};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader};
