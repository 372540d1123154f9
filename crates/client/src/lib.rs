//! Console front end for the cavern game.
//!
//! ```text
//! main ─→ CliConfig::from_env ─→ setup_logging ─→ Game::run
//!                                                   ├─→ Prompter   (stdin/stdout)
//!                                                   ├─→ presentation (text rendering)
//!                                                   └─→ runtime::Session (rules)
//! ```
//!
//! Everything that talks to the player goes through [`Prompter`], which is
//! generic over its reader and writer so whole games can be scripted in tests.

pub mod app;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod prompt;

pub use app::Game;
pub use config::CliConfig;
pub use logging::setup_logging;
pub use prompt::{Choice, Prompter};
