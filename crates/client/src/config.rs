//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use game_content::{ConfigLoader, RosterLoader};
use game_core::{CombatConfig, Roster};

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub seed: Option<u64>,
    pub roster_path: Option<PathBuf>,
    pub combat_config_path: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CAVERN_SEED` - RNG seed (default: current time)
    /// - `CAVERN_ROSTER` - RON roster file (default: built-in roster)
    /// - `CAVERN_COMBAT_CONFIG` - TOML combat constants (default: built-in constants)
    /// - `CAVERN_SESSION_ID` - Log directory name (default: auto-generated)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("CAVERN_SEED"),
            roster_path: env::var_os("CAVERN_ROSTER").map(PathBuf::from),
            combat_config_path: env::var_os("CAVERN_COMBAT_CONFIG").map(PathBuf::from),
            session_id: env::var("CAVERN_SESSION_ID").ok(),
        }
    }

    /// Configured seed, or one derived from the clock.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    /// Loads the roster and combat constants this configuration points at.
    pub fn load_content(&self) -> Result<(Roster, CombatConfig)> {
        let roster = match &self.roster_path {
            Some(path) => RosterLoader::load(path)?,
            None => game_content::roster().context("built-in roster is invalid")?,
        };
        let combat = match &self.combat_config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => CombatConfig::default(),
        };
        tracing::info!(
            heroes = roster.heroes().len(),
            monsters = roster.monsters().len(),
            "content loaded"
        );
        Ok((roster, combat))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
