//! Archetype roster loader.
//!
//! Loads hero classes and monster types from a RON list of archetype specs.

use std::path::Path;

use game_core::{ArchetypeSpec, Roster};

use crate::loaders::{LoadResult, read_file};

/// Loader for the archetype roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    ///
    /// RON format: `Vec<ArchetypeSpec>`
    ///
    /// Every archetype is validated before the roster is built, so malformed
    /// data is rejected here rather than when a combatant is created.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let specs: Vec<ArchetypeSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        Ok(Roster::from_specs(specs)?)
    }
}
