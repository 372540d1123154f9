//! The archetype registry.
//!
//! A [`Roster`] is built once at startup from validated archetypes and is
//! read-only afterwards. Heroes and monsters are kept in two ordered sequences
//! in the order they were supplied.

use std::sync::Arc;

use crate::archetype::{Archetype, ArchetypeCategory, ArchetypeSpec};
use crate::error::RosterError;

#[derive(Clone, Debug)]
pub struct Roster {
    heroes: Vec<Arc<Archetype>>,
    monsters: Vec<Arc<Archetype>>,
}

impl Roster {
    /// Partitions archetypes by category.
    ///
    /// Names must be unique within a category (compared case-insensitively),
    /// and both categories must be populated.
    pub fn new(archetypes: impl IntoIterator<Item = Archetype>) -> Result<Self, RosterError> {
        let mut heroes: Vec<Arc<Archetype>> = Vec::new();
        let mut monsters: Vec<Arc<Archetype>> = Vec::new();

        for archetype in archetypes {
            let bucket = match archetype.category() {
                ArchetypeCategory::Hero => &mut heroes,
                ArchetypeCategory::Monster => &mut monsters,
            };

            if bucket
                .iter()
                .any(|existing| existing.name().eq_ignore_ascii_case(archetype.name()))
            {
                return Err(RosterError::DuplicateName {
                    category: archetype.category(),
                    name: archetype.name().to_owned(),
                });
            }

            bucket.push(Arc::new(archetype));
        }

        if heroes.is_empty() {
            return Err(RosterError::Empty(ArchetypeCategory::Hero));
        }
        if monsters.is_empty() {
            return Err(RosterError::Empty(ArchetypeCategory::Monster));
        }

        Ok(Self { heroes, monsters })
    }

    /// Validates every spec, then builds the roster.
    pub fn from_specs(specs: impl IntoIterator<Item = ArchetypeSpec>) -> Result<Self, RosterError> {
        let archetypes = specs
            .into_iter()
            .map(Archetype::from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(archetypes)
    }

    pub fn heroes(&self) -> &[Arc<Archetype>] {
        &self.heroes
    }

    pub fn monsters(&self) -> &[Arc<Archetype>] {
        &self.monsters
    }

    pub fn hero(&self, name: &str) -> Option<&Arc<Archetype>> {
        find(&self.heroes, name)
    }

    pub fn monster(&self, name: &str) -> Option<&Arc<Archetype>> {
        find(&self.monsters, name)
    }
}

fn find<'a>(archetypes: &'a [Arc<Archetype>], name: &str) -> Option<&'a Arc<Archetype>> {
    archetypes
        .iter()
        .find(|archetype| archetype.name().eq_ignore_ascii_case(name))
}
