//! Read-only content registry.
//!
//! Weapon, enemy-archetype and item templates are loaded by the host
//! (content-file parsing is out of scope here) and handed to the core as an
//! explicitly constructed registry. Nothing in this crate reaches for
//! global tables; room population, enemy spawning and record loading all
//! take a `&ContentRegistry`.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::enemy::EnemyArchetype;
use crate::genome::StatId;
use crate::item::{Item, Weapon};

/// Configuration errors: malformed or dangling content-table entries.
///
/// Fatal at load/validation time; never raised mid-combat.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("enemy archetype '{archetype}' references unknown weapon '{weapon_id}'")]
    UnknownWeapon {
        archetype: String,
        weapon_id: String,
    },

    #[error("drop table for '{archetype}' references unknown item '{item_id}'")]
    UnknownItem { archetype: String, item_id: String },

    #[error("unknown enemy archetype '{0}'")]
    UnknownArchetype(String),

    #[error("weapon '{0}' has an inverted damage range")]
    BadDamageRange(String),

    #[error("genome is missing required stat {stat}")]
    MissingStat { stat: StatId },

    #[error("no enemy archetypes registered")]
    NoArchetypes,
}

/// Immutable lookup tables keyed by string id.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    weapons: HashMap<String, Arc<Weapon>>,
    archetypes: HashMap<String, EnemyArchetype>,
    items: HashMap<String, Item>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_weapon(&mut self, id: &str, weapon: Weapon) {
        self.weapons.insert(id.to_string(), Arc::new(weapon));
    }

    pub fn add_archetype(&mut self, id: &str, archetype: EnemyArchetype) {
        self.archetypes.insert(id.to_string(), archetype);
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn weapon(&self, id: &str) -> Option<&Arc<Weapon>> {
        self.weapons.get(id)
    }

    pub fn archetype(&self, id: &str) -> Option<&EnemyArchetype> {
        self.archetypes.get(id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Ids of every archetype eligible for room population, sorted so draw
    /// order stays reproducible under a fixed seed.
    pub fn archetype_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.archetypes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Cross-check every reference between tables.
    ///
    /// Hosts call this once after loading content; the rest of the core may
    /// then assume ids resolve.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (id, weapon) in &self.weapons {
            if weapon.base_damage.0 > weapon.base_damage.1 {
                return Err(ContentError::BadDamageRange(id.clone()));
            }
        }
        for (id, archetype) in &self.archetypes {
            if !self.weapons.contains_key(&archetype.weapon_id) {
                return Err(ContentError::UnknownWeapon {
                    archetype: id.clone(),
                    weapon_id: archetype.weapon_id.clone(),
                });
            }
            for drop in &archetype.item_drops {
                if !self.items.contains_key(&drop.item_id) {
                    return Err(ContentError::UnknownItem {
                        archetype: id.clone(),
                        item_id: drop.item_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
