//! Enemies: archetype templates and spawned instances.

mod archetype;
mod spawn;

pub use archetype::{EnemyArchetype, ItemDrop};
pub use spawn::spawn_enemy;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::combat::Combatant;
use crate::genome::{StatId, TraitId};
use crate::item::Weapon;

/// Pixel position inside a room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A spawned enemy.
///
/// Stats are rolled once at spawn time from the archetype's ranges and stay
/// fixed for the enemy's lifetime. `speed` and `sight_radius` are data for
/// the host's movement loop; combat never reads them.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub archetype_id: String,
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub speed: f64,
    pub sight_radius: i32,
    /// Inclusive gold range rolled on defeat
    pub gold_drop_range: (i32, i32),
    pub item_drops: Vec<ItemDrop>,
    pub weapon: Arc<Weapon>,
    pub pos: Position,
    /// Set while a vicious bite is telegraphed for the next turn
    pub is_charging_attack: bool,
}

impl Enemy {
    /// Apply damage, clamped at 0.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self, stat: StatId) -> i32 {
        match stat {
            StatId::Strength => self.strength,
            StatId::Dexterity => self.dexterity,
            // Enemies carry no optional stats
            _ => 0,
        }
    }

    fn has_trait(&self, _trait_id: TraitId) -> bool {
        false
    }

    fn trait_magnitude(&self, _trait_id: TraitId) -> f64 {
        0.0
    }

    fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn max_health(&self) -> i32 {
        self.max_health
    }
}
