//! Enemy archetype templates.
//!
//! An archetype is a named template ("goblin", "orc") defining the ranges
//! spawned instances randomize within. Templates are content-table data:
//! immutable, registry-owned, shared by every spawn.

use serde::{Deserialize, Serialize};

/// One entry in an archetype's drop table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub item_id: String,
    /// Independent drop probability, 0.0..=1.0
    pub drop_chance: f64,
}

/// A named enemy template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub name: String,
    /// Inclusive ranges for spawn-time rolls
    pub health_range: (i32, i32),
    pub strength_range: (i32, i32),
    pub dexterity_range: (i32, i32),
    pub speed_range: (f64, f64),
    /// Distance at which the enemy notices the hero (host movement data)
    pub sight_radius: i32,
    /// Inclusive gold range rolled when the enemy is defeated
    pub gold_drop_range: (i32, i32),
    pub item_drops: Vec<ItemDrop>,
    /// Weapon template id, resolved through the content registry
    pub weapon_id: String,
}
