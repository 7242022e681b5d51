//! Enemy creation from archetype templates.
//!
//! Instances randomize within the archetype's configured ranges. Draw order
//! per spawn: health, strength, dexterity, speed.

use super::{Enemy, Position};
use crate::content::{ContentError, ContentRegistry};
use crate::rng::GameRng;

/// Spawn one enemy from a registered archetype.
///
/// Resolves the archetype and its weapon through the registry; dangling ids
/// surface as `ContentError` (a validated registry never produces one).
pub fn spawn_enemy(
    archetype_id: &str,
    pos: Position,
    registry: &ContentRegistry,
    rng: &mut GameRng,
) -> Result<Enemy, ContentError> {
    let archetype = registry
        .archetype(archetype_id)
        .ok_or_else(|| ContentError::UnknownArchetype(archetype_id.to_string()))?;
    let weapon = registry
        .weapon(&archetype.weapon_id)
        .cloned()
        .ok_or_else(|| ContentError::UnknownWeapon {
            archetype: archetype_id.to_string(),
            weapon_id: archetype.weapon_id.clone(),
        })?;

    let health = rng.range_i32(archetype.health_range.0, archetype.health_range.1);
    let strength = rng.range_i32(archetype.strength_range.0, archetype.strength_range.1);
    let dexterity = rng.range_i32(archetype.dexterity_range.0, archetype.dexterity_range.1);
    let speed = rng.uniform_f64(archetype.speed_range.0, archetype.speed_range.1);

    Ok(Enemy {
        archetype_id: archetype_id.to_string(),
        name: archetype.name.clone(),
        health,
        max_health: health,
        strength,
        dexterity,
        speed,
        sight_radius: archetype.sight_radius,
        gold_drop_range: archetype.gold_drop_range,
        item_drops: archetype.item_drops.clone(),
        weapon,
        pos,
        is_charging_attack: false,
    })
}
