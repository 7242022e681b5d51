//! Rooms and their enemy population.

use crate::consts::{MAX_ENEMIES_PER_ROOM, SPAWN_MARGIN};
use crate::content::{ContentError, ContentRegistry};
use crate::enemy::{Enemy, Position, spawn_enemy};
use crate::rng::GameRng;

/// A single room in the dungeon grid.
///
/// `cleared` flips true when the enemy list empties; rooms are never
/// destroyed during a play session.
#[derive(Debug)]
pub struct Room {
    width: i32,
    height: i32,
    pub enemies: Vec<Enemy>,
    pub cleared: bool,
}

impl Room {
    /// An empty room with no spawns.
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            enemies: Vec::new(),
            cleared: false,
        }
    }

    /// A freshly generated dungeon room, populated from the registry's
    /// archetype roster.
    ///
    /// Draws an enemy count in 1..=3, then per enemy a spawn position in
    /// the room's right half (x, then y, biased away from the entry edge)
    /// and an archetype index, then the instance's stat rolls.
    pub fn populate(
        width: i32,
        height: i32,
        registry: &ContentRegistry,
        rng: &mut GameRng,
    ) -> Result<Self, ContentError> {
        let roster = registry.archetype_ids();
        if roster.is_empty() {
            return Err(ContentError::NoArchetypes);
        }

        let mut room = Room::empty(width, height);
        let count = rng.rnd(MAX_ENEMIES_PER_ROOM);
        for _ in 0..count {
            let x = rng.range_i32(width / 2, width - SPAWN_MARGIN);
            let y = rng.range_i32(SPAWN_MARGIN, height - SPAWN_MARGIN);
            let archetype_id = roster[rng.rn2(roster.len() as u32) as usize];
            let enemy = spawn_enemy(archetype_id, Position::new(x, y), registry, rng)?;
            room.enemies.push(enemy);
        }
        Ok(room)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
