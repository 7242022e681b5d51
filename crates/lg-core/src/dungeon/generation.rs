//! Procedural dungeon generation.
//!
//! A drunkard's walk over the room grid with exit reservation: the tile one
//! step in the entry direction from the origin never receives a room (it is
//! the dungeon's one exit back to the overworld), and the walk's first step
//! is forced to the opposite tile so even the smallest dungeon has a path
//! leading away from the entrance.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::{Coord, Direction, DungeonMap, Room};
use crate::consts::{ROOM_HEIGHT, ROOM_WIDTH, WALK_STEP_LIMIT_PER_ROOM};
use crate::content::{ContentError, ContentRegistry};
use crate::rng::GameRng;

/// Errors from dungeon generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("min_rooms ({min}) exceeds max_rooms ({max})")]
    InvalidRoomBounds { min: usize, max: usize },

    /// The walk ran out of steps before placing every room. Practically
    /// unreachable with the current budget; reported instead of hanging.
    #[error("dungeon walk exhausted its step budget after placing {placed} of {requested} rooms")]
    WalkBudgetExhausted { placed: usize, requested: usize },

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Generate a dungeon entered from `entry`.
///
/// Draws one room-count roll, then one direction roll per walk step; each
/// new room is populated immediately. The digger moves onto existing rooms
/// freely - that is what lets corridors loop back and connect rather than
/// only ever branching outward - and only the reserved exit tile blocks it.
///
/// A `num_rooms` draw below 2 still yields two rooms: the origin and the
/// forced first corridor.
pub fn generate(
    min_rooms: usize,
    max_rooms: usize,
    entry: Direction,
    registry: &ContentRegistry,
    rng: &mut GameRng,
) -> Result<DungeonMap, GenerationError> {
    if min_rooms > max_rooms {
        return Err(GenerationError::InvalidRoomBounds {
            min: min_rooms,
            max: max_rooms,
        });
    }

    let num_rooms = rng.range_i32(min_rooms as i32, max_rooms as i32) as usize;
    let forbidden: Coord = entry.delta();

    let mut map = DungeonMap {
        rooms: HashMap::new(),
        explored: HashSet::new(),
        entry_direction: entry,
        num_rooms,
        current: (0, 0),
    };

    let mut digger: Coord = (0, 0);
    map.rooms
        .insert(digger, Room::populate(ROOM_WIDTH, ROOM_HEIGHT, registry, rng)?);
    map.explored.insert(digger);

    // Forced first corridor away from the entrance.
    let (dx, dy) = entry.opposite().delta();
    digger = (digger.0 + dx, digger.1 + dy);
    map.rooms
        .insert(digger, Room::populate(ROOM_WIDTH, ROOM_HEIGHT, registry, rng)?);

    let budget = num_rooms.saturating_mul(WALK_STEP_LIMIT_PER_ROOM);
    let mut steps = 0usize;
    while map.rooms.len() < num_rooms {
        steps += 1;
        if steps > budget {
            return Err(GenerationError::WalkBudgetExhausted {
                placed: map.rooms.len(),
                requested: num_rooms,
            });
        }

        let dir = Direction::ALL[rng.rn2(4) as usize];
        let (dx, dy) = dir.delta();
        let candidate = (digger.0 + dx, digger.1 + dy);

        // The reserved exit tile: re-roll without moving.
        if candidate == forbidden {
            continue;
        }

        if !map.rooms.contains_key(&candidate) {
            map.rooms
                .insert(candidate, Room::populate(ROOM_WIDTH, ROOM_HEIGHT, registry, rng)?);
        }
        digger = candidate;
    }

    Ok(map)
}
