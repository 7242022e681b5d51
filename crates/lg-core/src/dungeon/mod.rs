//! Dungeon system
//!
//! The room grid, procedural generation, room population and the persisted
//! dungeon record.

mod generation;
mod record;
mod room;

pub use generation::{GenerationError, generate};
pub use record::{DungeonRecord, EnemySnapshot, RoomRecord};
pub use room::Room;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Grid coordinates of a room
pub type Coord = (i32, i32);

/// Cardinal directions on the room grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// All directions, in draw order for the walk's direction roll.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Grid delta for one step in this direction (north is -y).
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// The generated room grid.
///
/// Exactly one tile next to the origin is reserved as the exit back to the
/// overworld - one step in `entry_direction` - and never holds a room; the
/// tile opposite it always does, so the player is never trapped against
/// the exit.
#[derive(Debug)]
pub struct DungeonMap {
    pub(crate) rooms: HashMap<Coord, Room>,
    pub(crate) explored: HashSet<Coord>,
    pub(crate) entry_direction: Direction,
    pub(crate) num_rooms: usize,
    pub(crate) current: Coord,
}

impl DungeonMap {
    pub fn rooms(&self) -> &HashMap<Coord, Room> {
        &self.rooms
    }

    pub fn entry_direction(&self) -> Direction {
        self.entry_direction
    }

    /// Room count the generator was asked for.
    pub fn num_rooms(&self) -> usize {
        self.num_rooms
    }

    /// The reserved exit tile, one step in the entry direction from origin.
    pub fn exit_tile(&self) -> Coord {
        self.entry_direction.delta()
    }

    pub fn room(&self, coord: Coord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    pub fn explored(&self) -> &HashSet<Coord> {
        &self.explored
    }

    pub fn is_explored(&self, coord: Coord) -> bool {
        self.explored.contains(&coord)
    }

    pub fn current_coords(&self) -> Coord {
        self.current
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.current)
    }

    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(&self.current)
    }

    /// Move the cursor one room over, marking the destination explored.
    /// Returns false when no room lies that way (the dungeon edge, or the
    /// reserved exit tile - the host treats that as leaving the dungeon).
    pub fn move_to(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let target = (self.current.0 + dx, self.current.1 + dy);
        if !self.rooms.contains_key(&target) {
            return false;
        }
        self.current = target;
        self.explored.insert(target);
        true
    }

    /// Re-seat the cursor after loading from a record. Returns false when
    /// the coordinate holds no room.
    pub fn set_current(&mut self, coord: Coord) -> bool {
        if !self.rooms.contains_key(&coord) {
            return false;
        }
        self.current = coord;
        true
    }
}
