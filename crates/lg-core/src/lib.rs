//! lg-core: Core game logic for Legacy
//!
//! Turn-based combat resolution and procedural dungeon generation for a 2D
//! dungeon RPG. This crate contains game logic with no I/O dependencies;
//! rendering, input handling and content-file loading live in host crates
//! and talk to the core through the `ContentRegistry` and the types
//! exported here.

pub mod combat;
pub mod content;
pub mod dungeon;
pub mod enemy;
pub mod genome;
pub mod hero;
pub mod item;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
