//! Core game constants for Legacy.

/// Default room interior size in pixels.
pub const ROOM_WIDTH: i32 = 800;
pub const ROOM_HEIGHT: i32 = 600;

/// Margin keeping enemy spawns away from room edges, in pixels.
pub const SPAWN_MARGIN: i32 = 50;

/// Upper bound on enemies rolled into a fresh room (lower bound is 1).
pub const MAX_ENEMIES_PER_ROOM: u32 = 3;

/// Starting (and maximum) player health.
pub const PLAYER_STARTING_HEALTH: i32 = 100;

/// Percent chance that an enemy attacks normally instead of telegraphing
/// its vicious bite.
pub const ENEMY_ATTACK_CHANCE: i32 = 75;

/// Bonus gold awarded for defeating a room's last enemy (inclusive range).
pub const ROOM_CLEAR_BONUS_GOLD: (i32, i32) = (10, 30);

/// Presentation pause before an enemy turn resolves, in milliseconds.
/// Purely a pacing device for hosts; the core never sleeps.
pub const ENEMY_TURN_DELAY_MS: u64 = 400;

/// Fraction of max health below which the Brave trait takes effect.
pub const BRAVE_HEALTH_THRESHOLD: f64 = 0.3;

/// Walk steps allowed per requested room before dungeon generation gives up.
pub const WALK_STEP_LIMIT_PER_ROOM: usize = 1024;
