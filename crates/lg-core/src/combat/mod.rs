//! Combat system
//!
//! Attack resolution and the turn-based encounter state machine.

mod encounter;
mod resolve;

pub use encounter::{Encounter, EncounterPhase, PlayerAction, TickOutcome, TurnOwner};
pub use resolve::resolve_attack;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::genome::{StatId, TraitId};
use crate::item::Weapon;

/// How an attack is delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum AttackType {
    #[default]
    Normal = 0,
    /// Harder-hitting but less accurate player attack
    Power = 1,
    /// Telegraphed enemy special; lands the turn after its telegraph
    ViciousBite = 2,
}

impl AttackType {
    /// Hit-chance modifier applied before the 1..=100 roll.
    pub const fn hit_modifier(&self) -> i32 {
        match self {
            AttackType::Normal => 0,
            AttackType::Power => -20,
            AttackType::ViciousBite => -40,
        }
    }

    /// Damage multiplier applied after the strength bonus.
    pub const fn damage_modifier(&self) -> f64 {
        match self {
            AttackType::Normal => 1.0,
            AttackType::Power => 1.5,
            AttackType::ViciousBite => 2.5,
        }
    }

    /// Message prefix for landed hits.
    pub const fn message_prefix(&self) -> &'static str {
        match self {
            AttackType::Normal => "",
            AttackType::Power => "A powerful blow! ",
            AttackType::ViciousBite => "Vicious Bite! ",
        }
    }

    /// Only normal attacks can critically hit.
    pub const fn can_crit(&self) -> bool {
        matches!(self, AttackType::Normal)
    }
}

/// Tagged result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    Miss,
    Hit { damage: i32 },
    Crit { damage: i32 },
}

impl AttackResult {
    pub const fn damage(&self) -> i32 {
        match self {
            AttackResult::Miss => 0,
            AttackResult::Hit { damage } | AttackResult::Crit { damage } => *damage,
        }
    }

    pub const fn is_miss(&self) -> bool {
        matches!(self, AttackResult::Miss)
    }

    pub const fn is_crit(&self) -> bool {
        matches!(self, AttackResult::Crit { .. })
    }
}

/// One resolved attack: the tagged result plus a display message.
///
/// Pure data; the resolver's only side effect is RNG consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub result: AttackResult,
    pub message: String,
}

impl AttackOutcome {
    pub const fn damage(&self) -> i32 {
        self.result.damage()
    }
}

/// Uniform stat/trait/equipment access for anything that can fight.
///
/// Implemented by `Hero` and `Enemy`; the resolver sees only this
/// interface. Optional stats (Luck, Intelligence) read 0 when absent;
/// required stats are guaranteed present by construction.
pub trait Combatant {
    fn name(&self) -> &str;
    fn stat(&self, stat: StatId) -> i32;
    fn has_trait(&self, trait_id: TraitId) -> bool;
    /// Effect magnitude of a held trait; 0.0 when absent.
    fn trait_magnitude(&self, trait_id: TraitId) -> f64;
    fn weapon(&self) -> &Weapon;
    fn health(&self) -> i32;
    fn max_health(&self) -> i32;
}
