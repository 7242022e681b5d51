//! Inheritable stats and traits shared by every combatant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::content::ContentError;

/// Numeric stat identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum StatId {
    Strength = 0,
    Dexterity = 1,
    Intelligence = 2,
    Luck = 3,
}

impl StatId {
    /// Stats every combatant must carry; the rest default to 0 when absent.
    pub const REQUIRED: [StatId; 2] = [StatId::Strength, StatId::Dexterity];

    /// Full name for display
    pub const fn name(&self) -> &'static str {
        match self {
            StatId::Strength => "Strength",
            StatId::Dexterity => "Dexterity",
            StatId::Intelligence => "Intelligence",
            StatId::Luck => "Luck",
        }
    }
}

/// Passive trait identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum TraitId {
    /// Bonus damage while near death
    Brave = 0,
    Cautious = 1,
    Avaricious = 2,
    Kind = 3,
    Clever = 4,
}

/// A combatant's stats and traits.
///
/// Stat lookups fall back to 0 only for the optional stats (Luck,
/// Intelligence); construction rejects a genome missing Strength or
/// Dexterity. Traits carry an effect magnitude (e.g. Brave 0.5 for +50%
/// damage when its condition holds); absent traits read as not held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genome {
    stats: HashMap<StatId, i32>,
    traits: HashMap<TraitId, f64>,
}

impl Genome {
    /// Build a validated genome.
    pub fn new(
        stats: HashMap<StatId, i32>,
        traits: HashMap<TraitId, f64>,
    ) -> Result<Self, ContentError> {
        for stat in StatId::REQUIRED {
            if !stats.contains_key(&stat) {
                return Err(ContentError::MissingStat { stat });
            }
        }
        Ok(Self { stats, traits })
    }

    /// Convenience constructor from stat pairs, no traits.
    pub fn from_stats<I>(stats: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (StatId, i32)>,
    {
        Self::new(stats.into_iter().collect(), HashMap::new())
    }

    /// Stat value; 0 when the (optional) stat is absent.
    pub fn stat(&self, stat: StatId) -> i32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    pub fn set_stat(&mut self, stat: StatId, value: i32) {
        self.stats.insert(stat, value);
    }

    pub fn has_trait(&self, trait_id: TraitId) -> bool {
        self.traits.contains_key(&trait_id)
    }

    /// Effect magnitude of a held trait; 0.0 when absent.
    pub fn trait_magnitude(&self, trait_id: TraitId) -> f64 {
        self.traits.get(&trait_id).copied().unwrap_or(0.0)
    }

    pub fn set_trait(&mut self, trait_id: TraitId, magnitude: f64) {
        self.traits.insert(trait_id, magnitude);
    }
}
