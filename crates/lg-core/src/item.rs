//! Item and weapon templates.

use serde::{Deserialize, Serialize};

use crate::hero::Hero;

/// An equippable weapon template.
///
/// Immutable once constructed; combatants equipping the same template share
/// one instance behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Inclusive (min, max) damage range
    pub base_damage: (i32, i32),
    /// Chance to critically hit, 0.0..=1.0
    pub crit_chance: f64,
    /// Damage multiplier on a critical hit, >= 1.0
    pub crit_multiplier: f64,
}

impl Weapon {
    pub fn new(name: &str, base_damage: (i32, i32), crit_chance: f64, crit_multiplier: f64) -> Self {
        Self {
            name: name.to_string(),
            base_damage,
            crit_chance,
            crit_multiplier,
        }
    }
}

/// Effect payload for consumable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEffect {
    /// Health restored on use
    pub heal_amount: i32,
}

/// A content-table item: loot, consumables, sellables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Base gold value
    pub value: i32,
    /// Present on consumables
    pub effect: Option<ItemEffect>,
}

impl Item {
    pub fn new(id: &str, name: &str, value: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value,
            effect: None,
        }
    }

    pub fn consumable(id: &str, name: &str, value: i32, heal_amount: i32) -> Self {
        Self {
            effect: Some(ItemEffect { heal_amount }),
            ..Self::new(id, name, value)
        }
    }

    /// Apply a consumable's effect to the hero, clamped to max health.
    /// Returns false when the item has no usable effect.
    pub fn consume(&self, hero: &mut Hero) -> bool {
        match self.effect {
            Some(effect) => {
                hero.heal(effect.heal_amount);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Genome, StatId};
    use std::sync::Arc;

    fn test_hero() -> Hero {
        let genome = Genome::from_stats([(StatId::Strength, 5), (StatId::Dexterity, 5)]).unwrap();
        let weapon = Arc::new(Weapon::new("Rusty Sword", (3, 6), 0.05, 1.5));
        Hero::new("Aldric", "The Bold", genome, weapon)
    }

    #[test]
    fn test_consume_heals_clamped() {
        let mut hero = test_hero();
        hero.health = hero.max_health - 10;

        let potion = Item::consumable("potion_small", "Small Potion", 10, 25);
        assert!(potion.consume(&mut hero));
        assert_eq!(hero.health, hero.max_health);
    }

    #[test]
    fn test_consume_without_effect() {
        let mut hero = test_hero();
        let trinket = Item::new("goblin_ear", "Goblin Ear", 2);
        assert!(!trinket.consume(&mut hero));
    }
}
