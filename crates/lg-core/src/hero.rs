//! The player character.

use std::sync::Arc;

use crate::combat::Combatant;
use crate::consts::PLAYER_STARTING_HEALTH;
use crate::genome::{Genome, StatId, TraitId};
use crate::item::Weapon;

/// The hero.
///
/// Stats come from explicit allocation at character creation rather than
/// randomization. Health mutators keep `0 <= health <= max_health`.
#[derive(Debug, Clone)]
pub struct Hero {
    pub first_name: String,
    pub family_name: String,
    pub health: i32,
    pub max_health: i32,
    pub gold: i32,
    pub experience: i32,
    /// Item ids, resolved through the content registry on use
    pub inventory: Vec<String>,
    pub genome: Genome,
    pub weapon: Arc<Weapon>,
    /// Defensive stance; consumed by the next enemy attack
    pub is_defending: bool,
}

impl Hero {
    pub fn new(first_name: &str, family_name: &str, genome: Genome, weapon: Arc<Weapon>) -> Self {
        Self {
            first_name: first_name.to_string(),
            family_name: family_name.to_string(),
            health: PLAYER_STARTING_HEALTH,
            max_health: PLAYER_STARTING_HEALTH,
            gold: 0,
            experience: 0,
            inventory: Vec::new(),
            genome,
            weapon,
            is_defending: false,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }

    /// Apply damage, clamped at 0.
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    /// Restore health, clamped at max.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        &self.first_name
    }

    fn stat(&self, stat: StatId) -> i32 {
        self.genome.stat(stat)
    }

    fn has_trait(&self, trait_id: TraitId) -> bool {
        self.genome.has_trait(trait_id)
    }

    fn trait_magnitude(&self, trait_id: TraitId) -> f64 {
        self.genome.trait_magnitude(trait_id)
    }

    fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn max_health(&self) -> i32 {
        self.max_health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hero() -> Hero {
        let genome = Genome::from_stats([(StatId::Strength, 5), (StatId::Dexterity, 5)]).unwrap();
        Hero::new(
            "Aldric",
            "The Bold",
            genome,
            Arc::new(Weapon::new("Rusty Sword", (3, 6), 0.05, 1.5)),
        )
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut hero = test_hero();
        hero.take_damage(hero.max_health + 50);
        assert_eq!(hero.health, 0);
        assert!(hero.is_dead());
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut hero = test_hero();
        hero.take_damage(30);
        hero.heal(1000);
        assert_eq!(hero.health, hero.max_health);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(test_hero().full_name(), "Aldric The Bold");
    }

    #[test]
    fn test_combatant_view() {
        let hero = test_hero();
        assert_eq!(Combatant::name(&hero), "Aldric");
        assert_eq!(hero.stat(StatId::Strength), 5);
        assert_eq!(hero.stat(StatId::Luck), 0);
    }
}
