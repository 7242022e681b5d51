//! End-to-end combat tests over the public API.

use std::sync::Arc;

use proptest::prelude::*;

use lg_core::GameRng;
use lg_core::combat::{
    AttackType, Encounter, EncounterPhase, PlayerAction, TickOutcome, TurnOwner, resolve_attack,
};
use lg_core::content::ContentRegistry;
use lg_core::dungeon::Room;
use lg_core::enemy::{EnemyArchetype, ItemDrop, Position, spawn_enemy};
use lg_core::genome::{Genome, StatId};
use lg_core::hero::Hero;
use lg_core::item::{Item, Weapon};

fn sample_registry() -> ContentRegistry {
    let mut registry = ContentRegistry::new();
    registry.add_weapon("claws", Weapon::new("Claws", (2, 5), 0.05, 1.5));
    registry.add_weapon("club", Weapon::new("Club", (3, 8), 0.02, 2.0));
    registry.add_item(Item::new("goblin_ear", "Goblin Ear", 2));
    registry.add_item(Item::consumable("potion_small", "Small Potion", 10, 25));
    registry.add_archetype(
        "goblin",
        EnemyArchetype {
            name: "goblin".to_string(),
            health_range: (8, 14),
            strength_range: (2, 4),
            dexterity_range: (3, 6),
            speed_range: (1.0, 2.5),
            sight_radius: 150,
            gold_drop_range: (1, 5),
            item_drops: vec![
                ItemDrop {
                    item_id: "goblin_ear".to_string(),
                    drop_chance: 0.25,
                },
                ItemDrop {
                    item_id: "potion_small".to_string(),
                    drop_chance: 0.1,
                },
            ],
            weapon_id: "claws".to_string(),
        },
    );
    registry.add_archetype(
        "orc",
        EnemyArchetype {
            name: "orc".to_string(),
            health_range: (15, 25),
            strength_range: (4, 8),
            dexterity_range: (2, 5),
            speed_range: (0.8, 1.6),
            sight_radius: 180,
            gold_drop_range: (4, 12),
            item_drops: Vec::new(),
            weapon_id: "club".to_string(),
        },
    );
    registry.validate().expect("sample content is consistent");
    registry
}

fn sample_hero() -> Hero {
    let genome = Genome::from_stats([
        (StatId::Strength, 6),
        (StatId::Dexterity, 5),
        (StatId::Intelligence, 4),
        (StatId::Luck, 2),
    ])
    .unwrap();
    Hero::new(
        "Aldric",
        "The Bold",
        genome,
        Arc::new(Weapon::new("Rusty Sword", (4, 9), 0.1, 2.0)),
    )
}

fn hero_with(strength: i32, dexterity: i32, weapon: Weapon) -> Hero {
    let genome =
        Genome::from_stats([(StatId::Strength, strength), (StatId::Dexterity, dexterity)]).unwrap();
    Hero::new("Aldric", "The Bold", genome, Arc::new(weapon))
}

/// A full fight against one goblin always reaches a terminal state, and
/// health never leaves its bounds along the way.
#[test]
fn encounter_runs_to_termination() {
    let registry = sample_registry();

    for seed in 0..30u64 {
        let mut rng = GameRng::new(seed);
        let mut hero = sample_hero();
        let mut room = Room::populate(800, 600, &registry, &mut rng).unwrap();
        let starting_enemies = room.enemies.len();

        let mut encounter = Encounter::new(&room, 0);
        let mut outcome = TickOutcome::Continue;

        for _ in 0..500 {
            if encounter.phase() == EncounterPhase::Active
                && encounter.turn() == TurnOwner::Player
                && !hero.is_dead()
                && !room.enemies[0].is_dead()
            {
                encounter.player_action(PlayerAction::Attack, &mut hero, &mut room, &mut rng);
            }
            outcome = encounter.tick(&mut hero, &mut room, &registry, &mut rng);

            assert!(hero.health >= 0 && hero.health <= hero.max_health);
            for enemy in &room.enemies {
                assert!(enemy.health >= 0 && enemy.health <= enemy.max_health);
            }

            match outcome {
                TickOutcome::Continue => {}
                TickOutcome::EnemyDefeated | TickOutcome::AwaitingAcknowledgment => break,
                TickOutcome::HeroDefeated => break,
            }
        }

        match outcome {
            TickOutcome::EnemyDefeated | TickOutcome::AwaitingAcknowledgment => {
                assert_eq!(room.enemies.len(), starting_enemies - 1);
                assert!(encounter.acknowledge());
            }
            TickOutcome::HeroDefeated => assert!(hero.is_dead()),
            TickOutcome::Continue => panic!("fight did not terminate (seed {seed})"),
        }
    }
}

/// Victory gold always lands within the enemy's configured inclusive range
/// (plus the room-clear bonus when the room empties).
#[test]
fn victory_gold_within_drop_range() {
    let registry = sample_registry();

    for seed in 0..50u64 {
        let mut rng = GameRng::new(seed);
        let mut hero = hero_with(0, 60, Weapon::new("Greatsword", (500, 500), 0.0, 2.0));
        let mut room = Room::empty(800, 600);
        room.enemies
            .push(spawn_enemy("orc", Position::new(400, 300), &registry, &mut rng).unwrap());

        let mut encounter = Encounter::new(&room, 0);
        encounter.player_action(PlayerAction::Attack, &mut hero, &mut room, &mut rng);
        let outcome = encounter.tick(&mut hero, &mut room, &registry, &mut rng);

        assert_eq!(outcome, TickOutcome::EnemyDefeated);
        // Orc gold 4..=12 plus clear bonus 10..=30.
        assert!(hero.gold >= 14 && hero.gold <= 42, "gold {}", hero.gold);
        assert!(room.cleared);
    }
}

proptest! {
    /// Power attacks are never tagged Crit, whatever the stats or seed.
    #[test]
    fn power_attacks_never_crit(
        seed in any::<u64>(),
        strength in 0i32..40,
        dexterity in 0i32..40,
        crit_chance in 0.0f64..=1.0,
    ) {
        let attacker = hero_with(strength, dexterity, Weapon::new("Axe", (5, 12), crit_chance, 3.0));
        let defender = hero_with(0, 5, Weapon::new("Stick", (1, 2), 0.0, 1.0));
        let mut rng = GameRng::new(seed);
        let outcome = resolve_attack(&attacker, &defender, AttackType::Power, &mut rng);
        prop_assert!(!outcome.result.is_crit());
    }

    /// Resolved damage is never negative, for any attack type.
    #[test]
    fn damage_is_never_negative(
        seed in any::<u64>(),
        strength in 0i32..40,
        dexterity in 0i32..40,
        min_dmg in 0i32..20,
        spread in 0i32..15,
    ) {
        let attacker = hero_with(strength, dexterity, Weapon::new("Axe", (min_dmg, min_dmg + spread), 0.2, 2.5));
        let defender = hero_with(0, 10, Weapon::new("Stick", (1, 2), 0.0, 1.0));
        let mut rng = GameRng::new(seed);
        for attack_type in [AttackType::Normal, AttackType::Power, AttackType::ViciousBite] {
            let outcome = resolve_attack(&attacker, &defender, attack_type, &mut rng);
            prop_assert!(outcome.damage() >= 0);
        }
    }

    /// A miss always reports zero damage.
    #[test]
    fn misses_deal_zero_damage(seed in any::<u64>()) {
        let attacker = hero_with(10, 0, Weapon::new("Axe", (5, 12), 0.5, 2.0));
        let defender = hero_with(0, 200, Weapon::new("Stick", (1, 2), 0.0, 1.0));
        let mut rng = GameRng::new(seed);
        let outcome = resolve_attack(&attacker, &defender, AttackType::Normal, &mut rng);
        prop_assert!(outcome.result.is_miss());
        prop_assert_eq!(outcome.damage(), 0);
    }
}
