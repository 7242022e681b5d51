//! Turn-based encounter state machine.
//!
//! Drives one hero-vs-enemy fight: the player/enemy turn cycle, charge
//! telegraphs, defense, victory rewards and defeat detection. The check
//! order inside `tick` decides precedence when several terminal conditions
//! hold at once and must not be reordered.

use serde::{Deserialize, Serialize};

use super::{AttackType, resolve_attack};
use crate::consts::{ENEMY_ATTACK_CHANCE, ROOM_CLEAR_BONUS_GOLD};
use crate::content::ContentRegistry;
use crate::dungeon::Room;
use crate::enemy::Enemy;
use crate::hero::Hero;
use crate::rng::GameRng;

/// Combat phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Active,
    /// Enemy defeated; frozen until the host acknowledges
    Victory,
}

/// Whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnOwner {
    #[default]
    Player,
    Enemy,
}

/// The player's one action for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    PowerAttack,
    Defend,
}

/// What a tick produced, for the host state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Combat continues
    Continue,
    /// Victory phase is showing; waiting for acknowledgment
    AwaitingAcknowledgment,
    /// The hero died; transition to game over
    HeroDefeated,
    /// The enemy died this tick; rewards were granted
    EnemyDefeated,
}

/// One fight against one of a room's enemies.
///
/// Hosts call `player_action` when input arrives on the player's turn and
/// `tick` once per frame. The enemy turn is meant to resolve after the
/// `ENEMY_TURN_DELAY_MS` pacing pause, which the host applies; the core
/// never sleeps.
#[derive(Debug)]
pub struct Encounter {
    /// Index of the active enemy in the room's enemy list
    active: usize,
    phase: EncounterPhase,
    turn: TurnOwner,
    log: Vec<String>,
}

impl Encounter {
    /// Open combat against `room.enemies[enemy_index]`.
    pub fn new(room: &Room, enemy_index: usize) -> Self {
        let mut log = Vec::new();
        if let Some(enemy) = room.enemies.get(enemy_index) {
            log.push(format!("You encounter a {}!", enemy.name));
        }
        Self {
            active: enemy_index,
            phase: EncounterPhase::Active,
            turn: TurnOwner::Player,
            log,
        }
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn turn(&self) -> TurnOwner {
        self.turn
    }

    /// Combat log, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The enemy this encounter is fighting; None once it has been
    /// defeated and removed from the room.
    pub fn active_enemy<'a>(&self, room: &'a Room) -> Option<&'a Enemy> {
        if self.phase == EncounterPhase::Victory {
            return None;
        }
        room.enemies.get(self.active)
    }

    /// Handle the player's one action for the turn. Returns false (and does
    /// nothing) when it is not the player's turn or combat is frozen.
    pub fn player_action(
        &mut self,
        action: PlayerAction,
        hero: &mut Hero,
        room: &mut Room,
        rng: &mut GameRng,
    ) -> bool {
        if self.phase != EncounterPhase::Active || self.turn != TurnOwner::Player {
            return false;
        }
        match action {
            PlayerAction::Attack | PlayerAction::PowerAttack => {
                let attack_type = match action {
                    PlayerAction::Attack => AttackType::Normal,
                    _ => AttackType::Power,
                };
                let outcome =
                    resolve_attack(&*hero, &room.enemies[self.active], attack_type, rng);
                room.enemies[self.active].take_damage(outcome.damage());
                self.log.push(outcome.message);
            }
            PlayerAction::Defend => {
                hero.is_defending = true;
                self.log
                    .push(format!("{} takes a defensive stance.", hero.first_name));
            }
        }
        self.turn = TurnOwner::Enemy;
        true
    }

    /// Advance combat by one frame.
    ///
    /// Check order (load-bearing): victory freeze, then hero defeat, then
    /// enemy defeat, then the enemy turn. A hero and enemy both at zero
    /// health on the same tick is a hero defeat.
    pub fn tick(
        &mut self,
        hero: &mut Hero,
        room: &mut Room,
        registry: &ContentRegistry,
        rng: &mut GameRng,
    ) -> TickOutcome {
        if self.phase == EncounterPhase::Victory {
            return TickOutcome::AwaitingAcknowledgment;
        }

        if hero.is_dead() {
            self.log.push("You have been defeated!".to_string());
            return TickOutcome::HeroDefeated;
        }

        if room.enemies[self.active].is_dead() {
            self.award_victory(hero, room, registry, rng);
            return TickOutcome::EnemyDefeated;
        }

        if self.turn == TurnOwner::Enemy {
            self.enemy_turn(hero, room, rng);
        }

        TickOutcome::Continue
    }

    /// Leave the victory phase. Returns false unless victory was showing.
    pub fn acknowledge(&mut self) -> bool {
        self.phase == EncounterPhase::Victory
    }

    /// Gold, drop-table rolls, and the room-clear bonus for a kill.
    fn award_victory(
        &mut self,
        hero: &mut Hero,
        room: &mut Room,
        registry: &ContentRegistry,
        rng: &mut GameRng,
    ) {
        self.phase = EncounterPhase::Victory;

        let enemy = room.enemies.remove(self.active);
        let gold = rng.range_i32(enemy.gold_drop_range.0, enemy.gold_drop_range.1);
        hero.gold += gold;
        self.log.push(format!(
            "The {} is defeated! You find {} gold on them.",
            enemy.name, gold
        ));

        // Each drop entry is an independent roll, in table order.
        for drop in &enemy.item_drops {
            if rng.rand_f64() < drop.drop_chance {
                hero.inventory.push(drop.item_id.clone());
                if let Some(item) = registry.item(&drop.item_id) {
                    self.log.push(format!("You find a {}!", item.name));
                }
            }
        }

        if room.enemies.is_empty() {
            room.cleared = true;
            let (lo, hi) = ROOM_CLEAR_BONUS_GOLD;
            let extra = rng.range_i32(lo, hi);
            hero.gold += extra;
            self.log.push(format!(
                "You clear the room and find an additional {} gold!",
                extra
            ));
        }
    }

    /// Resolve the enemy's turn: unleash a charged bite, or pick between a
    /// normal attack and telegraphing a charge.
    fn enemy_turn(&mut self, hero: &mut Hero, room: &mut Room, rng: &mut GameRng) {
        let (mut damage, mut message) = if room.enemies[self.active].is_charging_attack {
            room.enemies[self.active].is_charging_attack = false;
            let outcome = resolve_attack(
                &room.enemies[self.active],
                &*hero,
                AttackType::ViciousBite,
                rng,
            );
            (outcome.damage(), outcome.message)
        } else if rng.rnd(100) as i32 <= ENEMY_ATTACK_CHANCE {
            let outcome = resolve_attack(
                &room.enemies[self.active],
                &*hero,
                AttackType::Normal,
                rng,
            );
            (outcome.damage(), outcome.message)
        } else {
            room.enemies[self.active].is_charging_attack = true;
            (
                0,
                format!(
                    "The {} growls, preparing a vicious bite!",
                    room.enemies[self.active].name
                ),
            )
        };

        if hero.is_defending {
            damage /= 2;
            message.push_str(" (Blocked!)");
            hero.is_defending = false;
        }
        self.log.push(message);
        hero.take_damage(damage);

        if !room.enemies[self.active].is_charging_attack {
            self.turn = TurnOwner::Player;
        }
    }
}
