//! Attack resolution.
//!
//! Computes one attack's outcome from stat-derived probabilities. RNG draws
//! happen in a fixed order - hit roll, damage roll, then the crit roll for
//! normal attacks - so outcomes reproduce under a fixed seed.

use super::{AttackOutcome, AttackResult, AttackType, Combatant};
use crate::consts::BRAVE_HEALTH_THRESHOLD;
use crate::genome::{StatId, TraitId};
use crate::rng::GameRng;

/// Chance (percent) that the attack lands, before the 1..=100 roll.
///
/// Values outside 1..=100 are not clamped: they degenerate to a guaranteed
/// hit or miss against the roll.
fn hit_chance(attacker: &dyn Combatant, defender: &dyn Combatant, attack_type: AttackType) -> i32 {
    90 + 2 * attacker.stat(StatId::Dexterity) - defender.stat(StatId::Dexterity)
        + attack_type.hit_modifier()
}

/// Resolve a single attack.
///
/// A miss consumes exactly one RNG draw and deals zero damage. On a hit the
/// weapon's damage roll is boosted by half the attacker's Strength, by the
/// Brave trait when the attacker is below the low-health threshold, and by
/// the attack type's damage modifier. Only normal attacks roll for a crit.
pub fn resolve_attack(
    attacker: &dyn Combatant,
    defender: &dyn Combatant,
    attack_type: AttackType,
    rng: &mut GameRng,
) -> AttackOutcome {
    let chance = hit_chance(attacker, defender, attack_type);
    if rng.rnd(100) as i32 > chance {
        return AttackOutcome {
            result: AttackResult::Miss,
            message: format!("{} missed!", attacker.name()),
        };
    }

    let (min_dmg, max_dmg) = attacker.weapon().base_damage;
    let base_damage = rng.range_i32(min_dmg, max_dmg);
    let strength_bonus = attacker.stat(StatId::Strength) / 2;

    let mut prefix = attack_type.message_prefix().to_string();
    let mut total = (base_damage + strength_bonus) as f64;

    // Brave combatants hit harder when near death.
    if attacker.has_trait(TraitId::Brave)
        && (attacker.health() as f64) < BRAVE_HEALTH_THRESHOLD * attacker.max_health() as f64
    {
        total *= 1.0 + attacker.trait_magnitude(TraitId::Brave);
        prefix.push_str("Bravely! ");
    }

    let damage = (total * attack_type.damage_modifier()) as i32;

    if attack_type.can_crit() {
        let weapon = attacker.weapon();
        let crit_chance = weapon.crit_chance * 100.0 + attacker.stat(StatId::Luck) as f64;
        if rng.rnd(100) as f64 <= crit_chance {
            let damage = (damage as f64 * weapon.crit_multiplier) as i32;
            return AttackOutcome {
                result: AttackResult::Crit { damage },
                message: format!(
                    "Critical Hit! {} deals {} damage!",
                    attacker.name(),
                    damage
                ),
            };
        }
    }

    AttackOutcome {
        result: AttackResult::Hit { damage },
        message: format!("{}{} deals {} damage!", prefix, attacker.name(), damage),
    }
}
