//! Damage formula and the attack resolution built on it.
//!
//! The formula runs in a fixed order:
//!
//! 1. attacker total attack
//! 2. times the attacker's status attack modifier
//! 3. times the crit multiplier on a critical hit (players only)
//! 4. times the defender's status defense modifier
//! 5. minus the defender's defense, raised by half while shielded
//! 6. rounded half up and clamped to [`MINIMUM_DAMAGE`]

use crate::entities::{Enemy, Player};
use crate::error::GameResult;
use crate::rng::GameRng;
use crate::types::round_half_up;

use super::result::AttackResult;

pub const MINIMUM_DAMAGE: i32 = 1;
pub const SHIELD_DEFENSE_FACTOR: f64 = 1.5;

/// Every number the formula reads, already gathered from both combatants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageInput {
    pub attack: i32,
    pub attack_modifier: f64,
    pub crit_multiplier: Option<f64>,
    pub defense_modifier: f64,
    pub defense: i32,
    pub shielded: bool,
}

impl DamageInput {
    /// Plain attack against plain defense with no statuses or crit.
    pub fn plain(attack: i32, defense: i32) -> Self {
        Self {
            attack,
            attack_modifier: 1.0,
            crit_multiplier: None,
            defense_modifier: 1.0,
            defense,
            shielded: false,
        }
    }
}

pub fn calculate_damage(input: &DamageInput) -> i32 {
    let mut damage = f64::from(input.attack) * input.attack_modifier;
    if let Some(multiplier) = input.crit_multiplier {
        damage *= multiplier;
    }
    damage *= input.defense_modifier;

    let mut defense = f64::from(input.defense);
    if input.shielded {
        defense *= SHIELD_DEFENSE_FACTOR;
    }
    round_half_up(damage - defense).max(MINIMUM_DAMAGE)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DamageCalculator;

impl DamageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Rolls the crit, applies the hit to `enemy`, and reports it.
    pub fn player_attack(
        &self,
        rng: &mut GameRng,
        player: &Player,
        enemy: &mut Enemy,
    ) -> GameResult<AttackResult> {
        let critical = rng.chance(player.stats().crit_chance());
        let input = DamageInput {
            attack: player.effective_attack(),
            attack_modifier: player.statuses().attack_modifier(),
            crit_multiplier: critical.then(|| player.stats().crit_multiplier()),
            defense_modifier: enemy.statuses().defense_modifier(),
            defense: enemy.stats().total_defense(),
            shielded: enemy.statuses().is_shielded(),
        };
        let damage = calculate_damage(&input);
        let absorbed = enemy.health_mut().take_damage(damage)?;
        Ok(AttackResult {
            attacker: player.id().clone(),
            defender: enemy.id().clone(),
            damage,
            absorbed,
            critical,
            killed: !enemy.is_alive(),
            by_player: true,
        })
    }

    /// Enemies never crit, so no entropy is drawn.
    pub fn enemy_attack(&self, enemy: &Enemy, player: &mut Player) -> GameResult<AttackResult> {
        let input = DamageInput {
            attack: enemy.stats().total_attack(),
            attack_modifier: enemy.statuses().attack_modifier(),
            crit_multiplier: None,
            defense_modifier: player.statuses().defense_modifier(),
            defense: player.effective_defense(),
            shielded: player.statuses().is_shielded(),
        };
        let damage = calculate_damage(&input);
        let absorbed = player.health_mut().take_damage(damage)?;
        Ok(AttackResult {
            attacker: enemy.id().clone(),
            defender: player.id().clone(),
            damage,
            absorbed,
            critical: false,
            killed: !player.is_alive(),
            by_player: false,
        })
    }
}
