use crate::error::{GameError, GameResult};
use crate::types::DamageType;

pub const DEFAULT_CRIT_CHANCE: f64 = 0.05;
pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;

/// Offensive and defensive numbers for one combatant.
///
/// Bonuses accumulate from equipment and level-ups; totals never drop below
/// zero even if a bonus is negative.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatStats {
    base_attack: i32,
    base_defense: i32,
    bonus_attack: i32,
    bonus_defense: i32,
    crit_chance: f64,
    crit_multiplier: f64,
    damage_type: DamageType,
}

impl CombatStats {
    pub fn new(attack: i32, defense: i32, damage_type: DamageType) -> GameResult<Self> {
        Self::with_crit(attack, defense, DEFAULT_CRIT_CHANCE, DEFAULT_CRIT_MULTIPLIER, damage_type)
    }

    pub fn with_crit(
        attack: i32,
        defense: i32,
        crit_chance: f64,
        crit_multiplier: f64,
        damage_type: DamageType,
    ) -> GameResult<Self> {
        if attack < 0 || defense < 0 {
            return Err(GameError::argument(format!(
                "attack and defense must not be negative, got {attack}/{defense}"
            )));
        }
        if !(0.0..=1.0).contains(&crit_chance) {
            return Err(GameError::argument(format!("crit chance {crit_chance} is outside [0, 1]")));
        }
        if crit_multiplier < 1.0 {
            return Err(GameError::argument(format!(
                "crit multiplier {crit_multiplier} must be at least 1"
            )));
        }
        Ok(Self {
            base_attack: attack,
            base_defense: defense,
            bonus_attack: 0,
            bonus_defense: 0,
            crit_chance,
            crit_multiplier,
            damage_type,
        })
    }

    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    pub fn bonus_attack(&self) -> i32 {
        self.bonus_attack
    }

    pub fn bonus_defense(&self) -> i32 {
        self.bonus_defense
    }

    pub fn total_attack(&self) -> i32 {
        (self.base_attack + self.bonus_attack).max(0)
    }

    pub fn total_defense(&self) -> i32 {
        (self.base_defense + self.bonus_defense).max(0)
    }

    pub fn crit_chance(&self) -> f64 {
        self.crit_chance
    }

    pub fn crit_multiplier(&self) -> f64 {
        self.crit_multiplier
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    pub fn add_bonus_attack(&mut self, amount: i32) {
        self.bonus_attack += amount;
    }

    pub fn add_bonus_defense(&mut self, amount: i32) {
        self.bonus_defense += amount;
    }

    pub(crate) fn grow_base(&mut self, attack: i32, defense: i32) {
        self.base_attack += attack;
        self.base_defense += defense;
    }
}
