use crate::components::{CombatStats, Health, StatusEffectTracker};
use crate::content::{
    ATTACK_PER_FLOOR, DEFENSE_PER_FLOOR, EnemyType, HEALTH_PER_FLOOR, get_enemy_stats,
};
use crate::error::GameResult;
use crate::types::{EntityId, scale_stat};

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    id: EntityId,
    kind: EnemyType,
    floor: u32,
    health: Health,
    stats: CombatStats,
    statuses: StatusEffectTracker,
}

impl Enemy {
    /// Catalog stats grown by `base + (floor - 1) * increment`.
    pub fn new(id: EntityId, kind: EnemyType, floor: u32) -> GameResult<Self> {
        Self::scaled(id, kind, floor, 1.0)
    }

    /// Catalog stats grown by floor and then multiplied by a difficulty factor.
    pub fn scaled(id: EntityId, kind: EnemyType, floor: u32, multiplier: f64) -> GameResult<Self> {
        let base = get_enemy_stats(kind);
        let depth = floor.saturating_sub(1) as i32;
        let health = base.health + depth * HEALTH_PER_FLOOR;
        let attack = base.attack + depth * ATTACK_PER_FLOOR;
        let defense = base.defense + depth * DEFENSE_PER_FLOOR;
        Self::with_stats(
            id,
            kind,
            floor,
            scale_stat(health, multiplier).max(1),
            scale_stat(attack, multiplier),
            scale_stat(defense, multiplier),
        )
    }

    /// Explicit stats, bypassing the catalog.
    pub fn with_stats(
        id: EntityId,
        kind: EnemyType,
        floor: u32,
        health: i32,
        attack: i32,
        defense: i32,
    ) -> GameResult<Self> {
        let damage_type = get_enemy_stats(kind).damage_type;
        Ok(Self {
            id,
            kind,
            floor,
            health: Health::new(health)?,
            stats: CombatStats::with_crit(attack, defense, 0.0, 1.0, damage_type)?,
            statuses: StatusEffectTracker::new(),
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> EnemyType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn is_boss(&self) -> bool {
        self.kind.is_boss()
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn statuses(&self) -> &StatusEffectTracker {
        &self.statuses
    }

    pub fn statuses_mut(&mut self) -> &mut StatusEffectTracker {
        &mut self.statuses
    }

    pub fn gold_reward(&self) -> i32 {
        let floor = self.floor as i32;
        if self.is_boss() { 100 + floor * 50 } else { 5 + floor * 3 }
    }

    pub fn experience_reward(&self) -> i32 {
        let floor = self.floor as i32;
        if self.is_boss() { 50 + floor * 20 } else { 10 + floor * 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> EntityId {
        EntityId::new(value).unwrap()
    }

    #[test]
    fn stats_grow_linearly_with_floor() {
        let first = Enemy::new(id("rat_1"), EnemyType::Rat, 1).unwrap();
        let fourth = Enemy::new(id("rat_2"), EnemyType::Rat, 4).unwrap();
        assert_eq!(first.health().maximum(), 15);
        assert_eq!(fourth.health().maximum(), 15 + 3 * HEALTH_PER_FLOOR);
        assert_eq!(fourth.stats().total_attack(), 5 + 3 * ATTACK_PER_FLOOR);
        assert_eq!(fourth.stats().total_defense(), 1 + 3 * DEFENSE_PER_FLOOR);
    }

    #[test]
    fn difficulty_multiplier_scales_after_floor_growth() {
        let hard = Enemy::scaled(id("bat_1"), EnemyType::Bat, 1, 1.5).unwrap();
        assert_eq!(hard.health().maximum(), 18);
        assert_eq!(hard.stats().total_attack(), 6);
        assert_eq!(hard.stats().total_defense(), 0);
    }

    #[test]
    fn rewards_follow_boss_and_regular_formulas() {
        let rat = Enemy::new(id("rat_1"), EnemyType::Rat, 2).unwrap();
        assert_eq!((rat.gold_reward(), rat.experience_reward()), (11, 14));
        let king = Enemy::new(id("goblin_king_1"), EnemyType::GoblinKing, 3).unwrap();
        assert_eq!((king.gold_reward(), king.experience_reward()), (250, 110));
    }

    #[test]
    fn enemies_never_crit() {
        let orc = Enemy::new(id("orc_1"), EnemyType::Orc, 5).unwrap();
        assert_eq!(orc.stats().crit_chance(), 0.0);
    }
}
