use crate::components::{CombatStats, Health, Inventory, StatusEffectTracker};
use crate::content::class_template;
use crate::error::{GameError, GameResult};
use crate::types::{Difficulty, EntityId, PlayerClass, scale_stat};

pub const PLAYER_ID: &str = "player";

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    id: EntityId,
    name: String,
    class: PlayerClass,
    health: Health,
    stats: CombatStats,
    statuses: StatusEffectTracker,
    inventory: Inventory,
    level: u32,
    experience: i32,
    enemies_killed: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, class: PlayerClass) -> GameResult<Self> {
        Self::with_difficulty(name, class, Difficulty::Normal)
    }

    /// Class template scaled by the difficulty's player multiplier.
    pub fn with_difficulty(
        name: impl Into<String>,
        class: PlayerClass,
        difficulty: Difficulty,
    ) -> GameResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::argument("player name must not be blank"));
        }
        let template = class_template(class);
        let multiplier = difficulty.player_stat_multiplier();
        Ok(Self {
            id: EntityId::new(PLAYER_ID)?,
            name,
            class,
            health: Health::new(scale_stat(template.health, multiplier).max(1))?,
            stats: CombatStats::with_crit(
                scale_stat(template.attack, multiplier),
                scale_stat(template.defense, multiplier),
                template.crit_chance,
                template.crit_multiplier,
                template.damage_type,
            )?,
            statuses: StatusEffectTracker::new(),
            inventory: Inventory::new(),
            level: 1,
            experience: 0,
            enemies_killed: 0,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> PlayerClass {
        self.class
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

    pub fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }

    pub fn statuses(&self) -> &StatusEffectTracker {
        &self.statuses
    }

    pub fn statuses_mut(&mut self) -> &mut StatusEffectTracker {
        &mut self.statuses
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn gold(&self) -> i32 {
        self.inventory.gold()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn enemies_killed(&self) -> u32 {
        self.enemies_killed
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Total attack including equipped gear.
    pub fn effective_attack(&self) -> i32 {
        self.stats.total_attack() + self.inventory.equipped_attack_bonus()
    }

    /// Total defense including equipped gear.
    pub fn effective_defense(&self) -> i32 {
        self.stats.total_defense() + self.inventory.equipped_defense_bonus()
    }

    pub(crate) fn record_kill(&mut self) {
        self.enemies_killed += 1;
    }

    pub fn required_experience_for_next_level(&self) -> i32 {
        (100.0 * f64::from(self.level).powf(1.5)).floor() as i32
    }

    /// Grants experience, cascading through as many level-ups as it covers.
    /// Surplus carries into the next level. Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: i32) -> GameResult<u32> {
        if amount < 0 {
            return Err(GameError::argument(format!(
                "experience must not be negative, got {amount}"
            )));
        }
        self.experience += amount;
        let mut gained = 0;
        while self.experience >= self.required_experience_for_next_level() {
            self.experience -= self.required_experience_for_next_level();
            self.level_up()?;
            gained += 1;
        }
        Ok(gained)
    }

    fn level_up(&mut self) -> GameResult<()> {
        let template = class_template(self.class);
        self.level += 1;
        self.health.increase_maximum(template.level_health)?;
        self.stats.grow_base(template.level_attack, template.level_defense);
        self.health.full_heal();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemType, Rarity};
    use crate::entities::Item;

    #[test]
    fn warrior_starts_with_class_stats() {
        let player = Player::new("Ayla", PlayerClass::Warrior).unwrap();
        assert_eq!(player.health().maximum(), 120);
        assert_eq!(player.stats().total_attack(), 12);
        assert_eq!(player.stats().total_defense(), 8);
        assert_eq!(player.level(), 1);
        assert_eq!(player.id().as_str(), PLAYER_ID);
    }

    #[test]
    fn exact_threshold_levels_once_and_heals() {
        let mut player = Player::new("Ayla", PlayerClass::Warrior).unwrap();
        player.health_mut().take_damage(50).unwrap();
        let required = player.required_experience_for_next_level();
        assert_eq!(required, 100);

        let gained = player.add_experience(required).unwrap();

        assert_eq!(gained, 1);
        assert_eq!(player.level(), 2);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.health().current(), player.health().maximum());
        assert_eq!(player.health().maximum(), 132);
        assert_eq!(player.stats().total_attack(), 14);
    }

    #[test]
    fn large_grants_cascade_levels_and_carry_surplus() {
        let mut player = Player::new("Nim", PlayerClass::Mage).unwrap();
        // 100 for level 2, 282 for level 3, then 10 left over.
        let gained = player.add_experience(100 + 282 + 10).unwrap();
        assert_eq!(gained, 2);
        assert_eq!(player.level(), 3);
        assert_eq!(player.experience(), 10);
    }

    #[test]
    fn short_grant_does_not_level() {
        let mut player = Player::new("Kit", PlayerClass::Rogue).unwrap();
        assert_eq!(player.add_experience(99).unwrap(), 0);
        assert_eq!(player.level(), 1);
        assert!(player.add_experience(-5).is_err());
    }

    #[test]
    fn difficulty_scales_starting_stats() {
        let player = Player::with_difficulty("Kit", PlayerClass::Mage, Difficulty::Nightmare).unwrap();
        assert_eq!(player.health().maximum(), 39);
        assert_eq!(player.stats().total_attack(), 10);
        assert!(Player::new("  ", PlayerClass::Mage).is_err());
    }

    #[test]
    fn equipment_feeds_effective_stats() {
        let mut player = Player::new("Ayla", PlayerClass::Warrior).unwrap();
        let sword = Item {
            id: EntityId::new("weapon_1").unwrap(),
            name: "Sword".to_string(),
            item_type: ItemType::Weapon,
            rarity: Rarity::Common,
            attack_bonus: 4,
            defense_bonus: 0,
            heal_amount: 0,
            value: 15,
        };
        player.inventory_mut().add_item(sword);
        player.inventory_mut().equip(&EntityId::new("weapon_1").unwrap()).unwrap();
        assert_eq!(player.effective_attack(), 16);
        assert_eq!(player.effective_defense(), 8);
    }
}
