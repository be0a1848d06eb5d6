//! Populates rooms with enemies and loot according to their type.

use tracing::trace;

use crate::content::{EnemyType, boss_for_floor, item_base_names, tier_pool};
use crate::entities::{Enemy, Item};
use crate::error::GameResult;
use crate::floor::Room;
use crate::rng::GameRng;
use crate::types::{ItemType, Rarity, RoomType};

use super::config::DungeonConfig;
use super::ids::IdAllocator;
use super::progression::{roll_item_type, roll_rarity};

const MIN_TREASURE_ITEMS: u32 = 1;
const TREASURE_ITEM_SPREAD: u32 = 3;
const MIN_SHOP_ITEMS: u32 = 3;
const SHOP_ITEM_SPREAD: u32 = 3;
const ACCESSORY_ATTACK_CHANCE: f64 = 0.5;

pub struct RoomContentGenerator {
    config: DungeonConfig,
    enemy_multiplier: f64,
}

impl RoomContentGenerator {
    pub fn new(config: DungeonConfig, enemy_multiplier: f64) -> Self {
        Self { config, enemy_multiplier }
    }

    /// Fills `room` for its type. Rest and event rooms stay empty.
    pub fn populate(
        &self,
        room: &mut Room,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> GameResult<()> {
        match room.room_type() {
            RoomType::Combat => self.populate_combat(room, rng, ids),
            RoomType::Boss => self.populate_boss(room, rng, ids),
            RoomType::Treasure => self.populate_treasure(room, rng, ids),
            RoomType::Shop => self.populate_shop(room, rng, ids),
            RoomType::Rest | RoomType::Event => Ok(()),
        }
    }

    fn populate_combat(
        &self,
        room: &mut Room,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> GameResult<()> {
        let floor = room.floor_number();
        let count = rng.next_int_in_range(
            self.config.min_enemies_per_room as i32,
            self.config.max_enemies_per_room as i32,
        )?;
        let pool = tier_pool(floor);
        for _ in 0..count {
            let kind = *rng.pick(pool)?;
            room.add_enemy(self.spawn_enemy(kind, floor, ids)?);
        }
        if rng.chance(self.config.item_drop_chance) {
            room.add_item(self.generate_loot(rng, ids, floor, Rarity::Common)?);
        }
        trace!(room = %room.id(), floor, enemies = count, items = room.items().len(), "populated combat room");
        Ok(())
    }

    fn populate_boss(
        &self,
        room: &mut Room,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> GameResult<()> {
        let floor = room.floor_number();
        let boss = self.spawn_enemy(boss_for_floor(floor), floor, ids)?;
        trace!(room = %room.id(), floor, boss = boss.name(), "populated boss room");
        room.add_enemy(boss);
        room.add_item(self.generate_loot(rng, ids, floor, Rarity::Rare)?);
        Ok(())
    }

    /// Each treasure item rolls rarity twice and keeps the better tier.
    fn populate_treasure(
        &self,
        room: &mut Room,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> GameResult<()> {
        let floor = room.floor_number();
        let count = MIN_TREASURE_ITEMS + rng.next_int(TREASURE_ITEM_SPREAD)?;
        for _ in 0..count {
            let min_rarity = roll_rarity(rng, floor);
            room.add_item(self.generate_loot(rng, ids, floor, min_rarity)?);
        }
        Ok(())
    }

    fn populate_shop(
        &self,
        room: &mut Room,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
    ) -> GameResult<()> {
        let floor = room.floor_number();
        let count = MIN_SHOP_ITEMS + rng.next_int(SHOP_ITEM_SPREAD)?;
        for _ in 0..count {
            room.add_item(self.generate_loot(rng, ids, floor, Rarity::Common)?);
        }
        Ok(())
    }

    fn spawn_enemy(&self, kind: EnemyType, floor: u32, ids: &mut IdAllocator) -> GameResult<Enemy> {
        Enemy::scaled(ids.next_enemy(kind.id_prefix()), kind, floor, self.enemy_multiplier)
    }

    /// One item with a floor-scaled rarity of at least `min_rarity`.
    pub fn generate_loot(
        &self,
        rng: &mut GameRng,
        ids: &mut IdAllocator,
        floor: u32,
        min_rarity: Rarity,
    ) -> GameResult<Item> {
        let rarity = roll_rarity(rng, floor).max(min_rarity);
        let item_type = roll_item_type(rng);
        generate_item(rng, ids, item_type, rarity, floor)
    }
}

fn generate_item(
    rng: &mut GameRng,
    ids: &mut IdAllocator,
    item_type: ItemType,
    rarity: Rarity,
    floor: u32,
) -> GameResult<Item> {
    let rarity_bonus = rarity.ordinal() * 2;
    let floor_bonus = floor as i32;
    let base_name = rng.pick(item_base_names(item_type))?;
    let name = format!("{}{base_name}", rarity.name_prefix());

    let (attack_bonus, defense_bonus, heal_amount) = match item_type {
        ItemType::Weapon => (3 + rarity_bonus + floor_bonus, 0, 0),
        ItemType::Armor => (0, 2 + rarity_bonus + floor_bonus, 0),
        ItemType::Accessory => {
            if rng.chance(ACCESSORY_ATTACK_CHANCE) {
                (1 + rarity_bonus, 0, 0)
            } else {
                (0, 1 + rarity_bonus, 0)
            }
        }
        ItemType::Consumable => (0, 0, 10 + rarity_bonus * 5 + floor_bonus * 2),
        ItemType::Relic => (1 + rarity_bonus, 1 + rarity_bonus, 0),
    };

    Ok(Item {
        id: ids.next_item(item_id_prefix(item_type)),
        name,
        item_type,
        rarity,
        attack_bonus,
        defense_bonus,
        heal_amount,
        value: rarity.base_value() + floor_bonus * 5,
    })
}

fn item_id_prefix(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Weapon => "weapon",
        ItemType::Armor => "armor",
        ItemType::Accessory => "accessory",
        ItemType::Consumable => "consumable",
        ItemType::Relic => "relic",
    }
}
