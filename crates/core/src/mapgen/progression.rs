//! Probability tables that shape floors as the dungeon deepens.

use crate::rng::GameRng;
use crate::types::{ItemType, Rarity, RoomType};

use super::config::DungeonConfig;

/// Rolls a middle room against treasure, then shop, then rest; the rest of
/// the probability mass is combat.
pub(super) fn roll_room_type(rng: &mut GameRng, config: &DungeonConfig) -> RoomType {
    let roll = rng.next_double();
    let mut cumulative = config.treasure_room_chance;
    if roll < cumulative {
        return RoomType::Treasure;
    }
    cumulative += config.shop_room_chance;
    if roll < cumulative {
        return RoomType::Shop;
    }
    cumulative += config.rest_room_chance;
    if roll < cumulative {
        return RoomType::Rest;
    }
    RoomType::Combat
}

/// Room 0 is combat; the exit is the boss room on boss floors.
pub(super) fn plan_room_types(
    rng: &mut GameRng,
    config: &DungeonConfig,
    room_count: usize,
    boss_floor: bool,
) -> Vec<RoomType> {
    let exit_type = if boss_floor { RoomType::Boss } else { RoomType::Combat };
    if room_count == 1 {
        return vec![exit_type];
    }
    let mut types = Vec::with_capacity(room_count);
    types.push(RoomType::Combat);
    for _ in 1..room_count - 1 {
        types.push(roll_room_type(rng, config));
    }
    types.push(exit_type);
    types
}

/// Per-tier rarity chances for a floor, highest tier first. Whatever mass is
/// left over is common.
pub fn rarity_chances(floor: u32) -> [(Rarity, f64); 4] {
    let floor = f64::from(floor);
    [
        (Rarity::Legendary, 0.01 + floor * 0.005),
        (Rarity::Epic, 0.05 + floor * 0.01),
        (Rarity::Rare, 0.15 + floor * 0.02),
        (Rarity::Uncommon, 0.35 + floor * 0.02),
    ]
}

/// Upper bounds of each tier's band on `[0, 1)`: the running sum of
/// [`rarity_chances`], highest tier first.
pub fn rarity_thresholds(floor: u32) -> [(Rarity, f64); 4] {
    let mut cumulative = 0.0;
    rarity_chances(floor).map(|(rarity, chance)| {
        cumulative += chance;
        (rarity, cumulative)
    })
}

pub(super) fn roll_rarity(rng: &mut GameRng, floor: u32) -> Rarity {
    rarity_for_roll(rng.next_double(), floor)
}

fn rarity_for_roll(roll: f64, floor: u32) -> Rarity {
    rarity_thresholds(floor)
        .into_iter()
        .find(|&(_, threshold)| roll < threshold)
        .map_or(Rarity::Common, |(rarity, _)| rarity)
}

pub(super) fn roll_item_type(rng: &mut GameRng) -> ItemType {
    let roll = rng.next_double();
    if roll < 0.35 {
        ItemType::Weapon
    } else if roll < 0.65 {
        ItemType::Armor
    } else if roll < 0.80 {
        ItemType::Accessory
    } else if roll < 0.95 {
        ItemType::Consumable
    } else {
        ItemType::Relic
    }
}
