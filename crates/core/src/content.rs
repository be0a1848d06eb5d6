//! Static content tables: enemy catalog, tier pools, class templates, item names.

use serde::{Deserialize, Serialize};

use crate::types::{DamageType, ItemType, PlayerClass};

pub const HEALTH_PER_FLOOR: i32 = 5;
pub const ATTACK_PER_FLOOR: i32 = 2;
pub const DEFENSE_PER_FLOOR: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Rat,
    Bat,
    Slime,
    Goblin,
    Skeleton,
    Spider,
    Orc,
    Zombie,
    Wraith,
    Troll,
    Elemental,
    Golem,
    GoblinKing,
    Necromancer,
    Dragon,
}

pub struct EnemyStats {
    pub name: &'static str,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub is_boss: bool,
    pub damage_type: DamageType,
}

pub fn get_enemy_stats(kind: EnemyType) -> EnemyStats {
    use DamageType::{Fire, Magic, Physical, Poison};
    let (name, health, attack, defense, is_boss, damage_type) = match kind {
        EnemyType::Rat => ("Giant Rat", 15, 5, 1, false, Physical),
        EnemyType::Bat => ("Cave Bat", 12, 4, 0, false, Physical),
        EnemyType::Slime => ("Acid Slime", 20, 5, 3, false, Poison),
        EnemyType::Goblin => ("Goblin", 20, 8, 1, false, Physical),
        EnemyType::Skeleton => ("Skeleton", 22, 7, 2, false, Physical),
        EnemyType::Spider => ("Cave Spider", 18, 6, 1, false, Poison),
        EnemyType::Orc => ("Orc Warrior", 40, 12, 4, false, Physical),
        EnemyType::Zombie => ("Zombie", 35, 9, 3, false, Physical),
        EnemyType::Wraith => ("Soul Wraith", 30, 11, 1, false, Magic),
        EnemyType::Troll => ("Cave Troll", 60, 14, 6, false, Physical),
        EnemyType::Elemental => ("Fire Elemental", 45, 15, 3, false, Fire),
        EnemyType::Golem => ("Stone Golem", 70, 10, 10, false, Physical),
        EnemyType::GoblinKing => ("Goblin King", 80, 14, 5, true, Physical),
        EnemyType::Necromancer => ("Necromancer", 70, 16, 3, true, Magic),
        EnemyType::Dragon => ("Ancient Dragon", 150, 22, 12, true, Fire),
    };
    EnemyStats { name, health, attack, defense, is_boss, damage_type }
}

impl EnemyType {
    pub fn display_name(self) -> &'static str {
        get_enemy_stats(self).name
    }

    pub fn is_boss(self) -> bool {
        get_enemy_stats(self).is_boss
    }

    /// Prefix used when allocating entity ids for this enemy type.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Rat => "rat",
            Self::Bat => "bat",
            Self::Slime => "slime",
            Self::Goblin => "goblin",
            Self::Skeleton => "skeleton",
            Self::Spider => "spider",
            Self::Orc => "orc",
            Self::Zombie => "zombie",
            Self::Wraith => "wraith",
            Self::Troll => "troll",
            Self::Elemental => "elemental",
            Self::Golem => "golem",
            Self::GoblinKing => "goblin_king",
            Self::Necromancer => "necromancer",
            Self::Dragon => "dragon",
        }
    }
}

const TIER_1_ENEMIES: [EnemyType; 3] = [EnemyType::Rat, EnemyType::Slime, EnemyType::Bat];
const TIER_2_ENEMIES: [EnemyType; 3] = [EnemyType::Goblin, EnemyType::Skeleton, EnemyType::Spider];
const TIER_3_ENEMIES: [EnemyType; 3] = [EnemyType::Orc, EnemyType::Zombie, EnemyType::Wraith];
const TIER_4_ENEMIES: [EnemyType; 3] = [EnemyType::Troll, EnemyType::Elemental, EnemyType::Golem];

pub const BOSS_POOL: [EnemyType; 3] =
    [EnemyType::GoblinKing, EnemyType::Necromancer, EnemyType::Dragon];

/// Regular enemies eligible on a floor, bucketed two floors per tier.
pub fn tier_pool(floor: u32) -> &'static [EnemyType] {
    match floor {
        0..=2 => &TIER_1_ENEMIES,
        3..=4 => &TIER_2_ENEMIES,
        5..=6 => &TIER_3_ENEMIES,
        _ => &TIER_4_ENEMIES,
    }
}

pub fn boss_for_floor(floor: u32) -> EnemyType {
    let index = (floor / 3).saturating_sub(1) as usize;
    BOSS_POOL[index.min(BOSS_POOL.len() - 1)]
}

pub struct ClassTemplate {
    pub name: &'static str,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub damage_type: DamageType,
    pub level_health: i32,
    pub level_attack: i32,
    pub level_defense: i32,
}

pub fn class_template(class: PlayerClass) -> ClassTemplate {
    match class {
        PlayerClass::Warrior => ClassTemplate {
            name: "Warrior",
            health: 120,
            attack: 12,
            defense: 8,
            crit_chance: 0.05,
            crit_multiplier: 1.5,
            damage_type: DamageType::Physical,
            level_health: 12,
            level_attack: 2,
            level_defense: 2,
        },
        PlayerClass::Rogue => ClassTemplate {
            name: "Rogue",
            health: 75,
            attack: 14,
            defense: 3,
            crit_chance: 0.15,
            crit_multiplier: 2.0,
            damage_type: DamageType::Physical,
            level_health: 8,
            level_attack: 3,
            level_defense: 1,
        },
        PlayerClass::Mage => ClassTemplate {
            name: "Mage",
            health: 65,
            attack: 16,
            defense: 2,
            crit_chance: 0.05,
            crit_multiplier: 1.5,
            damage_type: DamageType::Magic,
            level_health: 6,
            level_attack: 4,
            level_defense: 1,
        },
    }
}

pub fn item_base_names(kind: ItemType) -> &'static [&'static str] {
    match kind {
        ItemType::Weapon => &["Sword", "Axe", "Mace", "Dagger", "Spear"],
        ItemType::Armor => &["Chainmail", "Plate Armor", "Leather Armor", "Robes"],
        ItemType::Accessory => &["Ring", "Amulet", "Bracelet", "Cloak"],
        ItemType::Consumable => &["Health Potion", "Elixir", "Healing Salve"],
        ItemType::Relic => &["Ancient Relic", "Mystic Orb", "Dragon Scale"],
    }
}
