use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Opaque, non-blank identifier unique to one entity instance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> GameResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(GameError::argument("entity id must not be blank"));
        }
        Ok(Self(value))
    }

    pub(crate) fn numbered(prefix: &str, number: u64) -> Self {
        Self(format!("{prefix}_{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = GameError;

    fn try_from(value: String) -> GameResult<Self> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Combat,
    Boss,
    Treasure,
    Shop,
    Rest,
    Event,
}

impl RoomType {
    /// Rooms that must be cleared before the floor can be left.
    pub fn requires_clearing(self) -> bool {
        matches!(self, Self::Combat | Self::Boss)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn base_value(self) -> i32 {
        match self {
            Self::Common => 10,
            Self::Uncommon => 25,
            Self::Rare => 50,
            Self::Epic => 100,
            Self::Legendary => 250,
        }
    }

    pub fn name_prefix(self) -> &'static str {
        match self {
            Self::Common => "",
            Self::Uncommon => "Fine ",
            Self::Rare => "Superior ",
            Self::Epic => "Masterwork ",
            Self::Legendary => "Legendary ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
    Consumable,
    Relic,
}

impl ItemType {
    pub fn is_equippable(self) -> bool {
        !matches!(self, Self::Consumable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Magic,
    Fire,
    Poison,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Rogue,
    Mage,
}

/// Run-wide scaling chosen at session creation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    pub fn enemy_stat_multiplier(self) -> f64 {
        match self {
            Self::Easy => 0.8,
            Self::Normal => 1.0,
            Self::Hard => 1.3,
            Self::Nightmare => 1.6,
        }
    }

    pub fn player_stat_multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.2,
            Self::Normal => 1.0,
            Self::Hard => 0.8,
            Self::Nightmare => 0.6,
        }
    }

    pub fn gold_multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.5,
            Self::Normal => 1.0,
            Self::Hard => 0.7,
            Self::Nightmare => 0.5,
        }
    }
}

/// Round half up, the rounding used for every derived stat and damage value.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Multiplies a stat by a difficulty factor, keeping whole numbers.
pub(crate) fn scale_stat(value: i32, multiplier: f64) -> i32 {
    round_half_up(f64::from(value) * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_entity_ids_are_rejected() {
        assert!(EntityId::new("").is_err());
        assert!(EntityId::new("   ").is_err());
        assert_eq!(EntityId::new("rat_1").unwrap().as_str(), "rat_1");
    }

    #[test]
    fn entity_id_deserialization_validates() {
        let parsed: Result<EntityId, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let parsed: EntityId = serde_json::from_str("\"weapon_3\"").unwrap();
        assert_eq!(parsed, EntityId::numbered("weapon", 3));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(scale_stat(10, 1.3), 13);
        assert_eq!(scale_stat(65, 0.6), 39);
    }

    #[test]
    fn only_combat_and_boss_rooms_gate_descent() {
        assert!(RoomType::Combat.requires_clearing());
        assert!(RoomType::Boss.requires_clearing());
        assert!(!RoomType::Shop.requires_clearing());
        assert!(!RoomType::Event.requires_clearing());
    }
}
