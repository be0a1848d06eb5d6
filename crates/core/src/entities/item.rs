use crate::types::{EntityId, ItemType, Rarity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub heal_amount: i32,
    /// Shop price.
    pub value: i32,
}

impl Item {
    pub fn is_consumable(&self) -> bool {
        self.item_type == ItemType::Consumable
    }
}
