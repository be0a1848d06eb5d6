use std::collections::BTreeMap;

use crate::entities::Item;
use crate::error::{GameError, GameResult};
use crate::types::{EntityId, ItemType};

/// Carried items, one equipment slot per equippable item type, and gold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    equipped: BTreeMap<ItemType, Item>,
    gold: i32,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &EntityId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: &EntityId) -> GameResult<Item> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    pub fn equipped(&self, slot: ItemType) -> Option<&Item> {
        self.equipped.get(&slot)
    }

    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.equipped.values()
    }

    /// Moves a carried item into its slot. Whatever occupied the slot goes
    /// back into the bag and is returned.
    pub fn equip(&mut self, id: &EntityId) -> GameResult<Option<Item>> {
        let index = self.position(id)?;
        let slot = self.items[index].item_type;
        if !slot.is_equippable() {
            return Err(GameError::argument(format!("{id} cannot be equipped")));
        }
        let item = self.items.remove(index);
        let previous = self.equipped.insert(slot, item);
        if let Some(previous) = &previous {
            self.items.push(previous.clone());
        }
        Ok(previous)
    }

    pub fn unequip(&mut self, slot: ItemType) -> Option<Item> {
        let item = self.equipped.remove(&slot)?;
        self.items.push(item.clone());
        Some(item)
    }

    /// Removes a consumable from the bag so its effect can be applied.
    pub fn consume(&mut self, id: &EntityId) -> GameResult<Item> {
        let index = self.position(id)?;
        if self.items[index].item_type != ItemType::Consumable {
            return Err(GameError::argument(format!("{id} is not a consumable")));
        }
        Ok(self.items.remove(index))
    }

    pub fn equipped_attack_bonus(&self) -> i32 {
        self.equipped.values().map(|item| item.attack_bonus).sum()
    }

    pub fn equipped_defense_bonus(&self) -> i32 {
        self.equipped.values().map(|item| item.defense_bonus).sum()
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: i32) -> GameResult<()> {
        if amount < 0 {
            return Err(GameError::argument(format!("gold amount must not be negative, got {amount}")));
        }
        self.gold += amount;
        Ok(())
    }

    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.gold
    }

    /// Returns `false` and leaves the purse untouched when gold is short.
    pub fn spend_gold(&mut self, amount: i32) -> GameResult<bool> {
        if amount < 0 {
            return Err(GameError::argument(format!("gold amount must not be negative, got {amount}")));
        }
        if !self.can_afford(amount) {
            return Ok(false);
        }
        self.gold -= amount;
        Ok(true)
    }

    fn position(&self, id: &EntityId) -> GameResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| GameError::argument(format!("{id} is not in the inventory")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    fn item(id: &str, item_type: ItemType, attack: i32, defense: i32) -> Item {
        Item {
            id: EntityId::new(id).unwrap(),
            name: id.to_string(),
            item_type,
            rarity: Rarity::Common,
            attack_bonus: attack,
            defense_bonus: defense,
            heal_amount: 0,
            value: 10,
        }
    }

    #[test]
    fn equipping_swaps_previous_item_back_into_bag() {
        let mut inventory = Inventory::new();
        inventory.add_item(item("sword", ItemType::Weapon, 4, 0));
        inventory.add_item(item("axe", ItemType::Weapon, 6, 0));
        let sword = EntityId::new("sword").unwrap();
        let axe = EntityId::new("axe").unwrap();

        assert!(inventory.equip(&sword).unwrap().is_none());
        assert_eq!(inventory.equipped_attack_bonus(), 4);
        let previous = inventory.equip(&axe).unwrap().unwrap();
        assert_eq!(previous.id, sword);
        assert_eq!(inventory.equipped_attack_bonus(), 6);
        assert!(inventory.item(&sword).is_some());
        assert!(inventory.item(&axe).is_none());
    }

    #[test]
    fn consumables_cannot_be_equipped_and_gear_cannot_be_consumed() {
        let mut inventory = Inventory::new();
        inventory.add_item(item("potion", ItemType::Consumable, 0, 0));
        inventory.add_item(item("ring", ItemType::Accessory, 0, 2));
        assert!(inventory.equip(&EntityId::new("potion").unwrap()).is_err());
        assert!(inventory.consume(&EntityId::new("ring").unwrap()).is_err());
        assert_eq!(inventory.item_count(), 2);
        assert!(inventory.consume(&EntityId::new("potion").unwrap()).is_ok());
        assert_eq!(inventory.item_count(), 1);
    }

    #[test]
    fn spending_more_than_held_is_refused() {
        let mut inventory = Inventory::new();
        inventory.add_gold(30).unwrap();
        assert!(!inventory.spend_gold(31).unwrap());
        assert_eq!(inventory.gold(), 30);
        assert!(inventory.spend_gold(30).unwrap());
        assert_eq!(inventory.gold(), 0);
        assert!(inventory.add_gold(-1).is_err());
    }

    #[test]
    fn missing_items_are_invalid_arguments() {
        let mut inventory = Inventory::new();
        let ghost = EntityId::new("ghost").unwrap();
        assert!(matches!(inventory.remove_item(&ghost), Err(GameError::InvalidArgument(_))));
        assert!(matches!(inventory.equip(&ghost), Err(GameError::InvalidArgument(_))));
    }
}
