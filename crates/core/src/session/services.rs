//! Shops, rest sites, events, and everything the player does with items.

use tracing::debug;

use super::{GameSession, SessionState};
use crate::entities::Item;
use crate::error::{GameError, GameResult};
use crate::types::{EntityId, RoomType};

/// Fraction of maximum health restored by resting, in tenths.
const REST_HEAL_TENTHS: i32 = 3;

impl GameSession {
    /// Buys an item from the current shop at its listed value.
    ///
    /// Returns `Ok(false)` and changes nothing when the player cannot afford it.
    pub fn purchase_item(&mut self, item_id: &EntityId) -> GameResult<bool> {
        self.require(SessionState::InShop, "purchase_item")?;
        let Some(cost) = self.dungeon.current_room().item(item_id).map(|item| item.value) else {
            return Err(GameError::argument(format!("{item_id} is not for sale here")));
        };
        if !self.player.inventory().can_afford(cost) {
            debug!(item = %item_id, cost, gold = self.player.gold(), "purchase refused");
            return Ok(false);
        }
        let item = self.dungeon.current_room_mut().take_item(item_id)?;
        self.player.inventory_mut().spend_gold(cost)?;
        self.statistics.items_purchased += 1;
        self.statistics.gold_spent += i64::from(cost);
        self.bump_tick();
        self.listener.on_shop_purchase(&item, cost);
        self.player.inventory_mut().add_item(item);
        Ok(true)
    }

    pub fn leave_shop(&mut self) -> GameResult<()> {
        self.require(SessionState::InShop, "leave_shop")?;
        self.bump_tick();
        self.settle_exploring();
        Ok(())
    }

    /// Heals 30% of maximum health and uses up the rest site. Returns the
    /// health actually restored.
    pub fn rest(&mut self) -> GameResult<i32> {
        self.require(SessionState::AtRest, "rest")?;
        let amount = self.player.health().maximum() * REST_HEAL_TENTHS / 10;
        let healed = self.player.health_mut().heal(amount)?;
        self.statistics.times_rested += 1;
        self.statistics.health_restored += i64::from(healed);
        self.bump_tick();
        self.listener.on_rested(healed);
        self.clear_current_room();
        self.settle_exploring();
        Ok(healed)
    }

    /// Walks away from the rest site without using it.
    pub fn leave_rest(&mut self) -> GameResult<()> {
        self.require(SessionState::AtRest, "leave_rest")?;
        self.bump_tick();
        self.settle_exploring();
        Ok(())
    }

    pub fn leave_event(&mut self) -> GameResult<()> {
        self.require(SessionState::InEvent, "leave_event")?;
        self.bump_tick();
        self.clear_current_room();
        self.settle_exploring();
        Ok(())
    }

    /// Moves an item lying in the current room into the bag.
    pub fn pick_up_item(&mut self, item_id: &EntityId) -> GameResult<()> {
        self.require(SessionState::Exploring, "pick_up_item")?;
        if self.dungeon.current_room().room_type() == RoomType::Shop {
            return Err(GameError::state("shop wares must be purchased"));
        }
        let item = self.dungeon.current_room_mut().take_item(item_id)?;
        self.bump_tick();
        self.collect(item);
        Ok(())
    }

    /// Drinks a carried consumable. Returns the health actually restored.
    pub fn use_item(&mut self, item_id: &EntityId) -> GameResult<i32> {
        self.require_item_use("use items")?;
        let Some(item) = self.player.inventory().item(item_id) else {
            return Err(GameError::argument(format!("{item_id} is not carried")));
        };
        if !item.is_consumable() {
            return Err(GameError::argument(format!("{item_id} is not a consumable")));
        }
        let item = self.player.inventory_mut().consume(item_id)?;
        let healed = self.player.health_mut().heal(item.heal_amount.max(0))?;
        self.statistics.items_used += 1;
        self.statistics.health_restored += i64::from(healed);
        self.bump_tick();
        debug!(item = %item.id, healed, "item used");
        self.listener.on_item_used(&item, healed);
        Ok(healed)
    }

    /// Equips a carried item, returning whatever it displaced to the bag.
    pub fn equip_item(&mut self, item_id: &EntityId) -> GameResult<Option<Item>> {
        self.require_item_use("equip items")?;
        let previous = self.player.inventory_mut().equip(item_id)?;
        self.bump_tick();
        debug!(item = %item_id, replaced = previous.is_some(), "item equipped");
        Ok(previous)
    }

    pub fn open_inventory(&mut self) -> GameResult<()> {
        self.require(SessionState::Exploring, "open_inventory")?;
        self.state = SessionState::InInventory;
        self.bump_tick();
        Ok(())
    }

    pub fn close_inventory(&mut self) -> GameResult<()> {
        self.require(SessionState::InInventory, "close_inventory")?;
        self.state = SessionState::Exploring;
        self.bump_tick();
        Ok(())
    }

    pub(super) fn collect_treasure(&mut self) {
        let items = self.dungeon.current_room_mut().take_all_items();
        for item in items {
            self.collect(item);
        }
    }

    fn collect(&mut self, item: Item) {
        self.statistics.items_collected += 1;
        self.listener.on_item_picked(&item);
        self.player.inventory_mut().add_item(item);
    }
}
