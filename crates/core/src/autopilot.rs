//! A deterministic decision policy that plays a session to completion.
//!
//! Used by the simulation tools and the integration tests to drive full runs
//! without a human at the controls.

use tracing::debug;

use crate::entities::{Item, Player};
use crate::error::GameResult;
use crate::journal::{Decision, DecisionJournal};
use crate::session::{GameSession, RunEndReason, SessionState};
use crate::types::RoomType;

/// Health fraction under which the policy drinks a potion before moving on.
const LOW_HEALTH: f64 = 0.5;

/// Chooses the next decision for `session`, or `None` once the run is over.
pub fn next_decision(session: &GameSession) -> Option<Decision> {
    let player = session.player();
    let decision = match session.state() {
        SessionState::RunEnded => return None,
        SessionState::Initializing => Decision::Start,
        SessionState::Paused => Decision::Resume,
        SessionState::InInventory => Decision::CloseInventory,
        SessionState::InCombat => Decision::ExecuteCombat,
        SessionState::InEvent => Decision::LeaveEvent,
        SessionState::AtRest if player.health().is_full() => Decision::LeaveRest,
        SessionState::AtRest => Decision::Rest,
        SessionState::InShop => match cheapest_affordable(session) {
            Some(item) => Decision::PurchaseItem { item: item.id.clone() },
            None => Decision::LeaveShop,
        },
        SessionState::Exploring => explore(session),
    };
    Some(decision)
}

/// Applies policy decisions until the run ends, journaling each one. A run
/// still going after `max_decisions` is abandoned. Returns the number of
/// decisions recorded.
pub fn play_to_end(
    session: &mut GameSession,
    journal: &mut DecisionJournal,
    max_decisions: usize,
) -> GameResult<usize> {
    let mut applied = 0;
    while applied < max_decisions {
        let Some(decision) = next_decision(session) else {
            break;
        };
        session.apply(&decision)?;
        journal.append(decision);
        applied += 1;
    }
    if session.state() != SessionState::RunEnded {
        debug!(applied, "decision budget exhausted, abandoning run");
        let decision = Decision::EndRun { reason: RunEndReason::Abandoned };
        session.apply(&decision)?;
        journal.append(decision);
        applied += 1;
    }
    Ok(applied)
}

fn explore(session: &GameSession) -> Decision {
    let player = session.player();
    if player.health().percent() < LOW_HEALTH
        && let Some(potion) = player
            .inventory()
            .items()
            .iter()
            .find(|item| item.is_consumable() && item.heal_amount > 0)
    {
        return Decision::UseItem { item: potion.id.clone() };
    }
    if let Some(upgrade) = best_upgrade(player) {
        return Decision::EquipItem { item: upgrade.id.clone() };
    }

    let room = session.current_room();
    if room.room_type() != RoomType::Shop
        && let Some(item) = room.items().first()
    {
        return Decision::PickUpItem { item: item.id.clone() };
    }

    let dungeon = session.dungeon();
    let floor = dungeon.current_floor();
    if floor.has_next_room() {
        Decision::AdvanceRoom
    } else if dungeon.can_descend() {
        Decision::DescendFloor
    } else if floor.has_previous_room() {
        Decision::ReturnRoom
    } else {
        Decision::EndRun { reason: RunEndReason::Abandoned }
    }
}

fn gear_score(item: &Item) -> i32 {
    item.attack_bonus + item.defense_bonus
}

fn best_upgrade(player: &Player) -> Option<&Item> {
    let inventory = player.inventory();
    inventory
        .items()
        .iter()
        .filter(|item| item.item_type.is_equippable())
        .filter(|item| {
            let current = inventory.equipped(item.item_type).map_or(0, gear_score);
            gear_score(item) > current
        })
        .max_by_key(|item| gear_score(item))
}

fn cheapest_affordable(session: &GameSession) -> Option<&Item> {
    let gold = session.player().gold();
    session
        .current_room()
        .items()
        .iter()
        .filter(|item| item.value <= gold)
        .min_by_key(|item| item.value)
}
