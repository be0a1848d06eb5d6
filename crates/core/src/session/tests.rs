use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::combat::{CombatOutcome, CombatResult};
use crate::components::StatusType;
use crate::content::EnemyType;
use crate::entities::{Enemy, Item};
use crate::floor::Floor;
use crate::types::{EntityId, ItemType, Rarity};

fn config(max_floors: u32) -> DungeonConfig {
    DungeonConfig { max_floors, ..DungeonConfig::standard() }
}

fn rat(number: u64, health: i32, attack: i32, defense: i32) -> Enemy {
    Enemy::with_stats(EntityId::numbered("rat", number), EnemyType::Rat, 1, health, attack, defense)
        .unwrap()
}

fn item(id: &str, item_type: ItemType, heal: i32, value: i32) -> Item {
    Item {
        id: EntityId::new(id).unwrap(),
        name: id.to_string(),
        item_type,
        rarity: Rarity::Common,
        attack_bonus: if item_type == ItemType::Weapon { 3 } else { 0 },
        defense_bonus: 0,
        heal_amount: heal,
        value,
    }
}

fn room(index: usize, room_type: RoomType, enemies: Vec<Enemy>, items: Vec<Item>) -> Room {
    let mut room = Room::new(EntityId::numbered("room", index as u64 + 100), room_type, 1, index);
    enemies.into_iter().for_each(|enemy| room.add_enemy(enemy));
    items.into_iter().for_each(|item| room.add_item(item));
    room
}

fn session_on(rooms: Vec<Room>, max_floors: u32) -> GameSession {
    let mut session =
        GameSession::new("Tester", PlayerClass::Warrior, 12345, Difficulty::Normal, config(max_floors))
            .unwrap();
    let floor = Floor::new(EntityId::numbered("floor", 100), 1, rooms).unwrap();
    session.dungeon.install_floor(floor);
    session
}

fn id(value: &str) -> EntityId {
    EntityId::new(value).unwrap()
}

#[test]
fn operations_out_of_turn_are_invalid_state() {
    let mut session = session_on(vec![room(0, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![])], 1);
    assert_eq!(session.state(), SessionState::Initializing);
    assert!(!session.is_active());
    assert!(matches!(session.advance_room(), Err(GameError::InvalidState(_))));
    assert!(matches!(session.execute_combat(), Err(GameError::InvalidState(_))));
    assert!(matches!(session.pause(), Err(GameError::InvalidState(_))));
    assert_eq!(session.tick(), 0);

    session.start().unwrap();
    assert!(matches!(session.start(), Err(GameError::InvalidState(_))));
    assert_eq!(session.state(), SessionState::InCombat);
    assert!(matches!(session.advance_room(), Err(GameError::InvalidState(_))));
    assert!(matches!(session.rest(), Err(GameError::InvalidState(_))));
}

#[test]
fn full_floor_walkthrough_ends_in_victory() {
    let rooms = vec![
        room(0, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
        room(
            1,
            RoomType::Shop,
            vec![],
            vec![item("tonic", ItemType::Consumable, 20, 5), item("crown", ItemType::Relic, 0, 10_000)],
        ),
        room(2, RoomType::Rest, vec![], vec![]),
        room(3, RoomType::Event, vec![], vec![]),
        room(4, RoomType::Treasure, vec![], vec![item("blade", ItemType::Weapon, 0, 30)]),
        room(5, RoomType::Combat, vec![rat(2, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);

    session.start().unwrap();
    assert!(session.started_at().is_some());
    let result = session.execute_combat().unwrap();
    assert!(result.is_victory());
    assert_eq!(session.state(), SessionState::Exploring);
    assert!(session.current_room().is_cleared());
    let gold = session.player().gold();
    assert!(gold >= 5);

    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::InShop);
    assert!(!session.purchase_item(&id("crown")).unwrap());
    assert_eq!(session.player().gold(), gold);
    assert!(session.current_room().item(&id("crown")).is_some());
    assert!(matches!(session.purchase_item(&id("ghost")), Err(GameError::InvalidArgument(_))));
    assert!(session.purchase_item(&id("tonic")).unwrap());
    assert_eq!(session.player().gold(), gold - 5);
    assert!(session.player().inventory().item(&id("tonic")).is_some());
    session.leave_shop().unwrap();

    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::AtRest);
    session.player.health_mut().take_damage(50).unwrap();
    assert_eq!(session.rest().unwrap(), 36);
    assert_eq!(session.state(), SessionState::Exploring);

    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::InEvent);
    session.leave_event().unwrap();
    session.return_room().unwrap();
    assert_eq!(session.state(), SessionState::Exploring, "used rest sites stay spent");
    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::Exploring, "resolved events stay resolved");

    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::Exploring);
    assert!(session.current_room().items().is_empty());
    assert!(session.player().inventory().item(&id("blade")).is_some());

    session.advance_room().unwrap();
    assert_eq!(session.state(), SessionState::InCombat);
    session.execute_combat().unwrap();
    assert_eq!(session.state(), SessionState::RunEnded);
    assert_eq!(session.end_reason(), Some(RunEndReason::Victory));
    assert!(session.ended_at().is_some());

    let stats = session.statistics();
    assert_eq!(stats.combats_won, 2);
    assert_eq!(stats.enemies_killed, 2);
    assert_eq!(stats.items_purchased, 1);
    assert_eq!(stats.items_collected, 1);
    assert_eq!(stats.times_rested, 1);
    assert_eq!(stats.health_restored, 36);
    assert_eq!(stats.rooms_visited, 6);
    assert_eq!(stats.floors_completed, 1);
}

#[test]
fn leaving_a_rest_site_unused_keeps_it_available() {
    let rooms = vec![
        room(0, RoomType::Rest, vec![], vec![]),
        room(1, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    session.start().unwrap();
    assert_eq!(session.state(), SessionState::AtRest);
    session.leave_rest().unwrap();
    assert_eq!(session.player().health().current(), session.player().health().maximum());
    assert!(!session.current_room().is_cleared());
}

#[test]
fn defeat_ends_the_run_and_later_end_calls_are_ignored() {
    let mut session =
        session_on(vec![room(0, RoomType::Combat, vec![rat(1, 900, 300, 90)], vec![])], 1);
    session.start().unwrap();
    let result = session.execute_combat().unwrap();
    assert!(result.is_defeat());
    assert_eq!(session.state(), SessionState::RunEnded);
    assert_eq!(session.end_reason(), Some(RunEndReason::PlayerDeath));
    assert!(!session.is_active());

    let tick = session.tick();
    session.end_run(RunEndReason::Abandoned);
    assert_eq!(session.end_reason(), Some(RunEndReason::PlayerDeath));
    assert_eq!(session.tick(), tick);
    assert!(matches!(session.execute_combat(), Err(GameError::InvalidState(_))));
}

#[test]
fn interrupted_combat_stays_in_combat_without_rewards() {
    let mut session =
        session_on(vec![room(0, RoomType::Combat, vec![rat(1, 1_000, 1, 100)], vec![])], 1);
    session.player.statuses_mut().apply(StatusType::Regenerating, 500, 3, None).unwrap();
    session.start().unwrap();

    let result = session.execute_combat().unwrap();

    assert_eq!(result.outcome, CombatOutcome::Interrupted);
    assert_eq!(session.state(), SessionState::InCombat);
    assert_eq!(session.player().gold(), 0);
    assert_eq!(session.statistics().combats_interrupted, 1);
    assert!(!session.current_room().is_cleared());
}

#[test]
fn combat_rooms_without_living_enemies_clear_on_entry() {
    let rooms = vec![
        room(0, RoomType::Combat, vec![], vec![]),
        room(1, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    session.start().unwrap();
    assert_eq!(session.state(), SessionState::Exploring);
    assert!(session.current_room().is_cleared());
    assert_eq!(session.statistics().rooms_cleared, 1);
}

#[test]
fn descending_enters_room_zero_of_the_next_floor() {
    let mut session = session_on(vec![room(0, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![])], 2);
    session.start().unwrap();
    assert!(matches!(session.descend_floor(), Err(GameError::InvalidState(_))));
    session.execute_combat().unwrap();
    assert_eq!(session.state(), SessionState::Exploring);

    session.descend_floor().unwrap();

    assert_eq!(session.dungeon().current_floor_number(), 2);
    assert_eq!(session.dungeon().current_floor().cursor(), 0);
    assert!(session.current_room().is_visited());
    assert_eq!(session.statistics().floors_completed, 1);
    assert_eq!(session.statistics().deepest_floor, 2);
}

#[test]
fn items_are_picked_up_used_and_equipped_in_allowed_states() {
    let rooms = vec![
        room(
            0,
            RoomType::Combat,
            vec![rat(1, 12, 1, 0)],
            vec![item("salve", ItemType::Consumable, 25, 10), item("sword", ItemType::Weapon, 0, 10)],
        ),
        room(1, RoomType::Combat, vec![rat(2, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    session.start().unwrap();
    assert!(matches!(session.pick_up_item(&id("salve")), Err(GameError::InvalidState(_))));
    session.execute_combat().unwrap();

    session.pick_up_item(&id("salve")).unwrap();
    session.pick_up_item(&id("sword")).unwrap();
    assert!(matches!(session.pick_up_item(&id("salve")), Err(GameError::InvalidArgument(_))));

    session.player.health_mut().take_damage(10).unwrap();
    assert!(matches!(session.use_item(&id("sword")), Err(GameError::InvalidArgument(_))));
    session.open_inventory().unwrap();
    assert_eq!(session.use_item(&id("salve")).unwrap(), 10);
    let attack = session.player().effective_attack();
    assert!(session.equip_item(&id("sword")).unwrap().is_none());
    assert_eq!(session.player().effective_attack(), attack + 3);
    session.close_inventory().unwrap();

    session.advance_room().unwrap();
    assert!(matches!(session.equip_item(&id("sword")), Err(GameError::InvalidState(_))));
    assert_eq!(session.statistics().items_used, 1);
    assert_eq!(session.statistics().items_collected, 2);
}

#[test]
fn shop_wares_cannot_be_picked_up_after_leaving() {
    let rooms = vec![
        room(0, RoomType::Shop, vec![], vec![item("elixir", ItemType::Consumable, 40, 60)]),
        room(1, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    session.start().unwrap();
    session.leave_shop().unwrap();
    assert!(matches!(session.pick_up_item(&id("elixir")), Err(GameError::InvalidState(_))));
    assert!(session.current_room().item(&id("elixir")).is_some());
}

#[test]
fn resume_restores_the_state_that_was_paused() {
    let rooms = vec![
        room(0, RoomType::Shop, vec![], vec![]),
        room(1, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    assert!(matches!(session.resume(), Err(GameError::InvalidState(_))));
    session.start().unwrap();
    session.pause().unwrap();
    assert_eq!(session.state(), SessionState::Paused);
    assert!(session.is_active());
    assert!(matches!(session.pause(), Err(GameError::InvalidState(_))));
    assert!(matches!(session.leave_shop(), Err(GameError::InvalidState(_))));
    session.resume().unwrap();
    assert_eq!(session.state(), SessionState::InShop);
}

#[test]
fn apply_routes_decisions_to_operations() {
    let rooms = vec![
        room(0, RoomType::Combat, vec![rat(1, 12, 1, 0)], vec![]),
        room(1, RoomType::Combat, vec![rat(2, 12, 1, 0)], vec![]),
    ];
    let mut session = session_on(rooms, 1);
    for decision in [Decision::Start, Decision::ExecuteCombat, Decision::AdvanceRoom] {
        session.apply(&decision).unwrap();
    }
    assert_eq!(session.state(), SessionState::InCombat);
    assert!(session.apply(&Decision::LeaveShop).is_err());
    session.apply(&Decision::EndRun { reason: RunEndReason::Abandoned }).unwrap();
    assert_eq!(session.end_reason(), Some(RunEndReason::Abandoned));
}

#[test]
fn snapshot_hash_tracks_decisions_not_wall_clock() {
    let build = || {
        GameSession::new("Tester", PlayerClass::Rogue, 99, Difficulty::Hard, config(3)).unwrap()
    };
    let mut first = build();
    let mut second = build();
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    first.start().unwrap();
    assert_ne!(first.snapshot_hash(), second.snapshot_hash());
    second.start().unwrap();
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());
}

#[test]
fn snapshot_hash_covers_statuses_and_paused_state() {
    let rooms = || vec![room(0, RoomType::Shop, vec![], vec![])];
    let mut first = session_on(rooms(), 1);
    let mut second = session_on(rooms(), 1);
    first.start().unwrap();
    second.start().unwrap();
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    first.player.statuses_mut().apply(StatusType::Poisoned, 3, 1, None).unwrap();
    assert_ne!(first.snapshot_hash(), second.snapshot_hash());
    second.player.statuses_mut().apply(StatusType::Poisoned, 3, 1, None).unwrap();
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());

    first.pause().unwrap();
    second.pause().unwrap();
    assert_eq!(first.snapshot_hash(), second.snapshot_hash());
    second.paused_from = Some(SessionState::Exploring);
    assert_ne!(first.snapshot_hash(), second.snapshot_hash());
}

#[derive(Clone, Default)]
struct Journal(Rc<RefCell<Vec<String>>>);

impl SessionListener for Journal {
    fn on_run_started(&mut self, run: &RunInfo, _player: &Player) {
        self.0.borrow_mut().push(format!("run:{}", run.run_id));
    }

    fn on_floor_entered(&mut self, floor: &Floor) {
        self.0.borrow_mut().push(format!("floor:{}", floor.number()));
    }

    fn on_room_entered(&mut self, room: &Room) {
        self.0.borrow_mut().push(format!("room:{}", room.index()));
    }

    fn on_room_cleared(&mut self, room: &Room) {
        self.0.borrow_mut().push(format!("cleared:{}", room.index()));
    }

    fn on_combat_completed(&mut self, _room: &Room, result: &CombatResult) {
        self.0.borrow_mut().push(format!("combat:{:?}", result.outcome));
    }

    fn on_leveled_up(&mut self, _player: &Player, level: u32) {
        self.0.borrow_mut().push(format!("level:{level}"));
    }

    fn on_run_ended(&mut self, reason: RunEndReason, _stats: &RunStatistics) {
        self.0.borrow_mut().push(format!("end:{reason:?}"));
    }
}

#[test]
fn listeners_fan_out_in_order_with_level_ups() {
    let king = Enemy::with_stats(EntityId::numbered("goblin_king", 1), EnemyType::GoblinKing, 3, 5, 1, 0)
        .unwrap();
    let mut session = session_on(vec![room(0, RoomType::Boss, vec![king], vec![])], 1);
    let first = Journal::default();
    let second = Journal::default();
    session.set_listener(SessionListeners::new().with(first.clone()).with(second.clone()));

    session.start().unwrap();
    session.execute_combat().unwrap();

    let expected = vec![
        "run:run_0000000000003039",
        "floor:1",
        "room:0",
        "combat:Victory",
        "level:2",
        "cleared:0",
        "end:Victory",
    ];
    assert_eq!(*first.0.borrow(), expected);
    assert_eq!(*second.0.borrow(), expected);
}
