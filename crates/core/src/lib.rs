pub mod autopilot;
pub mod combat;
pub mod components;
pub mod content;
pub mod dungeon;
pub mod entities;
pub mod error;
pub mod floor;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod rng;
pub mod session;
pub mod types;

pub use combat::{CombatEngine, CombatListener, CombatOutcome, CombatResult};
pub use dungeon::Dungeon;
pub use entities::{Enemy, Item, Player};
pub use error::{GameError, GameResult};
pub use floor::{Floor, Room};
pub use journal::{Decision, DecisionJournal, DecisionRecord};
pub use mapgen::DungeonConfig;
pub use replay::{ReplayError, ReplayResult, replay_session, replay_to_end};
pub use rng::GameRng;
pub use session::{GameSession, RunEndReason, SessionListener, SessionState};
pub use types::*;
