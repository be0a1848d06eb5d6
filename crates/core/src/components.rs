//! Small mutable value holders attached to players and enemies.

pub mod health;
pub mod inventory;
pub mod stats;
pub mod status;

pub use health::Health;
pub use inventory::Inventory;
pub use stats::CombatStats;
pub use status::{StatusEffect, StatusEffectTracker, StatusType};
