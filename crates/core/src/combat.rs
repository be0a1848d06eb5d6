//! Turn-based encounter resolution.

mod context;
mod damage;
mod engine;
mod listener;
mod result;

pub use context::CombatContext;
pub use damage::{DamageCalculator, DamageInput, MINIMUM_DAMAGE, calculate_damage};
pub use engine::{CombatEngine, MAX_TURNS};
pub use listener::{CombatListener, CombatListeners, NoopCombatListener};
pub use result::{AttackResult, CombatOutcome, CombatResult};
