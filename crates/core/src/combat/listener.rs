use super::context::CombatContext;
use super::result::{AttackResult, CombatResult};

/// Synchronous combat observer. Every hook defaults to doing nothing.
///
/// Hooks see the encounter through shared references only.
pub trait CombatListener {
    fn on_combat_started(&mut self, _context: &CombatContext<'_>) {}

    fn on_damage_dealt(&mut self, _context: &CombatContext<'_>, _attack: &AttackResult) {}

    fn on_combat_ended(&mut self, _context: &CombatContext<'_>, _result: &CombatResult) {}

    fn on_player_died(&mut self, _context: &CombatContext<'_>) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopCombatListener;

impl CombatListener for NoopCombatListener {}

/// Forwards every hook to each registered listener in registration order.
#[derive(Default)]
pub struct CombatListeners {
    listeners: Vec<Box<dyn CombatListener>>,
}

impl CombatListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: impl CombatListener + 'static) -> Self {
        self.push(listener);
        self
    }

    pub fn push(&mut self, listener: impl CombatListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl CombatListener for CombatListeners {
    fn on_combat_started(&mut self, context: &CombatContext<'_>) {
        for listener in &mut self.listeners {
            listener.on_combat_started(context);
        }
    }

    fn on_damage_dealt(&mut self, context: &CombatContext<'_>, attack: &AttackResult) {
        for listener in &mut self.listeners {
            listener.on_damage_dealt(context, attack);
        }
    }

    fn on_combat_ended(&mut self, context: &CombatContext<'_>, result: &CombatResult) {
        for listener in &mut self.listeners {
            listener.on_combat_ended(context, result);
        }
    }

    fn on_player_died(&mut self, context: &CombatContext<'_>) {
        for listener in &mut self.listeners {
            listener.on_player_died(context);
        }
    }
}
