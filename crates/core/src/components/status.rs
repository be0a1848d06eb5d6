//! Timed status effects and the per-combatant tracker that stacks them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::types::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusType {
    Poisoned,
    Burning,
    Regenerating,
    Strengthened,
    Weakened,
    Vulnerable,
    Armored,
    Shielded,
}

impl StatusType {
    pub fn max_stacks(self) -> u32 {
        match self {
            Self::Poisoned => 5,
            Self::Burning | Self::Regenerating => 3,
            Self::Strengthened
            | Self::Weakened
            | Self::Vulnerable
            | Self::Armored
            | Self::Shielded => 1,
        }
    }

    /// Health lost per stack at the start of each combat turn.
    pub fn damage_per_stack(self) -> i32 {
        match self {
            Self::Poisoned => 2,
            Self::Burning => 3,
            _ => 0,
        }
    }

    /// Health restored per stack at the start of each combat turn.
    pub fn healing_per_stack(self) -> i32 {
        match self {
            Self::Regenerating => 3,
            _ => 0,
        }
    }

    fn attack_factor(self) -> f64 {
        match self {
            Self::Strengthened => 1.5,
            Self::Weakened => 0.75,
            _ => 1.0,
        }
    }

    fn damage_taken_factor(self) -> f64 {
        match self {
            Self::Vulnerable => 1.5,
            Self::Armored => 0.75,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusEffect {
    kind: StatusType,
    remaining: u32,
    stacks: u32,
    source: Option<EntityId>,
}

impl StatusEffect {
    pub fn kind(&self) -> StatusType {
        self.kind
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn source(&self) -> Option<&EntityId> {
        self.source.as_ref()
    }
}

/// At most one active effect per type; iteration order is by type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusEffectTracker {
    effects: BTreeMap<StatusType, StatusEffect>,
}

impl StatusEffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies or refreshes an effect. A refresh keeps the longer duration
    /// and adds stacks up to the type's cap.
    pub fn apply(
        &mut self,
        kind: StatusType,
        duration: u32,
        stacks: u32,
        source: Option<EntityId>,
    ) -> GameResult<()> {
        if duration == 0 {
            return Err(GameError::argument(format!("{kind:?} duration must be positive")));
        }
        if stacks == 0 {
            return Err(GameError::argument(format!("{kind:?} stacks must be positive")));
        }
        let cap = kind.max_stacks();
        match self.effects.get_mut(&kind) {
            Some(existing) => {
                existing.remaining = existing.remaining.max(duration);
                existing.stacks = (existing.stacks + stacks).min(cap);
                if source.is_some() {
                    existing.source = source;
                }
            }
            None => {
                self.effects.insert(
                    kind,
                    StatusEffect { kind, remaining: duration, stacks: stacks.min(cap), source },
                );
            }
        }
        Ok(())
    }

    pub fn has(&self, kind: StatusType) -> bool {
        self.effects.contains_key(&kind)
    }

    pub fn get(&self, kind: StatusType) -> Option<&StatusEffect> {
        self.effects.get(&kind)
    }

    pub fn stacks(&self, kind: StatusType) -> u32 {
        self.effects.get(&kind).map_or(0, |effect| effect.stacks)
    }

    pub fn remove(&mut self, kind: StatusType) -> Option<StatusEffect> {
        self.effects.remove(&kind)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.values()
    }

    /// Counts every effect down by one turn and drops the ones that run out.
    /// Returns the expired types in type order.
    pub fn tick(&mut self) -> Vec<StatusType> {
        let mut expired = Vec::new();
        for effect in self.effects.values_mut() {
            effect.remaining -= 1;
            if effect.remaining == 0 {
                expired.push(effect.kind);
            }
        }
        for kind in &expired {
            self.effects.remove(kind);
        }
        expired
    }

    /// Product of every active attack buff and debuff.
    pub fn attack_modifier(&self) -> f64 {
        self.effects.keys().map(|kind| kind.attack_factor()).product()
    }

    /// Product of every active incoming-damage modifier.
    pub fn defense_modifier(&self) -> f64 {
        self.effects.keys().map(|kind| kind.damage_taken_factor()).product()
    }

    pub fn is_shielded(&self) -> bool {
        self.has(StatusType::Shielded)
    }

    pub fn damage_over_time(&self, kind: StatusType) -> i32 {
        kind.damage_per_stack() * self.stacks(kind) as i32
    }

    pub fn healing_over_time(&self) -> i32 {
        StatusType::Regenerating.healing_per_stack()
            * self.stacks(StatusType::Regenerating) as i32
    }
}
