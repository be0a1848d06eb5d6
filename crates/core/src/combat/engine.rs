use tracing::{debug, trace};

use crate::components::StatusType;
use crate::entities::{Enemy, Player};
use crate::error::{GameError, GameResult};
use crate::floor::Room;
use crate::rng::GameRng;
use crate::types::scale_stat;

use super::context::CombatContext;
use super::damage::DamageCalculator;
use super::listener::{CombatListener, NoopCombatListener};
use super::result::{CombatOutcome, CombatResult};

/// Safety valve for encounters where neither side can finish the other.
pub const MAX_TURNS: u32 = 100;

const DAMAGE_OVER_TIME: [StatusType; 2] = [StatusType::Poisoned, StatusType::Burning];

/// Runs whole encounters synchronously, one call per encounter.
pub struct CombatEngine {
    calculator: DamageCalculator,
    listener: Box<dyn CombatListener>,
    gold_multiplier: f64,
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CombatEngine {
    pub fn new(gold_multiplier: f64) -> Self {
        Self {
            calculator: DamageCalculator::new(),
            listener: Box::new(NoopCombatListener),
            gold_multiplier,
        }
    }

    pub fn set_listener(&mut self, listener: impl CombatListener + 'static) {
        self.listener = Box::new(listener);
    }

    pub fn gold_multiplier(&self) -> f64 {
        self.gold_multiplier
    }

    /// Fights every living enemy in `room` until one side falls or the turn
    /// cap is hit. Rewards are granted to the player only on victory.
    pub fn run_combat(
        &mut self,
        player: &mut Player,
        room: &mut Room,
        rng: &mut GameRng,
    ) -> GameResult<CombatResult> {
        if !player.is_alive() {
            return Err(GameError::state("a dead player cannot start combat"));
        }
        if !room.has_alive_enemies() {
            return Err(GameError::state(format!("room {} has no living enemies", room.id())));
        }

        let mut context = CombatContext::new(player, room);
        debug!(
            room = %context.room.id(),
            floor = context.floor(),
            enemies = context.room.alive_enemies().count(),
            "combat started"
        );
        self.listener.on_combat_started(&context);

        while context.player.is_alive()
            && context.room.has_alive_enemies()
            && context.turn < MAX_TURNS
        {
            context.turn += 1;
            self.play_turn(&mut context, rng)?;
        }

        let outcome = if !context.player.is_alive() {
            CombatOutcome::Defeat
        } else if !context.room.has_alive_enemies() {
            CombatOutcome::Victory
        } else {
            CombatOutcome::Interrupted
        };

        if outcome == CombatOutcome::Victory {
            self.grant_rewards(&mut context)?;
        }
        if outcome == CombatOutcome::Defeat {
            self.listener.on_player_died(&context);
        }

        let result = context.build_result(outcome);
        debug!(
            ?outcome,
            turns = result.turns,
            dealt = result.damage_dealt,
            taken = result.damage_taken,
            gold = result.gold_earned,
            "combat ended"
        );
        self.listener.on_combat_ended(&context, &result);
        Ok(result)
    }

    fn play_turn(&mut self, context: &mut CombatContext<'_>, rng: &mut GameRng) -> GameResult<()> {
        for kind in DAMAGE_OVER_TIME {
            let amount = context.player.statuses().damage_over_time(kind);
            if amount == 0 {
                continue;
            }
            context.damage_taken += context.player.health_mut().take_damage(amount)?;
            trace!(turn = context.turn, ?kind, amount, "damage over time");
            if !context.player.is_alive() {
                return Ok(());
            }
        }

        let regeneration = context.player.statuses().healing_over_time();
        if regeneration > 0 {
            context.player.health_mut().heal(regeneration)?;
        }

        if let Some(target) = context.room.enemies().iter().position(Enemy::is_alive) {
            let enemy = &mut context.room.enemies_mut()[target];
            let attack = self.calculator.player_attack(rng, context.player, enemy)?;
            context.damage_dealt += attack.absorbed;
            if attack.killed {
                context.killed.push(attack.defender.clone());
                context.player.record_kill();
            }
            trace!(
                turn = context.turn,
                target = %attack.defender,
                damage = attack.damage,
                critical = attack.critical,
                "player attack"
            );
            self.listener.on_damage_dealt(context, &attack);
        }

        for index in 0..context.room.enemies().len() {
            if !context.player.is_alive() {
                break;
            }
            let enemy = &context.room.enemies()[index];
            if !enemy.is_alive() {
                continue;
            }
            let attack = self.calculator.enemy_attack(enemy, context.player)?;
            context.damage_taken += attack.absorbed;
            trace!(turn = context.turn, attacker = %attack.attacker, damage = attack.damage, "enemy attack");
            self.listener.on_damage_dealt(context, &attack);
        }

        context.player.statuses_mut().tick();
        for enemy in context.room.enemies_mut() {
            if enemy.is_alive() {
                enemy.statuses_mut().tick();
            }
        }
        Ok(())
    }

    fn grant_rewards(&self, context: &mut CombatContext<'_>) -> GameResult<()> {
        let (gold, experience) = context.killed_enemies().fold((0, 0), |(gold, xp), enemy| {
            (
                gold + scale_stat(enemy.gold_reward(), self.gold_multiplier),
                xp + enemy.experience_reward(),
            )
        });
        context.gold_earned = gold;
        context.experience_earned = experience;
        context.player.inventory_mut().add_gold(gold)?;
        context.levels_gained = context.player.add_experience(experience)?;
        Ok(())
    }
}
