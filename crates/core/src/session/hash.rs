use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::GameSession;

impl GameSession {
    /// Stable digest of everything the decision sequence determines.
    /// Wall-clock timestamps are left out.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.info.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(self.state as u8);
        hasher.write_u8(self.paused_from.map_or(0, |state| state as u8 + 1));
        hasher.write_u8(self.end_reason.map_or(0, |reason| reason as u8 + 1));

        let player = &self.player;
        hasher.write_i32(player.health().current());
        hasher.write_i32(player.health().maximum());
        hasher.write_u32(player.level());
        hasher.write_i32(player.experience());
        hasher.write_i32(player.gold());
        hasher.write_i32(player.effective_attack());
        hasher.write_i32(player.effective_defense());
        hasher.write_u32(player.enemies_killed());
        for effect in player.statuses().iter() {
            hasher.write_u8(effect.kind() as u8);
            hasher.write_u32(effect.remaining());
            hasher.write_u32(effect.stacks());
        }
        for item in player.inventory().items() {
            hasher.write(item.id.as_str().as_bytes());
        }
        for item in player.inventory().equipped_items() {
            hasher.write_u8(item.item_type as u8);
            hasher.write(item.id.as_str().as_bytes());
        }

        hasher.write_u32(self.dungeon.current_floor_number());
        hasher.write_u32(self.dungeon.deepest_floor());
        for floor in self.dungeon.generated_floors() {
            hasher.write_u64(floor.cursor() as u64);
            hasher.write(&floor.canonical_bytes());
            for room in floor.rooms() {
                hasher.write_u8(u8::from(room.is_visited()) | (u8::from(room.is_cleared()) << 1));
                for enemy in room.enemies() {
                    hasher.write_i32(enemy.health().current());
                }
            }
        }

        let stats = &self.statistics;
        hasher.write_u32(stats.rooms_cleared);
        hasher.write_u32(stats.combat_turns);
        hasher.write_i64(stats.damage_dealt);
        hasher.write_i64(stats.damage_taken);
        hasher.write_i64(stats.gold_spent);
        hasher.finish()
    }
}
