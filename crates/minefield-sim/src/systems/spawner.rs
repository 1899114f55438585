//! Mine spawning system — drops a new mine on a fixed tick cadence.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use minefield_core::events::GameEvent;

use crate::engine::GameConfig;
use crate::world_setup;

/// Tracks when the next mine is due.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    /// Ticks between spawns (at least 1).
    pub interval_ticks: u64,
    /// Tick at which the next mine spawns.
    pub next_spawn_tick: u64,
}

impl SpawnSchedule {
    pub fn new(interval_ticks: u64) -> Self {
        let interval_ticks = interval_ticks.max(1);
        Self {
            interval_ticks,
            next_spawn_tick: interval_ticks,
        }
    }
}

/// Check the schedule and spawn a mine if one is due, notifying observers.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut SpawnSchedule,
    next_mine_id: &mut u32,
    current_tick: u64,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    if current_tick < schedule.next_spawn_tick {
        return;
    }
    schedule.next_spawn_tick = current_tick + schedule.interval_ticks;

    let mine = world_setup::spawn_mine(world, rng, next_mine_id, config);
    events.push(GameEvent::MineAdded { mine });
}
