//! Snapshot system: queries the world and builds the read models.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use minefield_core::components::{Mine, Submarine};
use minefield_core::enums::GamePhase;
use minefield_core::events::GameEvent;
use minefield_core::state::{GameSnapshot, GameState};
use minefield_core::types::SimTime;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        submarine: find_submarine(world),
        mines: collect_mines(world),
        events,
    }
}

/// Materialize the persistable state, if a game exists.
pub fn build_game_state(world: &World) -> Option<GameState> {
    let submarine = find_submarine(world)?;
    Some(GameState {
        submarine,
        mines: collect_mines(world),
    })
}

fn find_submarine(world: &World) -> Option<Submarine> {
    world
        .query::<&Submarine>()
        .iter()
        .next()
        .map(|(_, sub)| sub.clone())
}

/// All mines, sorted by spawn id for a stable order.
fn collect_mines(world: &World) -> Vec<Mine> {
    let mut mines: Vec<Mine> = world
        .query::<&Mine>()
        .iter()
        .map(|(_, mine)| mine.clone())
        .collect();
    mines.sort_by_key(|m| m.id);
    mines
}
