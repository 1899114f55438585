//! Persisted game state and the per-tick snapshot sent to observers.

use serde::{Deserialize, Serialize};

use crate::components::{Mine, Submarine};
use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::SimTime;

/// The serializable unit of persistence: everything a save file captures.
///
/// The submarine is always present — there is no game state without a
/// player entity. Mines are ordered by spawn id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub submarine: Submarine,
    pub mines: Vec<Mine>,
}

/// Complete read model produced after each tick.
///
/// `events` carries this tick's notifications in emission order; lifecycle
/// events raised between ticks ride along on the next snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// `None` while no game state exists.
    pub submarine: Option<Submarine>,
    /// Active mines, sorted by spawn id.
    pub mines: Vec<Mine>,
    pub events: Vec<GameEvent>,
}
