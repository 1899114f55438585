//! Events emitted by the simulation for the host/view layer.
//!
//! Events are collected in order during a tick (or a lifecycle operation)
//! and handed out in the tick's snapshot, so observers see them before the
//! next tick proceeds.

use serde::{Deserialize, Serialize};

use crate::components::Mine;

/// Notifications the engine emits to its observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A game state just became available (new or loaded game).
    GamePrepared,
    /// A mine was spawned this tick. Carries a snapshot of the new mine so
    /// the view layer can attach a fresh visual resource.
    MineAdded { mine: Mine },
    /// A tick completed with the game still running. Observers re-read
    /// submarine/mine state from the snapshot.
    Updated,
    /// The submarine collided with a mine; the game is over.
    GameEnded,
}
