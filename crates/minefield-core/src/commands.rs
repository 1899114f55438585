//! Host commands sent to the simulation.
//!
//! Commands are forwarded over a channel and applied at the next tick
//! boundary. Redundant lifecycle commands (pausing while not playing,
//! starting while already playing) are tolerated as no-ops.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All lifecycle and input actions the host can issue.
///
/// Save/load carry a resource path and report failures to the caller, so
/// they travel on the game-loop command channel rather than here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    // --- Lifecycle ---
    /// Discard any current game and prepare a fresh one.
    NewGame,
    /// Begin (or resume) ticking, if a game state exists.
    StartGame,
    /// Resume from pause. Identical to StartGame; kept as its own command
    /// so host menus read naturally.
    ContinueGame,
    /// Suspend ticking.
    PauseGame,
    /// Stop the game, keeping the final state inspectable.
    EndGame,

    // --- Direction input ---
    /// A movement direction was pressed.
    Press { direction: Direction },
    /// A movement direction was released.
    Release { direction: Direction },
    /// Reset all held directions (control left the play context).
    ClearInput,
}
