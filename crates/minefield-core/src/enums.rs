//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game lifecycle phase (the engine's internal state machine).
///
/// `Playing` is the only ticking phase. `Ended` keeps the final game state
/// inspectable until it is replaced by a new or loaded game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game running. A prepared-but-unstarted game also sits here.
    #[default]
    Idle,
    /// Ticks advance the simulation.
    Playing,
    /// Game suspended; ticks are ignored.
    Paused,
    /// Collision occurred or the host ended the game.
    Ended,
}

/// Host-UI lifecycle marker, updated by the host in response to engine
/// events. Never persisted and never written by the engine itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    MainMenu,
    Play,
    Paused,
    Over,
}

/// Logical movement direction for the submarine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order (also the input-handler slot order).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
