//! Application state shared between the host and the game loop thread.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use minefield_core::commands::GameCommand;
use minefield_core::enums::{GamePhase, ViewState};
use minefield_core::state::GameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A lifecycle or input command to forward to the game manager.
    Game(GameCommand),
    /// Persist the current game to the given path. Failures are logged and
    /// leave the game untouched.
    SaveGame { path: PathBuf },
    /// Replace the current game with the one stored at the given path.
    /// Failures are logged and leave the game untouched.
    LoadGame { path: PathBuf },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host-side state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that doesn't exist before the loop starts
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The host-UI lifecycle marker matching an engine phase.
pub fn view_state_for(phase: GamePhase) -> ViewState {
    match phase {
        GamePhase::Idle => ViewState::MainMenu,
        GamePhase::Playing => ViewState::Play,
        GamePhase::Paused => ViewState::Paused,
        GamePhase::Ended => ViewState::Over,
    }
}
