//! Game loop thread — runs the simulation at the tick rate and publishes
//! snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; every snapshot is sent to the
//! host on a channel and also stored in shared state for synchronous
//! polling. Pause gating lives in the engine, so the loop ticks
//! unconditionally and a paused game simply produces event-free snapshots.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use minefield_core::constants::TICK_RATE;
use minefield_core::state::GameSnapshot;
use minefield_sim::engine::{GameConfig, GameManager};
use minefield_sim::input::InputHandler;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: GameConfig,
    input: Arc<InputHandler>,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("minefield-game-loop".into())
        .spawn(move || {
            run_game_loop(config, input, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    input: Arc<InputHandler>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut manager = GameManager::new(config, input);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Game(cmd)) => manager.apply_command(cmd),
                Ok(GameLoopCommand::SaveGame { path }) => {
                    if let Err(e) = manager.save_game(&path) {
                        log::warn!("failed to save game to {}: {}", path.display(), e);
                    }
                }
                Ok(GameLoopCommand::LoadGame { path }) => {
                    if let Err(e) = manager.load_game(&path) {
                        log::warn!("failed to load game from {}: {}", path.display(), e);
                    }
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine gates on its own phase)
        let snapshot = manager.tick();

        // 3. Emit the snapshot; a dropped receiver is not fatal, polling
        //    through shared state still works
        let _ = snapshot_tx.send(snapshot.clone());

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
