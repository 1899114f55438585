//! Headless session driver for the minefield simulation.
//!
//! Exercises a full lifecycle against the real game loop thread — new game,
//! steering input, pause, save, load, continue — and reports what the
//! simulation did. No rendering, no windowing.
//!
//! Usage:
//!   cargo run -p minefield-app
//!   RUST_LOG=info cargo run -p minefield-app

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use minefield_app::game_loop;
use minefield_app::state::{view_state_for, GameLoopCommand};
use minefield_core::commands::GameCommand;
use minefield_core::enums::{Direction, GamePhase};
use minefield_core::events::GameEvent;
use minefield_core::state::GameSnapshot;
use minefield_sim::engine::GameConfig;
use minefield_sim::input::InputHandler;
use minefield_sim::persistence::SAVE_EXTENSION;

/// Event counters accumulated over a session.
#[derive(Debug, Default)]
struct Tally {
    ticks: u64,
    prepared: u32,
    mines_added: u32,
    updates: u32,
    ended: u32,
    last_phase: Option<GamePhase>,
}

impl Tally {
    /// Fold one snapshot into the tally, reporting phase changes.
    fn absorb(&mut self, snapshot: &GameSnapshot) {
        self.ticks = snapshot.time.tick;
        for event in &snapshot.events {
            match event {
                GameEvent::GamePrepared => self.prepared += 1,
                GameEvent::MineAdded { .. } => self.mines_added += 1,
                GameEvent::Updated => self.updates += 1,
                GameEvent::GameEnded => self.ended += 1,
            }
        }
        if self.last_phase != Some(snapshot.phase) {
            self.last_phase = Some(snapshot.phase);
            println!(
                "  phase -> {:?} (view: {:?})",
                snapshot.phase,
                view_state_for(snapshot.phase)
            );
        }
    }
}

fn main() {
    env_logger::init();
    println!("=== Minefield Session Driver ===");

    let input = Arc::new(InputHandler::new());
    let (snapshot_tx, snapshot_rx) = mpsc::channel::<GameSnapshot>();
    let latest = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(
        GameConfig::default(),
        input.clone(),
        snapshot_tx,
        latest.clone(),
    );

    let send = |cmd: GameLoopCommand| {
        if cmd_tx.send(cmd).is_err() {
            eprintln!("game loop is gone");
            std::process::exit(1);
        }
    };

    let mut tally = Tally::default();
    let drain = |tally: &mut Tally| {
        while let Ok(snapshot) = snapshot_rx.try_recv() {
            tally.absorb(&snapshot);
        }
    };

    // -- New game, steer around for a bit --
    println!("-- new game --");
    send(GameLoopCommand::Game(GameCommand::NewGame));
    send(GameLoopCommand::Game(GameCommand::StartGame));

    input.press(Direction::Right);
    input.press(Direction::Down);
    std::thread::sleep(Duration::from_millis(500));
    input.release(Direction::Down);
    std::thread::sleep(Duration::from_millis(250));
    drain(&mut tally);

    // -- Pause and save --
    println!("-- pause + save --");
    send(GameLoopCommand::Game(GameCommand::PauseGame));
    // Control leaves the play context: held keys must not stick.
    input.clear();

    let save_path = std::env::temp_dir()
        .join("minefield-session")
        .join(format!("autosave.{}", SAVE_EXTENSION));
    send(GameLoopCommand::SaveGame {
        path: save_path.clone(),
    });
    std::thread::sleep(Duration::from_millis(200));
    drain(&mut tally);

    if !save_path.exists() {
        eprintln!("save file was not written: {}", save_path.display());
        std::process::exit(1);
    }
    println!("  saved to {}", save_path.display());

    // -- Load it back and keep playing --
    println!("-- load + continue --");
    send(GameLoopCommand::LoadGame {
        path: save_path.clone(),
    });
    send(GameLoopCommand::Game(GameCommand::StartGame));
    std::thread::sleep(Duration::from_secs(2));
    drain(&mut tally);

    // -- Wind down --
    if tally.ended > 0 {
        println!("-- collision ended the game --");
    } else {
        println!("-- time up, ending game --");
        send(GameLoopCommand::Game(GameCommand::EndGame));
    }
    input.clear();
    std::thread::sleep(Duration::from_millis(100));
    drain(&mut tally);
    send(GameLoopCommand::Shutdown);

    // -- Summary --
    println!("=== Session summary ===");
    println!("  ticks:       {}", tally.ticks);
    println!("  prepared:    {}", tally.prepared);
    println!("  mines added: {}", tally.mines_added);
    println!("  updates:     {}", tally.updates);
    println!("  game ended:  {}", tally.ended);
    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            if let Some(sub) = &snapshot.submarine {
                println!(
                    "  submarine:   ({:.0}, {:.0}), {} mine(s) on screen",
                    sub.position.x,
                    sub.position.y,
                    snapshot.mines.len()
                );
            }
        }
    }

    // Two games were prepared (new + loaded) and the simulation ran.
    let healthy = tally.prepared == 2 && tally.updates > 0;
    if !healthy {
        eprintln!("session did not behave as expected");
        std::process::exit(1);
    }
    println!("OK");
}
