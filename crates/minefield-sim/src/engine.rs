//! Simulation engine — the core of the game.
//!
//! `GameManager` owns the hecs world, the lifecycle state machine, and the
//! per-tick update pipeline. Completely headless (no timer or windowing
//! dependency), enabling deterministic testing: the host's tick source
//! calls [`GameManager::tick`] and receives a snapshot.

use std::path::Path;
use std::sync::Arc;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use minefield_core::commands::GameCommand;
use minefield_core::components::Submarine;
use minefield_core::constants::*;
use minefield_core::enums::GamePhase;
use minefield_core::events::GameEvent;
use minefield_core::state::{GameSnapshot, GameState};
use minefield_core::types::{Point2D, SimTime};

use crate::input::InputHandler;
use crate::persistence::{self, LoadError, SaveError};
use crate::systems;
use crate::systems::spawner::SpawnSchedule;
use crate::world_setup;

/// Configuration for a simulation run. All movement/spawn magnitudes are
/// expressed per tick, so the simulation is deterministic given a seed and
/// an input sequence regardless of the host's tick cadence.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for the spawn policy. Same seed = same mine columns.
    pub seed: u64,
    /// Arena width/height in pixels.
    pub bounds: Point2D,
    pub submarine_size: Point2D,
    pub mine_size: Point2D,
    /// Submarine displacement per held direction per tick.
    pub move_per_tick: f64,
    /// Mine descent per tick.
    pub descent_per_tick: f64,
    /// Ticks between mine spawns.
    pub spawn_interval_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: Point2D::new(GAME_WIDTH, GAME_HEIGHT),
            submarine_size: Point2D::new(SUBMARINE_WIDTH, SUBMARINE_HEIGHT),
            mine_size: Point2D::new(MINE_WIDTH, MINE_HEIGHT),
            move_per_tick: SUBMARINE_STEP,
            descent_per_tick: MINE_DESCENT_STEP,
            spawn_interval_ticks: MINE_SPAWN_INTERVAL_TICKS,
        }
    }
}

/// The game manager. Owns the world and all simulation state.
///
/// Lifecycle operations tolerate redundant calls: pausing while not
/// playing, starting while already playing and ending an idle game are all
/// silent no-ops. Persistence failures are returned to the caller and
/// never corrupt in-memory state.
pub struct GameManager {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    input: Arc<InputHandler>,
    spawn_schedule: SpawnSchedule,
    next_mine_id: u32,
    despawn_buffer: Vec<hecs::Entity>,
    pending_events: Vec<GameEvent>,
}

impl GameManager {
    /// Create a new game manager. The input handler is shared with the
    /// host's input context; the manager only ever reads it.
    pub fn new(config: GameConfig, input: Arc<InputHandler>) -> Self {
        let spawn_schedule = SpawnSchedule::new(config.spawn_interval_ticks);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            input,
            spawn_schedule,
            next_mine_id: 1,
            despawn_buffer: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Discard any current game and prepare a fresh one: submarine centered
    /// in the arena, no mines. The game starts ticking only once
    /// [`GameManager::start_game`] is called.
    pub fn new_game(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.spawn_schedule = SpawnSchedule::new(self.config.spawn_interval_ticks);
        self.next_mine_id = 1;
        world_setup::spawn_submarine(&mut self.world, &self.config);

        self.phase = GamePhase::Idle;
        self.pending_events.push(GameEvent::GamePrepared);
        log::info!("new game prepared");
    }

    /// Begin ticking if a game state exists. No-op while already playing,
    /// after the game ended, or without a prepared game.
    pub fn start_game(&mut self) {
        if matches!(self.phase, GamePhase::Idle | GamePhase::Paused) && self.has_game_state() {
            self.phase = GamePhase::Playing;
        }
    }

    /// Resume from pause. Identical to [`GameManager::start_game`].
    pub fn continue_game(&mut self) {
        self.start_game();
    }

    /// Suspend ticking. No-op unless playing.
    pub fn pause_game(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Stop the game. The final state stays inspectable until replaced by
    /// a new or loaded game. Safe to call from any phase, including when
    /// no game exists.
    pub fn end_game(&mut self) {
        self.phase = if self.has_game_state() {
            GamePhase::Ended
        } else {
            GamePhase::Idle
        };
    }

    /// Replace the current game with the one stored at `path`.
    /// On failure the in-memory state is left untouched.
    pub fn load_game(&mut self, path: &Path) -> Result<(), LoadError> {
        let state = persistence::load_from_file(path)?;
        self.install_state(state);

        self.phase = GamePhase::Idle;
        self.pending_events.push(GameEvent::GamePrepared);
        log::info!("game loaded from {}", path.display());
        Ok(())
    }

    /// Persist the current game state verbatim. Never mutates state.
    pub fn save_game(&self, path: &Path) -> Result<(), SaveError> {
        let state = self.game_state().ok_or(SaveError::NoActiveGame)?;
        persistence::save_to_file(path, &state)?;
        log::info!("game saved to {}", path.display());
        Ok(())
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Outside `Playing` nothing moves and no per-tick events
    /// fire; pending lifecycle events still ride along on the snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Apply a host command. Persistence operations take the dedicated
    /// [`GameManager::save_game`]/[`GameManager::load_game`] methods since
    /// they report failures.
    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::NewGame => self.new_game(),
            GameCommand::StartGame => self.start_game(),
            GameCommand::ContinueGame => self.continue_game(),
            GameCommand::PauseGame => self.pause_game(),
            GameCommand::EndGame => self.end_game(),
            GameCommand::Press { direction } => self.input.press(direction),
            GameCommand::Release { direction } => self.input.release(direction),
            GameCommand::ClearInput => self.input.clear(),
        }
    }

    /// Take all events raised since the last tick (or the last drain).
    /// Useful for hosts that drive the manager directly instead of
    /// through snapshots.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Materialize the persistable state, if a game exists.
    pub fn game_state(&self) -> Option<GameState> {
        systems::snapshot::build_game_state(&self.world)
    }

    /// Whether a game state (a submarine entity) currently exists.
    pub fn has_game_state(&self) -> bool {
        self.world.query::<&Submarine>().iter().next().is_some()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Swap in a loaded game state, resetting time and spawn scheduling.
    fn install_state(&mut self, state: GameState) {
        self.world.clear();
        self.time = SimTime::default();
        self.spawn_schedule = SpawnSchedule::new(self.config.spawn_interval_ticks);
        self.next_mine_id = state
            .mines
            .iter()
            .map(|m| m.id)
            .max()
            .map_or(1, |id| id + 1);

        let GameState { submarine, mines } = state;
        self.world.spawn((submarine,));
        for mine in mines {
            self.world.spawn((mine,));
        }
    }

    /// Run all systems in order. A collision short-circuits the tick:
    /// no evasion pruning and no update notification afterwards.
    fn run_systems(&mut self) {
        // 1. Submarine steering from the current input set, clamped to the arena
        let (dx, dy) = self.input.axes();
        systems::movement::steer_submarine(&mut self.world, dx, dy, &self.config);

        // 2. Mine descent
        systems::movement::advance_mines(&mut self.world, self.config.descent_per_tick);

        // 3. Scheduled spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            &mut self.next_mine_id,
            self.time.tick,
            &self.config,
            &mut self.pending_events,
        );

        // 4. Collision ends the game
        if let Some(mine_id) = systems::collision::run(&self.world) {
            self.phase = GamePhase::Ended;
            self.pending_events.push(GameEvent::GameEnded);
            log::info!("submarine hit mine {} at tick {}", mine_id, self.time.tick);
            return;
        }

        // 5. Evaded mines leave through the bottom edge
        let evaded = systems::cleanup::run(
            &mut self.world,
            self.config.bounds.y,
            &mut self.despawn_buffer,
        );
        if evaded > 0 {
            log::debug!("{} mine(s) evaded at tick {}", evaded, self.time.tick);
        }

        // 6. Per-tick update notification
        self.pending_events.push(GameEvent::Updated);
    }
}
