//! Tests for the game manager lifecycle, update pipeline, and persistence.

use std::sync::Arc;

use minefield_core::commands::GameCommand;
use minefield_core::components::{Mine, Submarine};
use minefield_core::enums::{Direction, GamePhase};
use minefield_core::events::GameEvent;
use minefield_core::state::GameState;
use minefield_core::types::Point2D;

use crate::engine::{GameConfig, GameManager};
use crate::input::InputHandler;
use crate::systems::{cleanup, collision};
use crate::{persistence, systems};

/// Small arena, no spawning interference (interval far beyond test length).
fn quiet_config() -> GameConfig {
    GameConfig {
        seed: 7,
        bounds: Point2D::new(200.0, 100.0),
        submarine_size: Point2D::new(10.0, 10.0),
        mine_size: Point2D::new(10.0, 10.0),
        move_per_tick: 5.0,
        descent_per_tick: 4.0,
        spawn_interval_ticks: 1000,
    }
}

fn new_manager(config: GameConfig) -> (GameManager, Arc<InputHandler>) {
    let input = Arc::new(InputHandler::new());
    let manager = GameManager::new(config, input.clone());
    (manager, input)
}

/// Write a crafted state to a temp save and load it into the manager.
fn install(manager: &mut GameManager, state: &GameState, tag: &str) {
    let dir = std::env::temp_dir().join(format!("minefield_test_{}", tag));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("state.mfg");
    persistence::save_to_file(&path, state).unwrap();
    manager.load_game(&path).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
}

fn has_event(events: &[GameEvent], wanted: &GameEvent) -> bool {
    events.iter().any(|e| e == wanted)
}

// ---- Lifecycle ----

#[test]
fn test_new_game_prepares_state() {
    let (mut manager, _input) = new_manager(quiet_config());
    assert!(!manager.has_game_state());

    manager.new_game();
    assert!(manager.has_game_state());
    assert_eq!(manager.phase(), GamePhase::Idle);

    let snap = manager.tick();
    assert!(has_event(&snap.events, &GameEvent::GamePrepared));
    // Not started yet: no per-tick events, time frozen.
    assert!(!has_event(&snap.events, &GameEvent::Updated));
    assert_eq!(snap.time.tick, 0);

    // Submarine centered in the arena, no mines.
    let sub = snap.submarine.expect("submarine must exist");
    assert_eq!(sub.position, Point2D::new(95.0, 45.0));
    assert!(snap.mines.is_empty());
}

#[test]
fn test_start_requires_game_state() {
    let (mut manager, _input) = new_manager(quiet_config());
    manager.start_game();
    assert_eq!(manager.phase(), GamePhase::Idle);

    let snap = manager.tick();
    assert!(snap.events.is_empty());
    assert_eq!(snap.time.tick, 0);
}

#[test]
fn test_lifecycle_transitions() {
    let (mut manager, _input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();
    assert_eq!(manager.phase(), GamePhase::Playing);

    // Redundant start is a no-op.
    manager.start_game();
    assert_eq!(manager.phase(), GamePhase::Playing);

    manager.pause_game();
    assert_eq!(manager.phase(), GamePhase::Paused);

    manager.continue_game();
    assert_eq!(manager.phase(), GamePhase::Playing);

    manager.end_game();
    assert_eq!(manager.phase(), GamePhase::Ended);
    assert!(manager.has_game_state(), "ended game stays inspectable");

    // A dead game cannot be resumed, only replaced.
    manager.start_game();
    assert_eq!(manager.phase(), GamePhase::Ended);
    manager.pause_game();
    assert_eq!(manager.phase(), GamePhase::Ended);
}

#[test]
fn test_end_game_while_idle_is_noop() {
    let (mut manager, _input) = new_manager(quiet_config());
    manager.end_game();
    assert_eq!(manager.phase(), GamePhase::Idle);
    assert!(manager.drain_events().is_empty());
}

#[test]
fn test_pause_stops_tick_delivery() {
    let (mut manager, input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();
    input.press(Direction::Right);
    manager.tick();

    manager.pause_game();
    let frozen = manager.game_state().unwrap();
    let frozen_tick = manager.time().tick;

    for _ in 0..3 {
        let snap = manager.tick();
        assert!(snap.events.is_empty(), "no events while paused");
    }
    assert_eq!(manager.time().tick, frozen_tick);
    assert_eq!(manager.game_state().unwrap(), frozen);
}

#[test]
fn test_continue_resumes_time() {
    let (mut manager, _input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();
    manager.tick();
    manager.tick();

    manager.pause_game();
    manager.tick();
    assert_eq!(manager.time().tick, 2);

    manager.continue_game();
    manager.tick();
    assert_eq!(manager.time().tick, 3);
}

// ---- Movement ----

#[test]
fn test_submarine_clamps_to_bounds() {
    let (mut manager, input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();

    input.press(Direction::Left);
    input.press(Direction::Up);
    for _ in 0..60 {
        manager.tick();
    }
    let sub = manager.game_state().unwrap().submarine;
    assert_eq!(sub.position, Point2D::new(0.0, 0.0));

    input.clear();
    input.press(Direction::Right);
    input.press(Direction::Down);
    for _ in 0..60 {
        manager.tick();
    }
    let sub = manager.game_state().unwrap().submarine;
    // bounds - size on both axes.
    assert_eq!(sub.position, Point2D::new(190.0, 90.0));
}

#[test]
fn test_opposite_directions_cancel() {
    let (mut manager, input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();

    input.press(Direction::Up);
    input.press(Direction::Down);
    input.press(Direction::Left);
    manager.tick();

    let sub = manager.game_state().unwrap().submarine;
    assert_eq!(sub.position, Point2D::new(90.0, 45.0));
}

#[test]
fn test_diagonal_movement_combines_axes() {
    let (mut manager, input) = new_manager(quiet_config());
    manager.new_game();
    manager.start_game();

    input.press(Direction::Right);
    input.press(Direction::Down);
    manager.tick();

    let sub = manager.game_state().unwrap().submarine;
    assert_eq!(sub.position, Point2D::new(100.0, 50.0));
}

// ---- Spawning and descent ----

#[test]
fn test_spawn_cadence_and_descent() {
    let config = GameConfig {
        spawn_interval_ticks: 5,
        ..quiet_config()
    };
    let (mut manager, _input) = new_manager(config);
    manager.new_game();
    manager.start_game();

    let mut spawned = Vec::new();
    for _ in 0..6 {
        let snap = manager.tick();
        for event in &snap.events {
            if let GameEvent::MineAdded { mine } = event {
                spawned.push(mine.clone());
            }
        }
    }

    // First mine appears once the schedule fires, at the top edge.
    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].position.y, 0.0);
    assert!(spawned[0].position.x >= 0.0 && spawned[0].position.x < 190.0);
    assert_eq!(spawned[0].id, 1);

    // One more tick: exactly one descent step.
    let snap = manager.tick();
    assert_eq!(snap.mines.len(), 1);
    assert_eq!(snap.mines[0].position.y, 4.0);

    // Second mine arrives five ticks after the first.
    let mut adds = 0;
    for _ in 0..4 {
        let snap = manager.tick();
        adds += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::MineAdded { .. }))
            .count();
    }
    assert_eq!(adds, 1);
}

#[test]
fn test_mine_ids_ascend_in_spawn_order() {
    let config = GameConfig {
        spawn_interval_ticks: 1,
        ..quiet_config()
    };
    let (mut manager, _input) = new_manager(config);
    manager.new_game();
    manager.start_game();

    for _ in 0..10 {
        manager.tick();
    }
    let mines = manager.game_state().unwrap().mines;
    assert!(!mines.is_empty());
    for pair in mines.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

// ---- Collision and evasion ----

#[test]
fn test_rects_overlap() {
    let size = Point2D::new(10.0, 10.0);
    // Overlapping rectangles.
    assert!(collision::rects_overlap(
        Point2D::new(0.0, 0.0),
        size,
        Point2D::new(5.0, 5.0),
        size
    ));
    // Disjoint rectangles.
    assert!(!collision::rects_overlap(
        Point2D::new(0.0, 0.0),
        size,
        Point2D::new(20.0, 20.0),
        size
    ));
    // Touching edges do not overlap.
    assert!(!collision::rects_overlap(
        Point2D::new(0.0, 0.0),
        size,
        Point2D::new(10.0, 0.0),
        size
    ));
    // Overlap on one axis only is not a collision.
    assert!(!collision::rects_overlap(
        Point2D::new(0.0, 0.0),
        size,
        Point2D::new(5.0, 30.0),
        size
    ));
}

#[test]
fn test_collision_ends_game_and_short_circuits() {
    let (mut manager, _input) = new_manager(quiet_config());
    let size = Point2D::new(10.0, 10.0);
    let state = GameState {
        submarine: Submarine::new(Point2D::new(50.0, 50.0), size),
        // Descends onto the submarine this tick.
        mines: vec![
            Mine::new(1, Point2D::new(50.0, 42.0), size),
            // Would be pruned this tick, but collision short-circuits first.
            Mine::new(2, Point2D::new(150.0, 96.0), size),
        ],
    };
    install(&mut manager, &state, "collision");
    manager.start_game();

    let snap = manager.tick();
    assert_eq!(manager.phase(), GamePhase::Ended);
    assert!(has_event(&snap.events, &GameEvent::GameEnded));
    assert!(!has_event(&snap.events, &GameEvent::Updated));

    // Evasion pruning was skipped: both mines survive into the final state.
    let ended = manager.game_state().unwrap();
    assert_eq!(ended.mines.len(), 2);
    assert_eq!(ended.mines[0].position.y, 46.0);
    assert_eq!(ended.mines[1].position.y, 100.0);

    // The dead game no longer ticks.
    let snap = manager.tick();
    assert!(snap.events.is_empty());
    assert_eq!(manager.game_state().unwrap(), ended);
}

#[test]
fn test_no_overlap_keeps_playing() {
    let (mut manager, _input) = new_manager(quiet_config());
    let size = Point2D::new(10.0, 10.0);
    let state = GameState {
        submarine: Submarine::new(Point2D::new(0.0, 0.0), size),
        mines: vec![Mine::new(1, Point2D::new(20.0, 20.0), size)],
    };
    install(&mut manager, &state, "no_overlap");
    manager.start_game();

    let snap = manager.tick();
    assert_eq!(manager.phase(), GamePhase::Playing);
    assert!(has_event(&snap.events, &GameEvent::Updated));
    assert!(!has_event(&snap.events, &GameEvent::GameEnded));
    // The mine keeps descending.
    assert_eq!(snap.mines[0].position.y, 24.0);
}

#[test]
fn test_evasion_prunes_mines_past_bottom() {
    let (mut manager, _input) = new_manager(quiet_config());
    let size = Point2D::new(10.0, 10.0);
    let state = GameState {
        submarine: Submarine::new(Point2D::new(95.0, 45.0), size),
        mines: vec![Mine::new(1, Point2D::new(150.0, 95.0), size)],
    };
    install(&mut manager, &state, "evasion");
    manager.start_game();

    // 95 → 99: still inside.
    let snap = manager.tick();
    assert_eq!(snap.mines.len(), 1);
    assert_eq!(snap.mines[0].position.y, 99.0);

    // 99 → 103: past the bottom edge, removed without penalty.
    let snap = manager.tick();
    assert!(snap.mines.is_empty());
    assert_eq!(manager.phase(), GamePhase::Playing);
    assert!(has_event(&snap.events, &GameEvent::Updated));
}

#[test]
fn test_cleanup_removes_exactly_bottom_reachers() {
    let mut world = hecs::World::new();
    let size = Point2D::new(10.0, 10.0);
    world.spawn((Mine::new(1, Point2D::new(0.0, 99.9), size),));
    world.spawn((Mine::new(2, Point2D::new(0.0, 100.0), size),));
    world.spawn((Mine::new(3, Point2D::new(0.0, 140.0), size),));

    let mut buffer = Vec::new();
    let evaded = cleanup::run(&mut world, 100.0, &mut buffer);
    assert_eq!(evaded, 2);

    let remaining: Vec<u32> = world
        .query::<&Mine>()
        .iter()
        .map(|(_, m)| m.id)
        .collect();
    assert_eq!(remaining, vec![1]);
}

// ---- Persistence through the manager ----

#[test]
fn test_save_load_roundtrip_via_manager() {
    let config = GameConfig {
        bounds: Point2D::new(1280.0, 720.0),
        ..quiet_config()
    };
    let (mut manager, _input) = new_manager(config.clone());
    let size = Point2D::new(10.0, 10.0);
    let state = GameState {
        submarine: Submarine::new(Point2D::new(50.0, 50.0), size),
        mines: vec![
            Mine::new(1, Point2D::new(10.0, 0.0), size),
            Mine::new(2, Point2D::new(200.0, 0.0), size),
        ],
    };
    install(&mut manager, &state, "roundtrip_install");

    let dir = std::env::temp_dir().join("minefield_test_manager_roundtrip");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("slot.mfg");
    manager.save_game(&path).unwrap();

    let (mut other, _other_input) = new_manager(config);
    other.load_game(&path).unwrap();
    assert_eq!(other.game_state().unwrap(), state);
    assert!(has_event(&other.drain_events(), &GameEvent::GamePrepared));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_load_preserves_state() {
    let (mut manager, _input) = new_manager(quiet_config());
    manager.new_game();
    manager.drain_events();
    let before = manager.game_state().unwrap();

    let missing = std::env::temp_dir().join("minefield_test_nope/missing.mfg");
    match manager.load_game(&missing) {
        Err(persistence::LoadError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other),
    }

    assert_eq!(manager.game_state().unwrap(), before);
    assert_eq!(manager.phase(), GamePhase::Idle);
    assert!(manager.drain_events().is_empty(), "no GamePrepared on failure");
}

#[test]
fn test_save_without_game_fails() {
    let (manager, _input) = new_manager(quiet_config());
    let path = std::env::temp_dir().join("minefield_test_unused.mfg");
    assert!(matches!(
        manager.save_game(&path),
        Err(persistence::SaveError::NoActiveGame)
    ));
}

// ---- Events ----

#[test]
fn test_event_order_within_tick() {
    let config = GameConfig {
        spawn_interval_ticks: 1,
        ..quiet_config()
    };
    let (mut manager, _input) = new_manager(config);
    manager.new_game();
    manager.start_game();

    let snap = manager.tick();
    assert_eq!(snap.events, vec![GameEvent::GamePrepared, GameEvent::Updated]);

    let snap = manager.tick();
    assert_eq!(snap.events.len(), 2);
    assert!(matches!(snap.events[0], GameEvent::MineAdded { .. }));
    assert_eq!(snap.events[1], GameEvent::Updated);
}

#[test]
fn test_commands_drive_input_and_lifecycle() {
    let (mut manager, input) = new_manager(quiet_config());
    manager.apply_command(GameCommand::NewGame);
    manager.apply_command(GameCommand::StartGame);
    assert_eq!(manager.phase(), GamePhase::Playing);

    manager.apply_command(GameCommand::Press {
        direction: Direction::Left,
    });
    manager.apply_command(GameCommand::Press {
        direction: Direction::Up,
    });
    assert_eq!(input.active().len(), 2);

    manager.apply_command(GameCommand::ClearInput);
    assert!(input.active().is_empty());

    manager.apply_command(GameCommand::PauseGame);
    assert_eq!(manager.phase(), GamePhase::Paused);
    manager.apply_command(GameCommand::ContinueGame);
    assert_eq!(manager.phase(), GamePhase::Playing);
    manager.apply_command(GameCommand::EndGame);
    assert_eq!(manager.phase(), GamePhase::Ended);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = GameConfig {
        seed: 12345,
        spawn_interval_ticks: 3,
        ..quiet_config()
    };
    let (mut a, _ia) = new_manager(config.clone());
    let (mut b, _ib) = new_manager(config);
    a.new_game();
    b.new_game();
    a.start_game();
    b.start_game();

    for _ in 0..100 {
        let snap_a = a.tick();
        let snap_b = b.tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let make = |seed| GameConfig {
        seed,
        spawn_interval_ticks: 2,
        ..quiet_config()
    };
    let (mut a, _ia) = new_manager(make(111));
    let (mut b, _ib) = new_manager(make(222));
    a.new_game();
    b.new_game();
    a.start_game();
    b.start_game();

    let mut diverged = false;
    for _ in 0..50 {
        let json_a = serde_json::to_string(&a.tick()).unwrap();
        let json_b = serde_json::to_string(&b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should place mines differently");
}

// ---- Snapshot building ----

#[test]
fn test_snapshot_reflects_world() {
    let mut world = hecs::World::new();
    let size = Point2D::new(10.0, 10.0);
    world.spawn((Submarine::new(Point2D::new(1.0, 2.0), size),));
    // Spawn out of id order; the snapshot must sort.
    world.spawn((Mine::new(5, Point2D::new(0.0, 0.0), size),));
    world.spawn((Mine::new(2, Point2D::new(3.0, 4.0), size),));

    let state = systems::snapshot::build_game_state(&world).unwrap();
    assert_eq!(state.submarine.position, Point2D::new(1.0, 2.0));
    assert_eq!(
        state.mines.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![2, 5]
    );

    let empty = hecs::World::new();
    assert!(systems::snapshot::build_game_state(&empty).is_none());
}
