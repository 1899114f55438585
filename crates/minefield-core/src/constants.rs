//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width in pixels (matches the reference host window).
pub const GAME_WIDTH: f64 = 1280.0;

/// Default arena height in pixels.
pub const GAME_HEIGHT: f64 = 720.0;

// --- Submarine ---

/// Submarine bounding box width (pixels).
pub const SUBMARINE_WIDTH: f64 = 80.0;

/// Submarine bounding box height (pixels).
pub const SUBMARINE_HEIGHT: f64 = 40.0;

/// Displacement per held direction per tick (pixels). 240 px/s at 30Hz.
pub const SUBMARINE_STEP: f64 = 8.0;

// --- Mines ---

/// Mine bounding box width (pixels).
pub const MINE_WIDTH: f64 = 40.0;

/// Mine bounding box height (pixels).
pub const MINE_HEIGHT: f64 = 40.0;

/// Mine descent per tick (pixels). A mine crosses the default arena in ~6s.
pub const MINE_DESCENT_STEP: f64 = 4.0;

/// Ticks between mine spawns (~2 per second at 30Hz).
pub const MINE_SPAWN_INTERVAL_TICKS: u64 = 15;
