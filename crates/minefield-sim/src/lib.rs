//! Simulation engine for the minefield game.
//!
//! Owns the hecs ECS world, runs the per-tick update pipeline at a fixed
//! tick rate, and produces GameSnapshots for the host.

pub mod engine;
pub mod input;
pub mod persistence;
pub mod systems;
pub mod world_setup;

pub use engine::{GameConfig, GameManager};
pub use input::InputHandler;
pub use minefield_core as core;

#[cfg(test)]
mod tests;
