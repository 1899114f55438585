//! Per-tick systems, run by the engine in a fixed order.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
