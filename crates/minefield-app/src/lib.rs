//! Minefield host application.
//!
//! This crate wires the simulation crates to a real-time tick source: a
//! dedicated game loop thread driven over channels. The binary target is a
//! headless session driver; a rendering host would bind to the same
//! `AppState`/channel surface.

pub mod game_loop;
pub mod state;

pub use minefield_core as core;
