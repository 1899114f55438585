//! Submarine steering and mine descent.
//!
//! The submarine moves by a fixed step per held direction per tick and is
//! clamped so its rectangle stays fully inside the arena. Mines descend by
//! a fixed step per tick.

use hecs::World;

use minefield_core::components::{Mine, Submarine};
use minefield_core::types::Point2D;

use crate::engine::GameConfig;

/// Apply the net input displacement to the submarine and clamp to the arena.
/// `dx`/`dy` are per-axis signs from the input handler (opposites cancel).
pub fn steer_submarine(world: &mut World, dx: f64, dy: f64, config: &GameConfig) {
    for (_entity, sub) in world.query_mut::<&mut Submarine>() {
        sub.position.x += dx * config.move_per_tick;
        sub.position.y += dy * config.move_per_tick;
        clamp_to_bounds(&mut sub.position, sub.size, config.bounds);
    }
}

/// Advance every mine downward by the per-tick descent step.
pub fn advance_mines(world: &mut World, descent_per_tick: f64) {
    for (_entity, mine) in world.query_mut::<&mut Mine>() {
        mine.position.y += descent_per_tick;
    }
}

/// Keep a rectangle of the given size fully inside [0, bounds] on both axes.
pub fn clamp_to_bounds(position: &mut Point2D, size: Point2D, bounds: Point2D) {
    if position.x < 0.0 {
        position.x = 0.0;
    }
    if position.y < 0.0 {
        position.y = 0.0;
    }
    if position.x > bounds.x - size.x {
        position.x = bounds.x - size.x;
    }
    if position.y > bounds.y - size.y {
        position.y = bounds.y - size.y;
    }
}
