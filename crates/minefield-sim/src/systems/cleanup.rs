//! Cleanup system: removes mines that evaded through the bottom edge.

use hecs::{Entity, World};

use minefield_core::components::Mine;

/// Despawn every mine whose y position has reached the bottom bound.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number of mines removed.
pub fn run(world: &mut World, bounds_y: f64, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    for (entity, mine) in world.query_mut::<&Mine>() {
        if mine.position.y >= bounds_y {
            despawn_buffer.push(entity);
        }
    }

    let evaded = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    evaded
}
