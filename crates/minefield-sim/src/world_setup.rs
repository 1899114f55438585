//! Entity spawn factories for setting up the game world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use minefield_core::components::{Mine, Submarine};
use minefield_core::types::Point2D;

use crate::engine::GameConfig;

/// Spawn the player's submarine centered in the arena.
pub fn spawn_submarine(world: &mut World, config: &GameConfig) -> hecs::Entity {
    let position = Point2D::new(
        (config.bounds.x - config.submarine_size.x) / 2.0,
        (config.bounds.y - config.submarine_size.y) / 2.0,
    );
    world.spawn((Submarine::new(position, config.submarine_size),))
}

/// Spawn a mine at a random column along the top edge.
/// Returns a clone of the new mine for the MineAdded notification.
pub fn spawn_mine(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_mine_id: &mut u32,
    config: &GameConfig,
) -> Mine {
    let id = *next_mine_id;
    *next_mine_id += 1;

    let max_x = config.bounds.x - config.mine_size.x;
    let x = if max_x > 0.0 {
        rng.gen_range(0.0..max_x)
    } else {
        0.0
    };

    let mine = Mine::new(id, Point2D::new(x, 0.0), config.mine_size);
    world.spawn((mine.clone(),));
    mine
}
