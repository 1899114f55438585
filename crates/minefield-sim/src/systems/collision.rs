//! Axis-aligned collision test between the submarine and the mines.

use hecs::World;

use minefield_core::components::{Mine, Submarine};
use minefield_core::types::Point2D;

/// Overlap test between two rectangles given as top-left + size.
/// Touching edges do not count as overlap.
pub fn rects_overlap(a_pos: Point2D, a_size: Point2D, b_pos: Point2D, b_size: Point2D) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && b_pos.x < a_pos.x + a_size.x
        && a_pos.y < b_pos.y + b_size.y
        && b_pos.y < a_pos.y + a_size.y
}

/// Test every mine against the submarine in spawn order.
/// Returns the id of the first overlapping mine, if any.
pub fn run(world: &World) -> Option<u32> {
    let submarine = world
        .query::<&Submarine>()
        .iter()
        .next()
        .map(|(_, sub)| sub.clone())?;

    let mut mines: Vec<(u32, Point2D, Point2D)> = world
        .query::<&Mine>()
        .iter()
        .map(|(_, mine)| (mine.id, mine.position, mine.size))
        .collect();
    mines.sort_by_key(|&(id, _, _)| id);

    mines
        .into_iter()
        .find(|&(_, pos, size)| rects_overlap(submarine.position, submarine.size, pos, size))
        .map(|(id, _, _)| id)
}
