//! Entity data for the hecs world.
//!
//! These structs double as ECS components and as the serialized entity
//! model: systems mutate them in place, snapshots and save files clone
//! them out verbatim. Game logic lives in systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// The player-controlled submarine. At most one exists while a game is
/// active; its size is fixed for the entity's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submarine {
    /// Top-left corner of the bounding rectangle.
    pub position: Point2D,
    /// Width/height of the bounding rectangle.
    pub size: Point2D,
}

/// A descending mine. Spawned at the top edge, removed on evasion through
/// the bottom edge or when the game ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mine {
    /// Spawn counter, unique within one game. Ascending id equals spawn
    /// order; snapshots and save files keep mines sorted by it.
    pub id: u32,
    /// Top-left corner of the bounding rectangle.
    pub position: Point2D,
    /// Width/height of the bounding rectangle.
    pub size: Point2D,
}

impl Submarine {
    pub fn new(position: Point2D, size: Point2D) -> Self {
        Self { position, size }
    }
}

impl Mine {
    pub fn new(id: u32, position: Point2D, size: Point2D) -> Self {
        Self { id, position, size }
    }
}
