//! Held-direction tracking shared between the input context and the tick loop.

use std::sync::Mutex;

use minefield_core::enums::Direction;

/// Tracks which of the four movement directions are currently held.
///
/// Press/release notifications may arrive from a thread other than the
/// game loop; the interior mutex makes every read and mutation atomic with
/// respect to the others. The host calls [`InputHandler::clear`] whenever
/// control leaves gameplay (pause, menu, game end) so a key released
/// outside the play context cannot leave a direction stuck.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// One slot per direction, in `Direction::ALL` order.
    held: Mutex<[bool; 4]>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, direction: Direction) {
        if let Ok(mut held) = self.held.lock() {
            held[direction as usize] = true;
        }
    }

    pub fn release(&self, direction: Direction) {
        if let Ok(mut held) = self.held.lock() {
            held[direction as usize] = false;
        }
    }

    /// Reset all directions to inactive, regardless of prior press history.
    pub fn clear(&self) {
        if let Ok(mut held) = self.held.lock() {
            *held = [false; 4];
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held
            .lock()
            .map(|held| held[direction as usize])
            .unwrap_or(false)
    }

    /// Directions currently held, in `Direction::ALL` order.
    pub fn active(&self) -> Vec<Direction> {
        let held = self.held.lock().map(|held| *held).unwrap_or_default();
        Direction::ALL
            .into_iter()
            .filter(|d| held[*d as usize])
            .collect()
    }

    /// Net movement sign per axis as (dx, dy), each in {-1.0, 0.0, 1.0}.
    /// Opposite held directions cancel.
    pub fn axes(&self) -> (f64, f64) {
        let held = self.held.lock().map(|held| *held).unwrap_or_default();
        let dx = held[Direction::Right as usize] as i8 - held[Direction::Left as usize] as i8;
        let dy = held[Direction::Down as usize] as i8 - held[Direction::Up as usize] as i8;
        (dx as f64, dy as f64)
    }
}
