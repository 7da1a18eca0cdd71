//! Pointer sources
//!
//! The player always steers toward "the pointer". Where that pointer comes
//! from is up to the caller: a fixed point, a scripted path, or the autopilot
//! that plays the game on its own.

use glam::DVec2;

use crate::consts::{DEFAULT_X, DEFAULT_Y};
use crate::sim::{Body, GameState};

/// Supplies the pointer position each frame, in canvas coordinates
pub trait PointerSource {
    fn pointer_position(&mut self, state: &GameState) -> DVec2;
}

/// Pointer parked at one spot
#[derive(Debug, Clone, Copy)]
pub struct FixedPointer(pub DVec2);

impl PointerSource for FixedPointer {
    fn pointer_position(&mut self, _state: &GameState) -> DVec2 {
        self.0
    }
}

/// Pointer that visits a list of positions, one per frame, looping
#[derive(Debug, Clone)]
pub struct ScriptedPointer {
    path: Vec<DVec2>,
    index: usize,
}

impl ScriptedPointer {
    pub fn new(path: Vec<DVec2>) -> Self {
        Self { path, index: 0 }
    }
}

impl PointerSource for ScriptedPointer {
    fn pointer_position(&mut self, _state: &GameState) -> DVec2 {
        if self.path.is_empty() {
            return DVec2::new(DEFAULT_X, DEFAULT_Y);
        }
        let pos = self.path[self.index % self.path.len()];
        self.index = (self.index + 1) % self.path.len();
        pos
    }
}

/// Demo mode: chase the nearest edible food, back away from nearby hazards
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Extra clearance kept between the player and a hazard
    pub hazard_margin: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            hazard_margin: 0.05,
        }
    }
}

impl PointerSource for Autopilot {
    fn pointer_position(&mut self, state: &GameState) -> DVec2 {
        let player = &state.player;

        // Closest hazard inside the danger zone wins over any food
        let threat = state
            .hazards
            .iter()
            .filter(|h| player.distance_to(*h) < player.radius() + h.radius() + self.hazard_margin)
            .min_by(|a, b| {
                player
                    .distance_to(*a)
                    .partial_cmp(&player.distance_to(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(hazard) = threat {
            return player.pos() + (player.pos() - hazard.pos());
        }

        // Only food we can actually cover is worth chasing
        state
            .food
            .iter()
            .filter(|f| f.radius() < player.radius())
            .min_by(|a, b| {
                player
                    .distance_to(*a)
                    .partial_cmp(&player.distance_to(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|f| f.pos())
            .unwrap_or(DVec2::new(DEFAULT_X, DEFAULT_Y))
    }
}
