//! Blob Arena - a blob-eats-blob arcade simulation
//!
//! Core modules:
//! - `sim`: Fixed timestep simulation (sprites, collisions, game state)
//! - `game`: Frame loop wiring the simulation to its collaborators
//! - `renderer`: Renderer seam plus CPU tessellation and command recording
//! - `input`: Pointer sources (fixed, scripted, autopilot)
//! - `random`: Injectable random source
//! - `settings`: Data-driven game balance

pub mod color;
pub mod error;
pub mod game;
pub mod input;
pub mod random;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::{ConfigError, GameError, SpriteError};
pub use game::Game;
pub use random::{RandomSource, SimRng};
pub use settings::{BoundaryPolicy, Tuning};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (50 Hz)
    pub const FRAME_MS: u32 = 20;

    /// Canvas is the unit square, unscaled
    pub const CANVAS_MIN: f64 = 0.0;
    pub const CANVAS_MAX: f64 = 1.0;

    /// Below this speed a disc has no usable direction
    pub const SPEED_EPSILON: f64 = 0.0001;
    /// Below this distance "away from" a point has no usable direction
    pub const AIM_EPSILON: f64 = 0.001;

    /// Default sprite placement and size
    pub const DEFAULT_X: f64 = 0.5;
    pub const DEFAULT_Y: f64 = 0.5;
    pub const DEFAULT_RADIUS: f64 = 0.1;

    /// Star outline: inner/outer vertex deviation from the nominal radius
    pub const STAR_SHARPNESS: f64 = 0.2;
    pub const STAR_MIN_POINTS: u32 = 3;
    pub const STAR_MAX_POINTS: u32 = 1024;

    /// Player defaults
    pub const PLAYER_START_RADIUS: f64 = 0.07;
    pub const PLAYER_STEER_SPEED: f64 = 1.0 / 6.0;

    /// Food defaults
    pub const FOOD_COUNT: usize = 2;
    pub const FOOD_MIN_RADIUS: f64 = 0.03;
    pub const FOOD_MAX_RADIUS: f64 = 0.05;
    pub const FOOD_SPEED: f64 = 0.03;

    /// Hazard defaults
    pub const HAZARD_COUNT: usize = 1;
    pub const HAZARD_POINTS: u32 = 7;
    pub const HAZARD_RADIUS: f64 = 0.05;

    /// Fraction of the food's area the player gains when eating
    pub const EAT_FRACTION: f64 = 0.5;
    /// Fraction of the player's own area lost on touching a hazard
    pub const POISON_FRACTION: f64 = 0.25;

    /// Hue color saturation/brightness (HSB)
    pub const HUE_SATURATION: f32 = 0.7;
    pub const HUE_BRIGHTNESS: f32 = 0.6;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (b - a).length()
}

/// Scale `dir` by `1 / divisor`, or return a random unit vector when the
/// divisor is too small to divide by.
///
/// Every place that turns an offset into a heading goes through this, so no
/// heading is ever NaN or infinite.
pub fn direction_or_random<R: RandomSource + ?Sized>(
    dir: DVec2,
    divisor: f64,
    epsilon: f64,
    rng: &mut R,
) -> DVec2 {
    if divisor < epsilon {
        rng.random_direction()
    } else {
        dir / divisor
    }
}
