//! Game tuning
//!
//! Every gameplay constant the loop uses, loadable from a JSON file. Missing
//! fields fall back to the defaults in `consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::error::ConfigError;

/// What happens to a food blob at the canvas edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Flip the outward velocity component
    #[default]
    Bounce,
    /// Leave one edge, re-enter at the opposite edge
    Wrap,
}

impl BoundaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Bounce => "Bounce",
            BoundaryPolicy::Wrap => "Wrap",
        }
    }
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulated (and paced wall-clock) duration of one tick
    pub frame_ms: u32,
    /// Sleep in `present` so a frame takes `frame_ms` of real time
    pub pace_frames: bool,
    pub background: Color,

    // === Player ===
    pub player_start_radius: f64,
    /// Speed the player steers toward the pointer with (meters/second)
    pub player_steer_speed: f64,
    pub player_color: Color,

    // === Food ===
    pub food_count: usize,
    pub food_min_radius: f64,
    pub food_max_radius: f64,
    pub food_speed: f64,
    pub food_boundary: BoundaryPolicy,

    // === Hazards ===
    pub hazard_count: usize,
    pub hazard_points: u32,
    pub hazard_radius: f64,
    pub hazard_color: Color,

    // === Resolution ===
    /// Share of the eaten food's area the player gains
    pub eat_fraction: f64,
    /// Share of its own area the player loses on touching a hazard
    pub poison_fraction: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            pace_frames: true,
            background: Color::WHITE,

            player_start_radius: PLAYER_START_RADIUS,
            player_steer_speed: PLAYER_STEER_SPEED,
            player_color: Color::RED,

            food_count: FOOD_COUNT,
            food_min_radius: FOOD_MIN_RADIUS,
            food_max_radius: FOOD_MAX_RADIUS,
            food_speed: FOOD_SPEED,
            food_boundary: BoundaryPolicy::Bounce,

            hazard_count: HAZARD_COUNT,
            hazard_points: HAZARD_POINTS,
            hazard_radius: HAZARD_RADIUS,
            hazard_color: Color::MAGENTA,

            eat_fraction: EAT_FRACTION,
            poison_fraction: POISON_FRACTION,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Tuning = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    /// Write tuning as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }

    /// Reject values that would break sprite invariants mid-game
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                name,
                reason: reason.into(),
            }
        }

        if self.frame_ms == 0 {
            return Err(invalid("frame_ms", "must be at least 1"));
        }
        if !(self.player_start_radius > 0.0) {
            return Err(invalid("player_start_radius", "must be positive"));
        }
        if !(self.food_min_radius > 0.0) || self.food_min_radius > self.food_max_radius {
            return Err(invalid(
                "food_min_radius",
                format!(
                    "need 0 < min <= max, got [{}, {}]",
                    self.food_min_radius, self.food_max_radius
                ),
            ));
        }
        if !(STAR_MIN_POINTS..=STAR_MAX_POINTS).contains(&self.hazard_points) {
            return Err(invalid(
                "hazard_points",
                format!("a star takes {STAR_MIN_POINTS} to {STAR_MAX_POINTS} points"),
            ));
        }
        if !(self.hazard_radius > 0.0) {
            return Err(invalid("hazard_radius", "must be positive"));
        }
        if !(self.eat_fraction >= 0.0) {
            return Err(invalid("eat_fraction", "must not be negative"));
        }
        if !(0.0..1.0).contains(&self.poison_fraction) {
            return Err(invalid("poison_fraction", "must be in [0, 1)"));
        }
        Ok(())
    }

    /// Frame duration in seconds
    pub fn frame_secs(&self) -> f64 {
        self.frame_ms as f64 / 1000.0
    }
}
