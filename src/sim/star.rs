//! Star-shaped static sprite
//!
//! A star never moves on its own. Its outline is derived from position,
//! radius and point count and is rebuilt whenever any of those change.

use glam::DVec2;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

use super::body::Body;
use crate::color::Color;
use crate::consts::*;
use crate::error::SpriteError;

/// A star entity (hazard or decoration)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pos: DVec2,
    radius: f64,
    points: u32,
    color: Color,
    /// Outline: alternating outer and inner corners, clockwise from the top
    #[serde(skip)]
    boundary: Vec<DVec2>,
}

impl Star {
    /// Black `points`-pointed star at `pos`
    pub fn new(pos: DVec2, radius: f64, points: u32) -> Result<Self, SpriteError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SpriteError::InvalidRadius(radius));
        }
        check_points(points)?;
        let mut star = Self {
            pos,
            radius,
            points,
            color: Color::BLACK,
            boundary: Vec::with_capacity(2 * points as usize),
        };
        star.update_boundary();
        Ok(star)
    }

    /// Black star at the canvas center with the default radius
    pub fn with_points(points: u32) -> Result<Self, SpriteError> {
        Self::new(DVec2::new(DEFAULT_X, DEFAULT_Y), DEFAULT_RADIUS, points)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Polygon outline, `2 * points` vertices
    pub fn boundary(&self) -> &[DVec2] {
        &self.boundary
    }

    pub fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
        self.update_boundary();
    }

    pub fn set_x(&mut self, x: f64) {
        self.pos.x = x;
        self.update_boundary();
    }

    pub fn set_y(&mut self, y: f64) {
        self.pos.y = y;
        self.update_boundary();
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), SpriteError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SpriteError::InvalidRadius(radius));
        }
        self.radius = radius;
        self.update_boundary();
        Ok(())
    }

    pub fn set_points(&mut self, points: u32) -> Result<(), SpriteError> {
        check_points(points)?;
        self.points = points;
        self.update_boundary();
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_hue(&mut self, hue: f64) {
        self.color = Color::from_hue(hue);
    }

    fn update_boundary(&mut self) {
        let corners = 2 * self.points as usize;
        let step = PI / self.points as f64;
        self.boundary.clear();
        self.boundary.extend((0..corners).map(|i| {
            let sharpness = if i % 2 == 0 { STAR_SHARPNESS } else { -STAR_SHARPNESS };
            let r = self.radius * (1.0 + sharpness);
            let angle = i as f64 * step;
            // sin for x, cos for y: vertex 0 points up, traced clockwise
            self.pos + DVec2::new(r * angle.sin(), r * angle.cos())
        }));
    }
}

fn check_points(points: u32) -> Result<(), SpriteError> {
    if points < STAR_MIN_POINTS {
        return Err(SpriteError::TooFewPoints {
            got: points,
            min: STAR_MIN_POINTS,
        });
    }
    if points > STAR_MAX_POINTS {
        return Err(SpriteError::TooManyPoints {
            got: points,
            max: STAR_MAX_POINTS,
        });
    }
    Ok(())
}

impl Body for Star {
    fn pos(&self) -> DVec2 {
        self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Star({}, {}, {}, {})",
            self.pos.x, self.pos.y, self.radius, self.points
        )
    }
}
