//! Round moving sprite
//!
//! A disc has a position, a velocity in meters per second and a radius. Size
//! changes are always expressed as area so equal increments feel equally
//! significant at any size.

use glam::DVec2;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

use super::body::Body;
use crate::color::Color;
use crate::consts::*;
use crate::error::SpriteError;
use crate::random::RandomSource;
use crate::{direction_or_random, distance};

/// A disc entity (player or food)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disc {
    pos: DVec2,
    vel: DVec2,
    radius: f64,
    color: Color,
}

fn check_radius(radius: f64) -> Result<f64, SpriteError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(radius)
    } else {
        Err(SpriteError::InvalidRadius(radius))
    }
}

impl Default for Disc {
    /// Black, stationary, canvas center, default radius
    fn default() -> Self {
        Self {
            pos: DVec2::new(DEFAULT_X, DEFAULT_Y),
            vel: DVec2::ZERO,
            radius: DEFAULT_RADIUS,
            color: Color::BLACK,
        }
    }
}

impl Disc {
    /// Black, stationary disc at `pos`
    pub fn new(pos: DVec2, radius: f64) -> Result<Self, SpriteError> {
        Ok(Self {
            pos,
            vel: DVec2::ZERO,
            radius: check_radius(radius)?,
            color: Color::BLACK,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    pub fn set_x(&mut self, x: f64) {
        self.pos.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.pos.y = y;
    }

    /// Positive vx is rightward, positive vy is upward
    pub fn set_vel(&mut self, vel: DVec2) {
        self.vel = vel;
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), SpriteError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Solid color from a hue in `[0, 1]`
    pub fn set_hue(&mut self, hue: f64) {
        self.color = Color::from_hue(hue);
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Rescale velocity to magnitude `speed`, keeping the heading.
    ///
    /// A stationary disc has no heading, so one is picked at random first.
    pub fn set_speed<R: RandomSource + ?Sized>(&mut self, speed: f64, rng: &mut R) {
        let old_speed = self.speed();
        let heading = direction_or_random(self.vel, old_speed, SPEED_EPSILON, rng);
        self.vel = heading * speed;
    }

    /// Head toward `target` at `speed`.
    ///
    /// Inside our own radius we divide by the radius instead of the shorter
    /// true distance, so the disc slows down as it arrives instead of
    /// oscillating around the target.
    pub fn aim_towards(&mut self, target: DVec2, speed: f64) {
        let offset = target - self.pos;
        let dist = offset.length();
        let divisor = if dist < self.radius { self.radius } else { dist };
        self.vel = offset * speed / divisor;
    }

    /// Head directly away from `target` at `speed`; random heading when the
    /// target sits on top of us.
    pub fn aim_away_from<R: RandomSource + ?Sized>(&mut self, target: DVec2, speed: f64, rng: &mut R) {
        let offset = self.pos - target;
        let heading = direction_or_random(offset, offset.length(), AIM_EPSILON, rng);
        self.vel = heading * speed;
    }

    /// Distance from our center to a bare point
    pub fn distance_to_point(&self, point: DVec2) -> f64 {
        distance(self.pos, point)
    }

    /// Change area by `delta` square meters (negative shrinks)
    pub fn grow(&mut self, delta: f64) -> Result<(), SpriteError> {
        self.set_size(self.size() + delta)
    }

    /// Set area in square meters; the radius follows
    pub fn set_size(&mut self, area: f64) -> Result<(), SpriteError> {
        if !(area > 0.0) || !area.is_finite() {
            return Err(SpriteError::InvalidArea(area));
        }
        self.radius = (area / PI).sqrt();
        Ok(())
    }

    /// Move for `duration_ms` milliseconds along the current velocity
    pub fn advance(&mut self, duration_ms: u32) {
        self.pos += self.vel * (duration_ms as f64 / 1000.0);
    }

    /// Toroidal canvas: once fully off one edge, reappear at the opposite one.
    ///
    /// Assumes the unscaled unit canvas.
    pub fn wrap(&mut self) {
        self.pos.x = wrap_axis(self.pos.x, self.radius);
        self.pos.y = wrap_axis(self.pos.y, self.radius);
    }

    /// Flip the velocity component carrying us out through an edge.
    ///
    /// Position is not clamped; a very fast disc may overshoot until the next
    /// check turns it around.
    pub fn bounce(&mut self) {
        let r = self.radius;
        let (p, v) = (self.pos, self.vel);
        if (v.x > 0.0 && p.x + r > CANVAS_MAX) || (v.x < 0.0 && p.x - r < CANVAS_MIN) {
            self.vel.x = -v.x;
        }
        if (v.y > 0.0 && p.y + r > CANVAS_MAX) || (v.y < 0.0 && p.y - r < CANVAS_MIN) {
            self.vel.y = -v.y;
        }
    }

    /// If touching `other`, redirect (not reflect) away from it at unchanged speed
    pub fn bounce_off<R: RandomSource + ?Sized>(&mut self, other: &(impl Body + ?Sized), rng: &mut R) {
        if self.touching(other) {
            let speed = self.speed();
            self.aim_away_from(other.pos(), speed, rng);
        }
    }
}

impl Body for Disc {
    fn pos(&self) -> DVec2 {
        self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disc({}, {}, {}) with speed {}",
            self.pos.x,
            self.pos.y,
            self.radius,
            self.speed()
        )
    }
}

/// Fold one coordinate into `[MIN - r, MAX + r]`; in-range values are untouched
fn wrap_axis(v: f64, r: f64) -> f64 {
    let low = CANVAS_MIN - r;
    let high = CANVAS_MAX + r;
    if (low..=high).contains(&v) || !v.is_finite() {
        return v;
    }
    ((v - low).rem_euclid(high - low) + low).min(high)
}
