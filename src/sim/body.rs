//! Shared "has a position and a radius" capability
//!
//! Discs and stars both implement `Body`, so every pairwise predicate works
//! with either kind on either side.

use glam::DVec2;
use std::f64::consts::PI;

use crate::distance;

pub trait Body {
    fn pos(&self) -> DVec2;
    fn radius(&self) -> f64;

    /// Area in square meters (stars are approximated by their nominal circle)
    fn size(&self) -> f64 {
        PI * self.radius() * self.radius()
    }

    /// Distance between centers
    fn distance_to(&self, other: &(impl Body + ?Sized)) -> f64 {
        distance(self.pos(), other.pos())
    }

    /// Boundaries overlap
    fn touching(&self, other: &(impl Body + ?Sized)) -> bool {
        self.distance_to(other) < self.radius() + other.radius()
    }

    /// `other` lies entirely inside this body
    fn covering(&self, other: &(impl Body + ?Sized)) -> bool {
        self.radius() > self.distance_to(other) + other.radius()
    }
}

/// A bare circle, for testing predicates against a point or an ad-hoc region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Zero-radius circle standing in for a point
    pub const fn point(center: DVec2) -> Self {
        Self { center, radius: 0.0 }
    }
}

impl Body for Circle {
    fn pos(&self) -> DVec2 {
        self.center
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
