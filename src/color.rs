//! Opaque sprite color
//!
//! The simulation only stores and forwards colors; renderers read the RGBA
//! components.

use serde::{Deserialize, Serialize};

use crate::consts::{HUE_BRIGHTNESS, HUE_SATURATION};

/// Linear RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Color = Color([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Color = Color([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Color = Color([0.0, 0.0, 1.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0, 1.0]);
    pub const ORANGE: Color = Color([1.0, 0.78, 0.0, 1.0]);
    pub const MAGENTA: Color = Color([1.0, 0.0, 1.0, 1.0]);
    pub const GRAY: Color = Color([0.5, 0.5, 0.5, 1.0]);

    /// Solid medium-bright color for a hue in `[0, 1]` (wraps outside it)
    pub fn from_hue(hue: f64) -> Self {
        Self::from_hsb(hue as f32, HUE_SATURATION, HUE_BRIGHTNESS)
    }

    /// HSB (a.k.a. HSV) to RGB
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        if saturation <= 0.0 {
            return Self([brightness, brightness, brightness, 1.0]);
        }
        let h = (hue - hue.floor()) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match sector as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self([r, g, b, 1.0])
    }

    /// Look up a named preset (case-insensitive)
    pub fn named(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            "orange" => Some(Self::ORANGE),
            "magenta" => Some(Self::MAGENTA),
            "gray" | "grey" => Some(Self::GRAY),
            _ => None,
        }
    }

    pub fn as_array(&self) -> [f32; 4] {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
