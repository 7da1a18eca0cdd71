//! CPU tessellating renderer
//!
//! Turns each frame into a triangle list ready to upload. With pacing on,
//! `present` sleeps out the remainder of the frame interval so the loop runs
//! at the configured cadence.

use glam::DVec2;
use std::time::{Duration, Instant};

use super::Renderer;
use super::shapes;
use super::vertex::{self, Vertex};
use crate::color::Color;

pub struct MeshRenderer {
    pace: bool,
    clear_color: [f32; 4],
    building: Vec<Vertex>,
    frame: Vec<Vertex>,
    frames: u64,
    last_present: Option<Instant>,
}

impl MeshRenderer {
    /// `pace`: block in `present` until the frame interval has elapsed
    pub fn new(pace: bool) -> Self {
        Self {
            pace,
            clear_color: Color::WHITE.as_array(),
            building: Vec::new(),
            frame: Vec::new(),
            frames: 0,
            last_present: None,
        }
    }

    /// Triangles of the last presented frame
    pub fn frame(&self) -> &[Vertex] {
        &self.frame
    }

    pub fn frame_bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.frame)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for MeshRenderer {
    fn clear(&mut self, background: Color) {
        self.clear_color = background.as_array();
        self.building.clear();
    }

    fn draw_disc(&mut self, center: DVec2, radius: f64, color: Color) {
        let radius = radius as f32;
        let segments = shapes::segments_for_radius(radius);
        self.building
            .extend(shapes::circle(center.as_vec2(), radius, color.as_array(), segments));
    }

    fn draw_polygon(&mut self, vertices: &[DVec2], color: Color) {
        let outline: Vec<_> = vertices.iter().map(|v| v.as_vec2()).collect();
        self.building
            .extend(shapes::polygon(&outline, color.as_array()));
    }

    fn present(&mut self, frame_ms: u32) {
        std::mem::swap(&mut self.frame, &mut self.building);
        self.building.clear();
        self.frames += 1;

        if self.pace {
            let interval = Duration::from_millis(frame_ms as u64);
            if let Some(last) = self.last_present {
                let elapsed = last.elapsed();
                if elapsed < interval {
                    std::thread::sleep(interval - elapsed);
                }
            }
        }
        self.last_present = Some(Instant::now());
    }
}
