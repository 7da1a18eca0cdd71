//! Rendering seam
//!
//! The simulation never draws for itself. Each frame the game hands the state
//! to a `Renderer`: clear, draw food, hazards and player, then present.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshRenderer;

use glam::DVec2;

use crate::color::Color;
use crate::sim::{Body, GameState};

/// Presentation surface consumed by the game loop
pub trait Renderer {
    fn clear(&mut self, background: Color);
    fn draw_disc(&mut self, center: DVec2, radius: f64, color: Color);
    /// Filled closed polygon
    fn draw_polygon(&mut self, vertices: &[DVec2], color: Color);
    /// Show the frame; may block for about one frame interval
    fn present(&mut self, frame_ms: u32);
}

/// Draw one complete frame of `state` (does not present)
pub fn draw_scene<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState, background: Color) {
    renderer.clear(background);
    for food in &state.food {
        renderer.draw_disc(food.pos(), food.radius(), food.color());
    }
    for hazard in &state.hazards {
        renderer.draw_polygon(hazard.boundary(), hazard.color());
    }
    let player = &state.player;
    renderer.draw_disc(player.pos(), player.radius(), player.color());
}

/// A single recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Disc {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Polygon {
        vertices: Vec<DVec2>,
        color: Color,
    },
}

/// Renderer that records calls instead of drawing them
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames: u64,
    presented_ms: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total frame time requested through `present`
    pub fn presented_ms(&self) -> u64 {
        self.presented_ms
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self, background: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(background));
    }

    fn draw_disc(&mut self, center: DVec2, radius: f64, color: Color) {
        self.pending.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn draw_polygon(&mut self, vertices: &[DVec2], color: Color) {
        self.pending.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn present(&mut self, frame_ms: u32) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
        self.presented_ms += frame_ms as u64;
    }
}
