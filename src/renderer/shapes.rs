//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Fewest segments a circle is ever tessellated with
pub const MIN_CIRCLE_SEGMENTS: u32 = 12;
/// Most segments a circle is ever tessellated with
pub const MAX_CIRCLE_SEGMENTS: u32 = 64;

/// Segment count giving roughly constant edge length on the unit canvas
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 400.0) as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a closed polygon that is star-shaped around its
/// centroid (every convex polygon, and every star outline)
pub fn polygon(outline: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if outline.len() < 3 {
        return Vec::new();
    }

    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;
    let mut vertices = Vec::with_capacity(outline.len() * 3);

    for (i, &a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];

        // Fan triangle from centroid, closing back to the first corner
        vertices.push(Vertex::new(centroid.x, centroid.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::new(0.5, 0.5), 0.1, RED, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(Vec2::new(0.5, 0.5));
            assert!(d <= 0.1 + 1e-5);
        }
    }

    #[test]
    fn test_polygon_fan_closes() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let verts = polygon(&square, RED);
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].position, [0.5, 0.5]);
        // Last triangle ends back at the first corner
        assert_eq!(verts[11].position, [0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_polygon() {
        assert!(polygon(&[Vec2::ZERO, Vec2::ONE], RED).is_empty());
    }

    #[test]
    fn test_segments_for_radius() {
        assert_eq!(segments_for_radius(0.0), MIN_CIRCLE_SEGMENTS);
        assert_eq!(segments_for_radius(0.07), 28);
        assert_eq!(segments_for_radius(1.0), MAX_CIRCLE_SEGMENTS);
    }
}
