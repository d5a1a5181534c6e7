//! Spirograph animation core: a bank of enveloped circular harmonics summed
//! into one closed polyline per frame.

mod angle;
mod color;
mod elements;
mod frame;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;

use crate::params::{RenderConfig, SpiroConfig};

// Re-export public types
pub use angle::AngleTable;
pub use color::{Color, ColorTable};
pub use elements::{envelope_offsets, Element, ElementBank, Envelope};
pub use frame::FrameEvaluator;

/// Vertex data for the curve line strip (pixel position + colour)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

/// One frame of the curve: a point per base angle with its colour
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub points: &'a [Vec2],
    pub colors: &'a [Color],
}

impl Frame<'_> {
    /// Number of vertices `fill_line_strip` produces
    pub fn vertex_count(&self) -> usize {
        if self.points.is_empty() {
            0
        } else {
            self.points.len() + 1
        }
    }

    /// Build the closed line strip: every point in angle order, then back to
    /// point 0 so the loop joins in the starting colour.
    pub fn fill_line_strip(&self, vertices: &mut Vec<LineVertex>) {
        vertices.clear();
        let strip = self
            .points
            .iter()
            .zip(self.colors)
            .chain(self.points.first().zip(self.colors.first()));

        vertices.extend(strip.map(|(point, color)| LineVertex {
            position: point.to_array(),
            color: color.to_f32_array(),
        }));
    }
}

/// Owns all animation state and produces one frame per tick
pub struct SpiroSystem {
    angles: AngleTable,
    colors: ColorTable,
    bank: ElementBank,
    evaluator: FrameEvaluator,
    points: Vec<Vec2>,
}

impl SpiroSystem {
    /// Build tables and elements. The configuration must already be validated.
    pub fn new(config: &SpiroConfig, render_config: &RenderConfig) -> Self {
        let angles = AngleTable::new(config.angular_resolution);
        let colors = ColorTable::new(&angles);
        let bank = ElementBank::new(config);

        let (center_x, center_y) = render_config.center();
        let evaluator = FrameEvaluator::new(
            Vec2::new(center_x, center_y),
            config.element_radius(render_config.window_height),
        );

        Self {
            points: Vec::with_capacity(angles.resolution()),
            angles,
            colors,
            bank,
            evaluator,
        }
    }

    /// Advance the animation by `elapsed_s` seconds and trace the new frame
    ///
    /// # Arguments
    /// * `elapsed_s` - Seconds since the previous tick (>= 0)
    /// * `rng` - Random source for element re-randomization
    pub fn update<R: Rng + ?Sized>(&mut self, elapsed_s: f32, rng: &mut R) -> Frame<'_> {
        self.bank.step(elapsed_s, &self.angles, rng);
        self.evaluator
            .trace(self.bank.elements(), &self.angles, &mut self.points);

        Frame {
            points: &self.points,
            colors: self.colors.as_slice(),
        }
    }

    pub fn bank(&self) -> &ElementBank {
        &self.bank
    }

    pub fn angles(&self) -> &AngleTable {
        &self.angles
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    pub fn evaluator(&self) -> &FrameEvaluator {
        &self.evaluator
    }

    /// Vertices in every frame's line strip
    pub fn vertex_capacity(&self) -> usize {
        self.angles.resolution() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(seed: u64, steps: &[f32]) -> Vec<Vec<Vec2>> {
        let mut system = SpiroSystem::new(&SpiroConfig::default(), &RenderConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        steps
            .iter()
            .map(|&dt| system.update(dt, &mut rng).points.to_vec())
            .collect()
    }

    #[test]
    fn test_frame_has_point_and_color_per_angle() {
        let config = SpiroConfig {
            angular_resolution: 2048,
            ..SpiroConfig::default()
        };
        let mut system = SpiroSystem::new(&config, &RenderConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let frame = system.update(0.016, &mut rng);
        assert_eq!(frame.points.len(), 2048);
        assert_eq!(frame.colors.len(), 2048);
        assert_eq!(frame.vertex_count(), 2049);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let steps = [0.0, 0.016, 0.017, 0.5, 1.3, 0.016, 2.0, 0.033];
        assert_eq!(run(1234, &steps), run(1234, &steps));
    }

    #[test]
    fn test_different_seed_different_frames() {
        let steps = [0.0, 0.016, 0.5];
        assert_ne!(run(1, &steps), run(2, &steps));
    }

    #[test]
    fn test_line_strip_closes_on_first_point() {
        let mut system = SpiroSystem::new(&SpiroConfig::default(), &RenderConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let frame = system.update(0.1, &mut rng);

        let mut vertices = Vec::new();
        frame.fill_line_strip(&mut vertices);

        assert_eq!(vertices.len(), frame.vertex_count());
        assert_eq!(vertices[0], vertices[vertices.len() - 1]);
        assert_eq!(vertices[0].position, frame.points[0].to_array());
        assert_eq!(vertices[0].color, frame.colors[0].to_f32_array());
        assert_eq!(vertices[3].color, frame.colors[3].to_f32_array());
    }

    #[test]
    fn test_curve_stays_within_summed_radius() {
        let render_config = RenderConfig::default();
        let mut system = SpiroSystem::new(&SpiroConfig::default(), &render_config);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let center = system.evaluator().center();
        let bound = system.evaluator().element_radius() * 5.0 + 1e-2;

        for _ in 0..50 {
            let frame = system.update(0.1, &mut rng);
            assert!(frame.points.iter().all(|p| p.distance(center) <= bound));
        }
    }
}
