//! Sums element circles into points of the traced curve.

use glam::Vec2;

use super::angle::AngleTable;
use super::elements::Element;

/// Evaluates curve points around a fixed centre with a fixed element radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEvaluator {
    center: Vec2,
    element_radius: f32,
}

impl FrameEvaluator {
    pub fn new(center: Vec2, element_radius: f32) -> Self {
        Self {
            center,
            element_radius,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn element_radius(&self) -> f32 {
        self.element_radius
    }

    /// Offset of one element from the centre at the given base angle
    pub fn point_for_element(
        &self,
        element: &Element,
        base_angle: usize,
        angles: &AngleTable,
    ) -> Vec2 {
        let brads = angles.wrap(
            i64::from(element.frequency) * base_angle as i64 + element.phase_offset as i64,
        );
        let radius = element.amplitude * self.element_radius;

        Vec2::new(angles.sin(brads), angles.cos(brads)) * radius
    }

    /// Curve point for one base angle (vector sum of all elements, centred)
    pub fn point_for_base_angle(
        &self,
        elements: &[Element],
        base_angle: usize,
        angles: &AngleTable,
    ) -> Vec2 {
        let sum: Vec2 = elements
            .iter()
            .map(|element| self.point_for_element(element, base_angle, angles))
            .sum();

        self.center + sum
    }

    /// Fill `points` with one point per base angle, in angle order
    pub fn trace(&self, elements: &[Element], angles: &AngleTable, points: &mut Vec<Vec2>) {
        points.clear();
        points.extend(
            (0..angles.resolution())
                .map(|base_angle| self.point_for_base_angle(elements, base_angle, angles)),
        );
    }
}
