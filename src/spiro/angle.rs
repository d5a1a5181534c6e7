//! Sine lookup over binary radians (brads) and the raised-cosine shaper.

use std::f64::consts::TAU;

/// One sine sample per brad over a full turn.
///
/// The resolution is a power of two, so any integer angle wraps into
/// `[0, resolution)` with a single mask instead of a modulo.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTable {
    sine: Vec<f32>,
    mask: usize,
}

impl AngleTable {
    /// Build the table for `resolution` brads per turn (must be a power of two)
    pub fn new(resolution: usize) -> Self {
        debug_assert!(resolution.is_power_of_two());

        let sine = (0..resolution)
            .map(|brads| (TAU * brads as f64 / resolution as f64).sin() as f32)
            .collect();

        Self {
            sine,
            mask: resolution - 1,
        }
    }

    /// Brads per full turn
    pub fn resolution(&self) -> usize {
        self.sine.len()
    }

    /// Brads in a quarter turn (sine to cosine offset)
    pub fn quarter_turn(&self) -> usize {
        self.sine.len() / 4
    }

    /// Reduce any integer angle into `[0, resolution)`.
    ///
    /// Negative angles wrap too: two's complement masking is a floor modulo
    /// for power-of-two moduli.
    pub fn wrap(&self, brads: i64) -> usize {
        (brads & self.mask as i64) as usize
    }

    /// Sine of an angle already reduced to `[0, resolution)`
    pub fn sin(&self, brads: usize) -> f32 {
        self.sine[brads & self.mask]
    }

    /// Cosine via the same table, a quarter turn ahead
    pub fn cos(&self, brads: usize) -> f32 {
        self.sin(brads + self.quarter_turn())
    }

    /// Raised-cosine bump over a unit position.
    ///
    /// Maps a linear ramp onto `[0, 1]`: 0 at position 0 (and 1), peaking at
    /// 1 when position is 0.5. Positions outside `[0, 1)` wrap. Used for both
    /// the element envelopes and the colour gradient.
    pub fn raised_cosine(&self, position: f32) -> f32 {
        let brads = (position * self.resolution() as f32) as i64 + self.quarter_turn() as i64;
        self.sine[self.wrap(brads)] / -2.0 + 0.5
    }
}
