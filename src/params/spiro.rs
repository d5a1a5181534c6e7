//! Spirograph element and envelope parameters.

use crate::error::ConfigError;

/// Smallest accepted angular resolution (brads per turn)
pub const MIN_ANGULAR_RESOLUTION: usize = 256;

/// Largest accepted element frequency; signed frequencies must fit in `i32`
pub const MAX_ELEMENT_FREQUENCY: u32 = i32::MAX as u32;

/// Harmonic bank configuration, immutable for the lifetime of a run
#[derive(Debug, Clone, PartialEq)]
pub struct SpiroConfig {
    /// Number of rotating circle elements summed into the curve (>= 1)
    pub element_count: usize,

    /// Number of elements whose envelopes share phase 0 (1..=element_count)
    pub envelopes_in_phase: usize,

    /// Highest absolute element frequency (multiples of the base circle)
    pub max_element_frequency: u32,

    /// Brads per full turn, also the number of points per frame.
    /// Must be a power of two so angles wrap with a bitmask.
    pub angular_resolution: usize,

    /// Envelope clock speed (fraction of a full envelope cycle per second)
    pub envelope_speed: f32,

    /// Overall curve size multiplier (1.0 fits the window height)
    pub amplitude_scale: f32,
}

impl Default for SpiroConfig {
    fn default() -> Self {
        Self {
            element_count: 5,
            envelopes_in_phase: 2,
            max_element_frequency: 8,
            angular_resolution: 1024,
            envelope_speed: 0.15,
            amplitude_scale: 1.0,
        }
    }
}

impl SpiroConfig {
    /// Radius shared by every element, in pixels.
    ///
    /// Chosen so that the staggered envelopes (which average half amplitude)
    /// plus the fully in-phase group roughly fill half the window height.
    pub fn element_radius(&self, window_height: u32) -> f32 {
        let staggered = (self.element_count - self.envelopes_in_phase + 1) as f32;
        let in_phase = (self.envelopes_in_phase - 1) as f32;
        self.amplitude_scale * 0.5 * window_height as f32 / (staggered * 0.5 + in_phase * 1.0)
    }

    /// Apply the lenient fix-ups for values that have an obvious meaning
    pub fn normalize(&mut self) {
        if self.envelopes_in_phase == 0 {
            self.envelopes_in_phase = 1;
        }
        if self.max_element_frequency == 0 {
            self.max_element_frequency = 1;
        }
    }

    /// Validate configuration (resolution must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_count == 0 {
            return Err(ConfigError::NoElements);
        }
        if self.envelopes_in_phase == 0 || self.envelopes_in_phase > self.element_count {
            return Err(ConfigError::EnvelopesInPhase {
                in_phase: self.envelopes_in_phase,
                elements: self.element_count,
            });
        }
        if self.max_element_frequency == 0 || self.max_element_frequency > MAX_ELEMENT_FREQUENCY {
            return Err(ConfigError::MaxFrequency {
                frequency: self.max_element_frequency,
                max: MAX_ELEMENT_FREQUENCY,
            });
        }
        if !self.angular_resolution.is_power_of_two()
            || self.angular_resolution < MIN_ANGULAR_RESOLUTION
        {
            return Err(ConfigError::AngularResolution {
                resolution: self.angular_resolution,
                min: MIN_ANGULAR_RESOLUTION,
            });
        }
        if !self.envelope_speed.is_finite() || self.envelope_speed < 0.0 {
            return Err(ConfigError::EnvelopeSpeed(self.envelope_speed));
        }
        if !self.amplitude_scale.is_finite() {
            return Err(ConfigError::AmplitudeScale(self.amplitude_scale));
        }
        Ok(())
    }
}
