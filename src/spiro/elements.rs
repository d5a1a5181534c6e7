//! Harmonic elements and the envelopes that fade them in and out.

use rand::Rng;

use super::angle::AngleTable;
use crate::params::SpiroConfig;

/// Envelope position below which an element is considered "in its trough"
const RESET_THRESHOLD: f32 = 0.5;

/// One rotating circle contributing to the curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    /// Signed multiple of the base circle frequency (never 0)
    pub frequency: i32,

    /// Radius multiplier in `[0, 1]`
    pub amplitude: f32,

    /// Starting angle in brads, `[0, resolution)`
    pub phase_offset: usize,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            frequency: 1,
            amplitude: 1.0,
            phase_offset: 0,
        }
    }
}

/// Per-element amplitude modulator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope {
    /// Fixed phase stagger in `[0, 1)`
    pub offset: f32,

    /// Set while the envelope sits below the reset threshold, so the
    /// element is re-randomized once per cycle rather than every frame
    pub reset_armed: bool,
}

/// The bank of elements and envelopes plus the shared envelope clock
#[derive(Debug, Clone)]
pub struct ElementBank {
    elements: Vec<Element>,
    envelopes: Vec<Envelope>,
    base_envelope: f32,
    envelope_speed: f32,
    max_frequency: i32,
}

impl ElementBank {
    /// Create the bank with every element at unit amplitude on the base circle
    pub fn new(config: &SpiroConfig) -> Self {
        let envelopes = envelope_offsets(config.element_count, config.envelopes_in_phase)
            .into_iter()
            .map(|offset| Envelope {
                offset,
                ..Envelope::default()
            })
            .collect();

        Self {
            elements: vec![Element::default(); config.element_count],
            envelopes,
            base_envelope: 0.0,
            envelope_speed: config.envelope_speed,
            max_frequency: i32::try_from(config.max_element_frequency).unwrap_or(i32::MAX),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    /// Shared envelope clock in `[0, 1)`
    pub fn base_envelope(&self) -> f32 {
        self.base_envelope
    }

    /// Advance the envelope clock and update every element.
    ///
    /// An element whose envelope drops below 0.5 gets a new frequency and
    /// phase (drawn in element order: magnitude, sign, phase) exactly once
    /// per cycle. Its amplitude is the raised cosine of the envelope, so the
    /// change happens while it is invisible.
    pub fn step<R: Rng + ?Sized>(&mut self, elapsed_s: f32, angles: &AngleTable, rng: &mut R) {
        self.base_envelope = wrap_unit(self.base_envelope + self.envelope_speed * elapsed_s);

        for (i, (element, envelope)) in self
            .elements
            .iter_mut()
            .zip(self.envelopes.iter_mut())
            .enumerate()
        {
            let position = wrap_unit(envelope.offset + self.base_envelope);
            let in_trough = position < RESET_THRESHOLD;

            if in_trough && !envelope.reset_armed {
                let magnitude = rng.gen_range(1..=self.max_frequency);
                element.frequency = if rng.gen::<bool>() {
                    -magnitude
                } else {
                    magnitude
                };
                element.phase_offset = rng.gen_range(0..angles.resolution());

                log::trace!(
                    "element {} retuned: frequency {}, phase {}",
                    i,
                    element.frequency,
                    element.phase_offset
                );
            }

            envelope.reset_armed = in_trough;
            element.amplitude = angles.raised_cosine(position);
        }
    }
}

/// Initial envelope offsets.
///
/// The first `in_phase` elements share offset 0; the rest are spread evenly
/// over the `count - in_phase + 1` staggered slots (slot 0 being the
/// in-phase group).
pub fn envelope_offsets(count: usize, in_phase: usize) -> Vec<f32> {
    let in_phase = in_phase.clamp(1, count.max(1));
    let slots = (count + 1 - in_phase) as f32;

    (0..count)
        .map(|i| {
            if i < in_phase {
                0.0
            } else {
                (i + 1 - in_phase) as f32 / slots
            }
        })
        .collect()
}

/// Wrap a non-negative phase into `[0, 1)`
fn wrap_unit(value: f32) -> f32 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
