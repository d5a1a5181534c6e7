//! Parameter definitions with documented units and ranges.
//!
//! All tunable numbers live here with:
//! - Units (pixels, seconds, fractions of a cycle)
//! - Documented ranges and meanings
//! - Validation for the values the animation core relies on

mod render;
mod spiro;

// Re-export all types
pub use render::{RecordingConfig, RenderConfig};
pub use spiro::{SpiroConfig, MAX_ELEMENT_FREQUENCY, MIN_ANGULAR_RESOLUTION};
