//! Frame timing and FPS reporting.

use std::time::{Duration, Instant};

use crate::params::RecordingConfig;

/// Measures the time between frames and logs the frame rate once a second
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    fps_timer: Option<Instant>,
    frame_count: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            fps_timer: None,
            frame_count: 0,
        }
    }

    /// Register a frame at `now` and return seconds since the previous one.
    ///
    /// The first tick returns 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        if let Some(fps) = self.count_frame(now) {
            log::info!("fps = {}", fps);
        }

        dt
    }

    /// Count a frame; returns the frame count when a full second has passed
    fn count_frame(&mut self, now: Instant) -> Option<u32> {
        let fps_timer = *self.fps_timer.get_or_insert(now);
        self.frame_count += 1;

        if now.saturating_duration_since(fps_timer) >= Duration::from_secs(1) {
            let fps = self.frame_count;
            self.frame_count = 0;
            self.fps_timer = Some(now);
            Some(fps)
        } else {
            None
        }
    }
}

/// Seconds to advance the animation before the next redraw.
///
/// Recording uses a fixed step of one output frame. `None` means the last
/// animation state was never captured and must be drawn again as is, so the
/// recorded sequence has no gaps.
pub fn animation_step(
    wall_dt: f32,
    recording: Option<&RecordingConfig>,
    paused: bool,
    capture_pending: bool,
) -> Option<f32> {
    match recording {
        Some(_) if capture_pending => None,
        _ if paused => Some(0.0),
        Some(config) => Some(config.frame_time_s()),
        None => Some(wall_dt),
    }
}
