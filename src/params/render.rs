//! Window and recording configuration.

use std::path::PathBuf;

/// Smallest window dimension accepted (pixels)
pub const MIN_WINDOW_DIMENSION: u32 = 10;

/// Rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Borderless fullscreen on the current monitor
    pub fullscreen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 1000,
            fullscreen: false,
        }
    }
}

impl RenderConfig {
    /// Clamp window dimensions to the minimum usable size
    pub fn normalize(&mut self) {
        self.window_width = self.window_width.max(MIN_WINDOW_DIMENSION);
        self.window_height = self.window_height.max(MIN_WINDOW_DIMENSION);
    }

    /// Window centre in pixel coordinates (curve origin)
    pub fn center(&self) -> (f32, f32) {
        (
            (self.window_width / 2) as f32,
            (self.window_height / 2) as f32,
        )
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: PathBuf::from("recording"),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Simulated seconds between captured frames
    pub fn frame_time_s(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }
}
