//! Command-line argument parsing.

use clap::Parser;

use crate::error::ConfigError;
use crate::params::{RecordingConfig, RenderConfig, SpiroConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "spiromorph", version)]
#[command(about = "A continuously morphing spirograph", long_about = None)]
#[command(after_help = "Examples:\n  \
    spiromorph --xres=1920 --yres=1080 --fullscreen\n  \
    spiromorph --loopres=4096 --elements=12 --inphase=1 --amplitude=2.0")]
pub struct Args {
    /// Run in fullscreen
    #[arg(short = 'w', long)]
    pub fullscreen: bool,

    /// Number of elements (1 -> N)
    #[arg(short = 'e', long, value_name = "N", default_value_t = 5)]
    pub elements: usize,

    /// Number of envelopes in phase (1 -> number of elements)
    #[arg(short = 'p', long, value_name = "N", default_value_t = 2)]
    pub inphase: usize,

    /// Highest element frequency (1 -> N)
    #[arg(short = 'f', long, value_name = "N", default_value_t = 8)]
    pub fmax: u32,

    /// Loop resolution (256 -> N), must be a power of 2
    #[arg(short = 'r', long, value_name = "N", default_value_t = 1024)]
    pub loopres: usize,

    /// X window size (pixels)
    #[arg(short = 'x', long, value_name = "N", default_value_t = 1000)]
    pub xres: u32,

    /// Y window size (pixels)
    #[arg(short = 'y', long, value_name = "N", default_value_t = 1000)]
    pub yres: u32,

    /// Envelope speed (cycles per second)
    #[arg(short = 's', long, value_name = "N", default_value_t = 0.15)]
    pub speed: f32,

    /// Amplitude adjustment
    #[arg(short = 'a', long, value_name = "N", default_value_t = 1.0)]
    pub amplitude: f32,

    /// Random seed (a fresh one is chosen and logged when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Build the validated animation configuration
    pub fn spiro_config(&self) -> Result<SpiroConfig, ConfigError> {
        let mut config = SpiroConfig {
            element_count: self.elements,
            envelopes_in_phase: self.inphase,
            max_element_frequency: self.fmax,
            angular_resolution: self.loopres,
            envelope_speed: self.speed,
            amplitude_scale: self.amplitude,
        };
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Build the window configuration
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig {
            window_width: self.xres,
            window_height: self.yres,
            fullscreen: self.fullscreen,
        };
        config.normalize();
        config
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> std::io::Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let config = RecordingConfig::new(duration);
        std::fs::create_dir_all(config.frames_dir())?;
        Ok(Some(config))
    }
}
