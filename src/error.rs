//! Error types for configuration and rendering.

use std::path::PathBuf;

/// Invalid run configuration, reported before the animation starts
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("number of elements must not be 0")]
    NoElements,

    #[error("envelopes in phase ({in_phase}) must be between 1 and the number of elements ({elements})")]
    EnvelopesInPhase { in_phase: usize, elements: usize },

    #[error("highest element frequency must be between 1 and {max}, got {frequency}")]
    MaxFrequency { frequency: u32, max: u32 },

    #[error("loop resolution must be a power of 2 and at least {min} (512, 1024, 2048, 4096...), got {resolution}")]
    AngularResolution { resolution: usize, min: usize },

    #[error("envelope speed must be a finite, non-negative number, got {0}")]
    EnvelopeSpeed(f32),

    #[error("amplitude must be a finite number, got {0}")]
    AmplitudeScale(f32),
}

/// Failure inside the wgpu render system
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find suitable GPU adapter")]
    NoAdapter,

    #[error("surface offers no usable format (8-bit capture required: {recording})")]
    NoSurfaceFormat { recording: bool },

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),

    #[error("failed to save frame {}: {source}", .path.display())]
    Capture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_messages_name_the_values() {
        let err = ConfigError::EnvelopesInPhase {
            in_phase: 7,
            elements: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('5'));

        let err = ConfigError::AngularResolution {
            resolution: 1000,
            min: 256,
        };
        assert!(err.to_string().contains("power of 2"));
        assert!(err.to_string().contains("1000"));
    }
}
