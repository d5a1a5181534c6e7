//! SpiroMorph - a spirograph that never stops changing.
//!
//! A handful of rotating circles are summed into one closed curve. Each
//! circle fades in and out on its own envelope and picks a new frequency and
//! phase while it is invisible, so the figure morphs continuously.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use spiromorph::cli::Args;
use spiromorph::error::RenderError;
use spiromorph::params::{RecordingConfig, RenderConfig, SpiroConfig};
use spiromorph::rendering::RenderSystem;
use spiromorph::spiro::{LineVertex, SpiroSystem};
use spiromorph::timing::{animation_step, FrameClock};

const TITLE: &str = "SpiroMorph";

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    vertices: Vec<LineVertex>,

    // Animation
    spiro: SpiroSystem,
    rng: ChaCha8Rng,
    paused: bool,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Time tracking
    clock: FrameClock,
    frame_num: usize,
    /// Set when a recording frame was animated but not captured
    capture_pending: bool,

    /// First fatal error, returned from `main` once the event loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(
        spiro_config: &SpiroConfig,
        render_config: RenderConfig,
        recording_config: Option<RecordingConfig>,
        seed: u64,
    ) -> Self {
        let spiro = SpiroSystem::new(spiro_config, &render_config);

        Self {
            window: None,
            render_system: None,
            vertices: Vec::with_capacity(spiro.vertex_capacity()),
            spiro,
            rng: ChaCha8Rng::seed_from_u64(seed),
            paused: false,
            render_config,
            recording_config,
            clock: FrameClock::new(),
            frame_num: 0,
            capture_pending: false,
            error: None,
        }
    }

    /// Record a fatal error and stop the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, keycode: KeyCode) {
        match keycode {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Space => {
                self.paused = !self.paused;
                log::info!("Animation {}", if self.paused { "paused" } else { "resumed" });
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let mut window_attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));
        if self.render_config.fullscreen {
            window_attributes = window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("failed to create window"));
                return;
            }
        };

        // Initialize rendering system
        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.render_config,
            self.spiro.vertex_capacity(),
            self.recording_config.clone(),
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        match &self.recording_config {
            Some(config) => log::info!(
                "Recording {} frames to {}",
                config.total_frames(),
                config.frames_dir().display()
            ),
            None => log::info!("Press ESC to quit, SPACE to pause"),
        }

        window.request_redraw();
        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, keycode),
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance the animation and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        // Recording runs on a fixed timestep regardless of wall time
        let wall_dt = self.clock.tick(Instant::now());
        if let Some(elapsed_s) = animation_step(
            wall_dt,
            self.recording_config.as_ref(),
            self.paused,
            self.capture_pending,
        ) {
            let frame = self.spiro.update(elapsed_s, &mut self.rng);
            frame.fill_line_strip(&mut self.vertices);
        }
        let vertex_count = render_system.update_vertices(&self.vertices);

        match render_system.render(vertex_count, self.frame_num) {
            Ok(()) => {
                self.frame_num += 1;
                self.capture_pending = false;
            }
            Err(RenderError::Frame(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface lost, reconfiguring");
                render_system.reconfigure();
                self.capture_pending = true;
            }
            Err(RenderError::Frame(wgpu::SurfaceError::Timeout)) => {
                log::warn!("Surface timed out, skipping frame");
                self.capture_pending = true;
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        }

        if let Some(config) = &self.recording_config {
            let total = config.total_frames();
            if self.frame_num > 0 && self.frame_num % config.fps as usize == 0 {
                log::info!("Recorded {}/{} frames", self.frame_num, total);
            }
            if self.frame_num >= total {
                log::info!(
                    "Recording complete: {} frames in {}",
                    self.frame_num,
                    config.frames_dir().display()
                );
                event_loop.exit();
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let spiro_config = args.spiro_config()?;
    let render_config = args.render_config();
    let recording_config = args
        .create_recording_config()
        .context("failed to create recording directory")?;
    let seed = args.seed.unwrap_or_else(rand::random);

    log::info!("{} {}", TITLE, env!("CARGO_PKG_VERSION"));
    log::info!(
        "{} elements ({} in phase), fmax {}, loop resolution {}, speed {}, amplitude {}",
        spiro_config.element_count,
        spiro_config.envelopes_in_phase,
        spiro_config.max_element_frequency,
        spiro_config.angular_resolution,
        spiro_config.envelope_speed,
        spiro_config.amplitude_scale
    );
    log::info!(
        "Window {}x{}{}, seed {}",
        render_config.window_width,
        render_config.window_height,
        if render_config.fullscreen { " (fullscreen)" } else { "" },
        seed
    );

    let mut app = App::new(&spiro_config, render_config, recording_config, seed);
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
