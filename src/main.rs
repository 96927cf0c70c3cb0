//! Chromatica - procedural wave gradients
//!
//! Stacked sine waves split the window into bands, each filled with one step
//! of a color gradient. Click to roll new waves, press space to save a PNG.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use chromatica::cli::Args;
use chromatica::error::{ConfigError, RenderError};
use chromatica::export::Exporter;
use chromatica::frame::FrameComposer;
use chromatica::overlay::FpsCounter;
use chromatica::params::{Palette, RenderConfig};
use chromatica::rendering::RenderSystem;
use chromatica::scene::SceneSystem;
use chromatica::wave::WaveGenerator;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Scene and per-frame drawing
    scenes: SceneSystem,
    composer: FrameComposer,
    fps: FpsCounter,

    exporter: Exporter,

    // Configuration
    render_config: RenderConfig,

    /// Set when the window or GPU could not be brought up
    init_failed: bool,
}

impl App {
    fn new(args: &Args) -> Result<Self, ConfigError> {
        let render_config = RenderConfig::default();
        let wave_params = args.wave_params(&render_config)?;

        let generator = WaveGenerator::new(wave_params, args.random_source());
        let scenes = SceneSystem::new(generator, args.gradient_params());
        let composer = FrameComposer::new(&render_config, Palette::default());

        for color in scenes.scene().gradient.colors() {
            info!(%color, "Gradient");
        }

        Ok(Self {
            window: None,
            render_system: None,
            scenes,
            composer,
            fps: FpsCounter::new(),
            exporter: Exporter::new(args.export_config()),
            render_config,
            init_failed: false,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop) {
        self.init_failed = true;
        event_loop.exit();
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

        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {e}");
                return self.fail(event_loop);
            }
        };

        let frame_size = (
            self.render_config.window_width,
            self.render_config.window_height,
        );
        let render_system =
            match pollster::block_on(RenderSystem::new(Arc::clone(&window), frame_size)) {
                Ok(render_system) => render_system,
                Err(e) => {
                    error!("Failed to initialize rendering: {e}");
                    return self.fail(event_loop);
                }
            };

        info!("Chromatica is running: click to regenerate, space to export");

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
                    render_system.resize(size);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.scenes.regenerate(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        repeat: false,
                        ..
                    },
                ..
            } => self.export_frame(),
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Compose and present a single frame
    fn render_frame(&mut self) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        self.fps.record_frame();
        let canvas = self.composer.compose(self.scenes.scene(), self.fps.fps());
        render_system.upload(canvas.image());

        match render_system.render() {
            Ok(()) => {}
            Err(RenderError::Surface(
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated,
            )) => {
                warn!("Surface lost, reconfiguring");
                render_system.reconfigure();
            }
            Err(e) => warn!("Render error: {e}"),
        }
    }

    /// Save the frame currently on screen; failures are logged and ignored
    fn export_frame(&mut self) {
        if let Err(e) = self.exporter.export(self.composer.canvas().image()) {
            warn!("Export failed: {e}");
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }

    if app.init_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
