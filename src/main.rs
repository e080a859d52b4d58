use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_renderer::cli::Cli;
use scene_renderer::config::{SceneConfig, WindowConfig};
use scene_renderer::core::WinitController;
use scene_renderer::frame::{FpsCounter, FrameClock};
use scene_renderer::renderer::{LogBackend, RecordingBackend, Renderer};
use scene_renderer::scene::Scene;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    window_config: WindowConfig,
    scene: Scene,
    controller: WinitController,
    clock: FrameClock,
    fps: FpsCounter,
    renderer: Renderer,
    backend: LogBackend,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(window_config: WindowConfig, scene: Scene) -> Self {
        Self {
            window: None,
            window_config,
            scene,
            controller: WinitController::new(),
            clock: FrameClock::real_time(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            renderer: Renderer::new(),
            backend: LogBackend::default(),
            error: None,
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let frame = self.clock.tick();
        if let Some(fps) = self.fps.tick(frame.delta) {
            log::info!("FPS: {:.1}", fps);
        }

        self.scene.update(frame.delta, &self.controller);
        self.renderer
            .render_frame(&mut self.scene, frame, &mut self.backend)?;
        self.controller.reset_deltas();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.window_config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ));
        let window = match event_loop
            .create_window(attributes)
            .context("Failed to create window")
        {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let size = window.inner_size();
        self.scene.resize(size.width, size.height);
        self.clock.reset();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Tab),
                        repeat: false,
                        ..
                    },
                ..
            } => self.scene.next_camera(),
            WindowEvent::Resized(size) => self.scene.resize(size.width, size.height),
            WindowEvent::Focused(false) => self.controller.clear(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
                return;
            }
            _ => {}
        }

        self.controller.process_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_windowed(window_config: WindowConfig, scene: Scene) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(window_config, scene);

    println!("Scene Renderer - Controls: WASD, Space/Shift, hold left mouse to look, Tab switches camera, Escape to quit");
    event_loop.run_app(&mut app).context("Event loop terminated")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn run_headless(cli: &Cli, mut scene: Scene) -> Result<()> {
    let input = cli.scripted_input();
    let mut renderer = Renderer::new();
    let mut backend = RecordingBackend::default();
    let mut draw_calls = 0;

    for frame in FrameClock::fixed(cli.dt).take(cli.frames as usize) {
        scene.update(frame.delta, &input);
        draw_calls += renderer.render_frame(&mut scene, frame, &mut backend)?.draw_calls;
    }

    log::info!(
        "headless run: {} frames, {} draw calls",
        renderer.frames_rendered(),
        draw_calls
    );

    if let Some(camera) = scene.active_camera() {
        let transform = camera.transform();
        println!(
            "camera {}: position {:?}, rotation {:?}",
            scene.active_camera_index(),
            transform.position(),
            transform.pitch_yaw_roll()
        );
    }
    println!(
        "rendered {} frames ({} draw calls)",
        renderer.frames_rendered(),
        draw_calls
    );

    if let Some(path) = &cli.dump {
        let last = backend
            .last_frame()
            .context("No frame was rendered, nothing to dump")?;
        let json = serde_json::to_string_pretty(last).context("Failed to serialize frame")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write frame dump {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.scene {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(width) = cli.width {
        config.window.width = width;
    }
    if let Some(height) = cli.height {
        config.window.height = height;
    }
    if let Some(camera) = cli.camera {
        config.active_camera = camera;
    }

    let scene = config.build().context("Invalid scene")?;

    if cli.headless {
        run_headless(&cli, scene)
    } else {
        run_windowed(config.window, scene)
    }
}
