//! Voxedit - interactive voxel scene editor

use std::path::PathBuf;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use voxedit::audio;
use voxedit::core::{
    camera::Camera,
    camera_controller::FpsCameraController,
    error::Error,
    input::InputState,
    logging,
    time::FrameTimer,
};
use voxedit::editor::{bindings, EditorContext};
use voxedit::render::{window::set_cursor_grab, RenderPolicy, Renderer, WindowConfig};
use voxedit::scene::EditorConfig;

/// Vertical field of view in degrees
const FOV_Y: f32 = 67.0;

struct App {
    config: EditorConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    editor: EditorContext,
    camera: Camera,
    controller: FpsCameraController,
    input: InputState,
    timer: FrameTimer,
    cursor_grabbed: bool,
}

impl App {
    fn new(config: EditorConfig, editor: EditorContext) -> Self {
        let [width, height] = config.window_size;
        let mut camera = Camera::new(config.camera_start(), FOV_Y, width.max(1) as f32 / height.max(1) as f32);
        let mut controller = FpsCameraController::new(config.camera_speed, config.mouse_sensitivity);
        controller.set_orientation(&mut camera, 0.0, 0.0);

        Self {
            config,
            window: None,
            renderer: None,
            editor,
            camera,
            controller,
            input: InputState::new(),
            timer: FrameTimer::new(),
            cursor_grabbed: false,
        }
    }

    fn toggle_cursor_grab(&mut self) {
        if let Some(window) = &self.window {
            let grab = !self.cursor_grabbed;
            match set_cursor_grab(window, grab) {
                Ok(()) => {
                    self.cursor_grabbed = grab;
                    self.input.set_mouse_captured(grab);
                }
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    /// One frame: move, select, edit, draw
    fn frame(&mut self) {
        self.timer.tick();
        self.controller.update(&mut self.camera, &self.input, self.timer.delta_secs());

        let ray = self.camera.view_ray();
        self.editor.update_selection(ray.origin, ray.direction);
        for command in bindings::commands(&self.input, &self.config.palette) {
            self.editor.apply(command);
        }

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.camera, self.editor.grid()) {
                log::warn!("Frame skipped: {}", e);
            }
        }

        if let Some(window) = &self.window {
            let grid = self.editor.grid();
            let status = self.editor.status().unwrap_or("Tab=mouse, WASD=move, K=save, L=load");
            window.set_title(&format!(
                "{} - {:.0} FPS | {} voxels | spacing {:.1} | {}",
                self.config.window_title, self.timer.fps(), grid.visible_count(), grid.spacing(), status
            ));
        }

        self.input.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowConfig::from(&self.config).attributes();
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let policy = RenderPolicy::from(&self.config);
        match pollster::block_on(Renderer::new(window.clone(), policy)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("Failed to create renderer: {}", e);
                event_loop.exit();
                return;
            }
        }

        let size = window.inner_size();
        self.camera.set_aspect(size.width as f32, size.height as f32);
        log::info!("Window created: {}x{}", size.width, size.height);

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(size.width, size.height);
                    }
                    self.camera.set_aspect(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => {
                            if self.cursor_grabbed {
                                self.toggle_cursor_grab();
                            } else {
                                event_loop.exit();
                            }
                        }
                        PhysicalKey::Code(KeyCode::Tab) => self.toggle_cursor_grab(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    logging::init();
    log::info!("Voxedit starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().collect();
    let config = build_config(&args)?;
    log::info!(
        "Grid {}³ at spacing {}, scenes in {}",
        config.grid_size, config.grid_spacing, config.scene_path.display()
    );

    let audio = audio::default_sink(&config.sound_dir);
    let editor = EditorContext::new(&config, audio)?;

    let event_loop = EventLoop::new()
        .map_err(|e| Error::Window(format!("Failed to create event loop: {}", e)))?;
    let mut app = App::new(config, editor);

    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::Window(format!("Event loop error: {}", e)))?;
    Ok(())
}

/// Config file first, then command line overrides
fn build_config(args: &[String]) -> Result<EditorConfig, Error> {
    let mut config = match parse_arg(args, "--config", "-c") {
        Some(path) => {
            log::info!("Loading config from: {}", path);
            EditorConfig::from_file(path)?
        }
        None => EditorConfig::default(),
    };

    if let Some(path) = parse_arg(args, "--scene", "-f") {
        config.scene_path = PathBuf::from(path);
    }
    if let Some(size) = parse_arg(args, "--size", "-s") {
        config.grid_size = size.parse()
            .map_err(|_| Error::Config(format!("--size expects an integer, got `{}`", size)))?;
    }

    config.validate()?;
    Ok(config)
}

/// Value following `long` or `short` on the command line
fn parse_arg<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == long || a == short)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
