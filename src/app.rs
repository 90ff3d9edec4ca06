use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use image::RgbaImage;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::camera::{Camera2D, CameraState};
use crate::error::{DemoError, ResourceLoadError};
use crate::frame::{FrameBatch, compose_frame};
use crate::input::{ActionMap, Direction, InputState};
use crate::map::{Map, MapConfiguration};
use crate::renderer::Renderer;
use crate::tileset::Tileset;
use crate::window::{MediaPaths, WindowConfig, WindowMode, apply_window_settings, window_attributes};

/// Longest frame the update accumulator will catch up on.
const MAX_FRAME_TIME: f32 = 0.25;

// ── Assets ──────────────────────────────────────────────────────────────────

/// Everything read from disk before the window opens.
pub struct Assets {
    pub map: Map,
    pub background: RgbaImage,
}

/// Load the map description, slice the tileset at the map's tile size,
/// validate the board against it and decode the background.  The first
/// failure is returned; nothing is retried.
pub fn load_assets(paths: &MediaPaths) -> Result<Assets, DemoError> {
    let config = MapConfiguration::load(&paths.map)?;
    let tileset = Tileset::load(&paths.tileset, config.tile_width, config.tile_height)?;
    let map = Map::new(config, tileset)?;
    let background = image::open(&paths.background)
        .map_err(|source| ResourceLoadError::Image { path: paths.background.clone(), source })?
        .to_rgba8();
    Ok(Assets { map, background })
}

// ── Demo ────────────────────────────────────────────────────────────────────

/// One-shot actions triggered on key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAction {
    ToggleTileset,
    Quit,
}

impl DemoAction {
    pub fn default_bindings() -> ActionMap<DemoAction> {
        let mut map = ActionMap::new();
        map.bind(DemoAction::ToggleTileset, KeyCode::Tab);
        map.bind(DemoAction::Quit, KeyCode::Escape);
        map
    }
}

/// Window-independent demo state: the map, the camera and the toggles.
pub struct Demo {
    pub assets: Assets,
    pub state: CameraState,
    pub camera: Camera2D,
    pub show_tileset: bool,
    pub quit_requested: bool,
    movement: ActionMap<Direction>,
    actions: ActionMap<DemoAction>,
    batch: FrameBatch,
}

impl Demo {
    pub fn new(assets: Assets, window: &WindowConfig) -> Self {
        let state = CameraState::default();
        Self {
            assets,
            state,
            camera: Camera2D::centered(window.width, window.height, &state),
            show_tileset: false,
            quit_requested: false,
            movement: Direction::default_bindings(),
            actions: DemoAction::default_bindings(),
            batch: FrameBatch::new(),
        }
    }

    /// Handle key presses that should fire once per frame, not once per tick.
    pub fn handle_actions(&mut self, input: &InputState) {
        if self.actions.is_pressed(DemoAction::Quit, input) {
            self.quit_requested = true;
        }
        if self.actions.is_pressed(DemoAction::ToggleTileset, input) {
            self.show_tileset = !self.show_tileset;
        }
    }

    /// One fixed-rate update: move, then re-point the camera.
    pub fn tick(&mut self, input: &InputState) {
        self.state = self.state.update(&self.movement, input);
        self.camera.follow(&self.state);
    }

    /// Rebuild and return this frame's draw list.
    pub fn frame(&mut self) -> &FrameBatch {
        compose_frame(
            &mut self.batch,
            &self.assets.map,
            &self.state,
            self.assets.background.width(),
            self.show_tileset,
        );
        &self.batch
    }
}

// ── DemoBuilder ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct DemoBuilder {
    window: WindowConfig,
    media: MediaPaths,
}

impl DemoBuilder {
    pub fn new() -> Self { Self::default() }
    pub fn with_title(mut self, title: &str) -> Self { self.window.title = title.into(); self }
    pub fn with_size(mut self, width: u32, height: u32) -> Self { self.window.width = width; self.window.height = height; self }
    pub fn with_fps(mut self, fps: u32) -> Self { self.window.target_fps = fps; self }
    pub fn with_window_mode(mut self, mode: WindowMode) -> Self { self.window.mode = mode; self }

    /// Directory holding `map.json`, `tileset.png` and `background.png`.
    pub fn with_media_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.media = MediaPaths::in_dir(dir.into());
        self
    }

    pub fn window_config(&self) -> &WindowConfig { &self.window }
    pub fn media_paths(&self) -> &MediaPaths { &self.media }

    /// Load every asset, open the window and run until it is closed.
    ///
    /// Asset errors are returned before any window is created.
    pub fn run(self) -> Result<(), DemoError> {
        let assets = load_assets(&self.media)?;
        let demo = Demo::new(assets, &self.window);

        let event_loop = EventLoop::new()?;
        let mut app = App {
            fixed_dt: self.window.fixed_dt(),
            config: self.window,
            demo,
            renderer: None,
            input: InputState::new(),
            last_instant: None,
            accumulator: 0.0,
            error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => {
                log::info!("shutting down");
                Ok(())
            }
        }
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: WindowConfig,
    demo: Demo,
    renderer: Option<Renderer>,
    input: InputState,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
    /// Fatal error raised inside the event loop, returned from `run`.
    error: Option<DemoError>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: DemoError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32().min(MAX_FRAME_TIME),
            None => self.fixed_dt,
        };
        self.last_instant = Some(now);
        self.accumulator += elapsed;

        self.demo.handle_actions(&self.input);
        if self.demo.quit_requested {
            event_loop.exit();
            return;
        }

        while self.accumulator >= self.fixed_dt {
            self.demo.tick(&self.input);
            self.accumulator -= self.fixed_dt;
        }

        self.draw();
        self.input.clear_frame_state();
    }

    fn draw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else { return };
        let size = renderer.size();
        renderer.update_camera(&self.demo.camera.build_view_proj(size.width as f32, size.height as f32));

        match renderer.render(self.demo.frame()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.window.inner_size();
                renderer.resize(size);
            }
            Err(e) => log::warn!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        let window = match event_loop.create_window(window_attributes(&self.config)) {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(event_loop, DemoError::Render(e.into())),
        };
        if self.config.mode != WindowMode::Windowed {
            apply_window_settings(&window, &self.config);
        }

        let assets = &self.demo.assets;
        match pollster::block_on(Renderer::new(window, assets.map.tileset(), &assets.background)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => self.fail(event_loop, e.into()),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
                self.demo.camera.offset = glam::Vec2::new(size.width as f32 / 2.0, size.height as f32 / 2.0);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.input.press(code),
                ElementState::Released => self.input.release(code),
            },

            _ => {}
        }
    }
}
