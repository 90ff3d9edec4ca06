pub mod config;

pub use config::{MediaPaths, WindowConfig, WindowMode};

use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Attributes for creating a window matching `config`.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
}

/// Apply `config.mode` to an existing window.
///
/// # Windowed
/// Leaves fullscreen, restores decorations and requests the configured size.
/// The resize may arrive later as a `WindowEvent::Resized`.
///
/// # Borderless
/// Covers the monitor the window is currently on.  The camera offset is
/// not recomputed; the view stays anchored to the configured size.
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    match config.mode {
        WindowMode::Windowed => {
            window.set_fullscreen(None);
            window.set_decorations(true);
            let _ = window.request_inner_size(PhysicalSize::new(config.width, config.height));
        }
        WindowMode::Borderless => {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }
}
