pub mod app;
pub mod background;
pub mod camera;
pub mod error;
pub mod frame;
pub mod input;
pub mod map;
pub mod renderer;
pub mod tileset;
pub mod window;

pub use app::{Demo, DemoBuilder};
pub use error::{ConfigError, DemoError, RenderError, ResourceLoadError, ValidationError};
pub use map::{Map, MapConfiguration};
pub use tileset::Tileset;
