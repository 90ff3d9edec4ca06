use std::path::PathBuf;

use thiserror::Error;

/// An image or tileset file could not be turned into tiles.
#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("failed to load image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("tile size must be non-zero, got {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },
}

/// The map description could not be read, parsed, or does not fit its tileset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read map description {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse map description {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid map description: {0}")]
    Validation(#[from] ValidationError),
}

/// Semantic problems found by `MapConfiguration::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("tile size must be non-zero, got {width}x{height}")]
    ZeroTileSize { width: u32, height: u32 },

    #[error("board has {actual} rows but Height is {declared}")]
    RowCount { declared: u32, actual: usize },

    #[error("board row {row} has {actual} columns but Width is {declared}")]
    ColumnCount { row: usize, declared: u32, actual: usize },

    #[error("board cell ({x}, {y}) references tile {index}, tileset only has {tile_count}")]
    TileIndexOutOfRange {
        x: usize,
        y: usize,
        index: u32,
        tile_count: usize,
    },
}

/// GPU setup failures. All of them are fatal.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

/// Anything that stops the demo from starting or running.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Resource(#[from] ResourceLoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
