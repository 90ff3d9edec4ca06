use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::error::{ConfigError, ValidationError};
use crate::frame::TileCanvas;
use crate::tileset::Tileset;

// ── MapConfiguration ────────────────────────────────────────────────────────

/// Map description as read from JSON.
///
/// ```json
/// { "Width": 2, "Height": 2, "TileWidth": 16, "TileHeight": 16,
///   "Board": [[0, 1], [1, 0]] }
/// ```
///
/// `Board` is rows outer, columns inner; every cell is a tileset index.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapConfiguration {
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub board: Vec<Vec<u32>>,
}

impl MapConfiguration {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&data)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parse a description that did not come from a file.  Parse errors
    /// report `<inline>` as their path.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|source| ConfigError::Parse { path: "<inline>".into(), source })
    }

    /// Check the board against the declared dimensions and a tileset of
    /// `tile_count` tiles.  Reports the first problem found, scanning rows
    /// top to bottom.
    pub fn validate(&self, tile_count: usize) -> Result<(), ValidationError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ValidationError::ZeroTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.board.len() != self.height as usize {
            return Err(ValidationError::RowCount {
                declared: self.height,
                actual: self.board.len(),
            });
        }
        for (y, row) in self.board.iter().enumerate() {
            if row.len() != self.width as usize {
                return Err(ValidationError::ColumnCount {
                    row: y,
                    declared: self.width,
                    actual: row.len(),
                });
            }
            if let Some((x, &index)) = row.iter().enumerate().find(|&(_, &i)| i as usize >= tile_count) {
                return Err(ValidationError::TileIndexOutOfRange { x, y, index, tile_count });
            }
        }
        Ok(())
    }
}

// ── Map ─────────────────────────────────────────────────────────────────────

/// A validated board paired with the tileset it indexes into.
pub struct Map {
    tileset: Tileset,
    width: u32,
    height: u32,
    tile_w: u32,
    tile_h: u32,
    board: Vec<Vec<u32>>,
}

impl Map {
    /// Fails if any board cell does not name a tile in `tileset`, so
    /// `draw` never has to handle a bad index.
    pub fn new(config: MapConfiguration, tileset: Tileset) -> Result<Self, ConfigError> {
        config.validate(tileset.len())?;
        log::info!(
            "map: {}x{} tiles of {}x{}px",
            config.width, config.height, config.tile_width, config.tile_height
        );
        Ok(Self {
            tileset,
            width: config.width,
            height: config.height,
            tile_w: config.tile_width,
            tile_h: config.tile_height,
            board: config.board,
        })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn tile_width(&self) -> u32 { self.tile_w }
    pub fn tile_height(&self) -> u32 { self.tile_h }
    pub fn tileset(&self) -> &Tileset { &self.tileset }

    /// Size of the whole board in world pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new((self.width * self.tile_w) as f32, (self.height * self.tile_h) as f32)
    }

    /// Tile index at grid cell `(x, y)`, or `None` outside the board.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<usize> {
        self.board.get(y)?.get(x).map(|&i| i as usize)
    }

    /// Issue one draw per cell, rows top to bottom, columns left to right.
    /// Cell `(x, y)` lands at world pixel `(x * tile_width, y * tile_height)`.
    pub fn draw(&self, canvas: &mut impl TileCanvas) {
        for (y, row) in self.board.iter().enumerate() {
            for (x, &index) in row.iter().enumerate() {
                let pos = Vec2::new(
                    (x as u32 * self.tile_w) as f32,
                    (y as u32 * self.tile_h) as f32,
                );
                canvas.draw_tile(index as usize, pos);
            }
        }
    }
}
