use std::path::Path;

use glam::Vec2;
use image::RgbaImage;

use crate::error::ResourceLoadError;
use crate::frame::TileCanvas;

/// Pixel rectangle a tile was cut from in the source image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fixed-size tiles sliced from one source image.
///
/// Tiles are stored in row-major order of their position in the source:
/// index `i` was cut from column `i % columns`, row `i / columns`.  Map
/// boards refer to tiles purely by this index, so the order is part of the
/// contract.
pub struct Tileset {
    tiles: Vec<RgbaImage>,
    tile_w: u32,
    tile_h: u32,
    cols: u32,
    rows: u32,
}

impl Tileset {
    /// Decode the image at `path` and slice it into `tile_w × tile_h` tiles.
    pub fn load(path: impl AsRef<Path>, tile_w: u32, tile_h: u32) -> Result<Self, ResourceLoadError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| ResourceLoadError::Image { path: path.to_path_buf(), source })?
            .to_rgba8();
        let tileset = Self::from_image(&img, tile_w, tile_h)?;
        log::info!(
            "tileset {:?}: {} tiles ({}x{} of {}x{}px)",
            path, tileset.len(), tileset.cols, tileset.rows, tile_w, tile_h
        );
        Ok(tileset)
    }

    /// Slice an already decoded image.
    ///
    /// Column and row counts use integer division: a trailing strip of
    /// pixels narrower than one tile is dropped, not reported.
    pub fn from_image(img: &RgbaImage, tile_w: u32, tile_h: u32) -> Result<Self, ResourceLoadError> {
        if tile_w == 0 || tile_h == 0 {
            return Err(ResourceLoadError::InvalidTileSize { width: tile_w, height: tile_h });
        }

        let (img_w, img_h) = img.dimensions();
        let cols = img_w / tile_w;
        let rows = img_h / tile_h;

        let mut tiles = Vec::with_capacity((cols * rows) as usize);
        for y in 0..rows {
            for x in 0..cols {
                let tile = image::imageops::crop_imm(img, x * tile_w, y * tile_h, tile_w, tile_h);
                tiles.push(tile.to_image());
            }
        }

        Ok(Self { tiles, tile_w, tile_h, cols, rows })
    }

    pub fn len(&self) -> usize { self.tiles.len() }
    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }
    pub fn tile_width(&self) -> u32 { self.tile_w }
    pub fn tile_height(&self) -> u32 { self.tile_h }
    pub fn columns(&self) -> u32 { self.cols }
    pub fn rows(&self) -> u32 { self.rows }

    /// All tile images, in index order.
    pub fn tiles(&self) -> &[RgbaImage] {
        &self.tiles
    }

    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.tiles.get(index)
    }

    /// Where tile `index` was cut from, or `None` if there is no such tile.
    pub fn source_rect(&self, index: usize) -> Option<TileRect> {
        if index >= self.tiles.len() {
            return None;
        }
        let index = index as u32;
        Some(TileRect {
            x: (index % self.cols) * self.tile_w,
            y: (index / self.cols) * self.tile_h,
            width: self.tile_w,
            height: self.tile_h,
        })
    }

    /// Lay every tile out in a single row starting at the canvas origin,
    /// tile `i` at `(i * tile_width, 0)`.  Handy for checking which index
    /// a tile ended up with.
    pub fn draw_debug(&self, canvas: &mut impl TileCanvas) {
        for i in 0..self.tiles.len() {
            canvas.draw_tile(i, Vec2::new((i as u32 * self.tile_w) as f32, 0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn zero_tile_size_is_rejected() {
        let img = RgbaImage::new(32, 32);
        assert!(matches!(
            Tileset::from_image(&img, 0, 16),
            Err(ResourceLoadError::InvalidTileSize { width: 0, height: 16 })
        ));
    }

    #[test]
    fn image_smaller_than_a_tile_gives_empty_tileset() {
        let img = RgbaImage::new(8, 8);
        let ts = Tileset::from_image(&img, 16, 16).unwrap();
        assert!(ts.is_empty());
        assert_eq!(ts.source_rect(0), None);
    }

    #[test]
    fn tiles_keep_their_source_pixels() {
        // 2×1 tiles of 2×2px: left half red, right half blue.
        let img = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 255, 255]) }
        });
        let ts = Tileset::from_image(&img, 2, 2).unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(ts.get(0).unwrap().get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(ts.get(1).unwrap().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(ts.get(0).unwrap().dimensions(), (2, 2));
    }
}
