use glam::Vec2;

use crate::background::parallax_positions;
use crate::camera::CameraState;
use crate::map::Map;

/// Anything tiles can be drawn onto by index.
///
/// `Map` and `Tileset` only ever talk to this trait; the renderer's frame
/// layers implement it for real drawing and tests implement it to record
/// draw calls.
pub trait TileCanvas {
    fn draw_tile(&mut self, index: usize, position: Vec2);
}

/// Which GPU texture a sprite samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureKey {
    Tile(usize),
    Background,
}

/// One textured quad, drawn at the texture's natural pixel size with its
/// top-left corner at `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub texture: TextureKey,
    pub position: Vec2,
}

/// Everything drawn in one frame.
///
/// Layers are drawn in field order.  `background` and `overlay` use window
/// pixel coordinates; `world` goes through the camera transform.
#[derive(Debug, Default)]
pub struct FrameBatch {
    pub background: Vec<Sprite>,
    pub world: Vec<Sprite>,
    pub overlay: Vec<Sprite>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.background.clear();
        self.world.clear();
        self.overlay.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.world.is_empty() && self.overlay.is_empty()
    }
}

/// A single layer of a `FrameBatch` seen as a tile canvas.
pub struct Layer<'a>(pub &'a mut Vec<Sprite>);

impl TileCanvas for Layer<'_> {
    fn draw_tile(&mut self, index: usize, position: Vec2) {
        self.0.push(Sprite { texture: TextureKey::Tile(index), position });
    }
}

/// Fill `batch` with one frame of the demo: the scrolling background, the
/// map under the camera, then the tileset strip if enabled.
pub fn compose_frame(
    batch: &mut FrameBatch,
    map: &Map,
    state: &CameraState,
    background_width: u32,
    show_tileset: bool,
) {
    batch.clear();

    for position in parallax_positions(state.position.x as f32, background_width as f32) {
        batch.background.push(Sprite { texture: TextureKey::Background, position });
    }

    map.draw(&mut Layer(&mut batch.world));

    if show_tileset {
        map.tileset().draw_debug(&mut Layer(&mut batch.overlay));
    }
}
