use glam::Vec2;
use image::RgbaImage;
use tilescroll::background::parallax_positions;
use tilescroll::camera::CameraState;
use tilescroll::frame::{FrameBatch, Sprite, TextureKey, compose_frame};
use tilescroll::{Map, MapConfiguration, Tileset};

fn sample_map() -> Map {
    let mc = MapConfiguration {
        width: 2,
        height: 2,
        tile_width: 16,
        tile_height: 16,
        board: vec![vec![0, 1], vec![1, 0]],
    };
    let ts = Tileset::from_image(&RgbaImage::new(32, 16), 16, 16).unwrap();
    Map::new(mc, ts).unwrap()
}

fn tile(index: usize, x: f32, y: f32) -> Sprite {
    Sprite { texture: TextureKey::Tile(index), position: Vec2::new(x, y) }
}

// ── Parallax ──────────────────────────────────────────────────────────────

#[test]
fn no_scroll_starts_at_origin() {
    assert_eq!(
        parallax_positions(0.0, 800.0),
        [Vec2::new(0.0, 0.0), Vec2::new(800.0, 0.0)]
    );
}

#[test]
fn scroll_moves_background_left() {
    assert_eq!(
        parallax_positions(40.0, 800.0),
        [Vec2::new(-40.0, 0.0), Vec2::new(760.0, 0.0)]
    );
}

#[test]
fn scroll_past_width_loops() {
    assert_eq!(parallax_positions(850.0, 800.0), parallax_positions(50.0, 800.0));
    assert_eq!(parallax_positions(1600.0, 800.0), parallax_positions(0.0, 800.0));
}

#[test]
fn negative_scroll_loops() {
    assert_eq!(
        parallax_positions(-40.0, 800.0),
        [Vec2::new(-760.0, 0.0), Vec2::new(40.0, 0.0)]
    );
}

#[test]
fn copies_always_cover_the_left_edge() {
    for scroll in [-1234.0, -1.0, 0.0, 1.0, 799.0, 5000.5] {
        let [a, b] = parallax_positions(scroll, 800.0);
        assert!(a.x <= 0.0 && a.x > -800.0, "scroll {scroll}: {a:?}");
        assert_eq!(b.x - a.x, 800.0);
    }
}

// ── compose_frame ─────────────────────────────────────────────────────────

#[test]
fn frame_has_background_then_map() {
    let map = sample_map();
    let mut batch = FrameBatch::new();
    compose_frame(&mut batch, &map, &CameraState::new(10, 20), 800, false);

    assert_eq!(
        batch.background,
        vec![
            Sprite { texture: TextureKey::Background, position: Vec2::new(-10.0, 0.0) },
            Sprite { texture: TextureKey::Background, position: Vec2::new(790.0, 0.0) },
        ]
    );
    assert_eq!(
        batch.world,
        vec![tile(0, 0.0, 0.0), tile(1, 16.0, 0.0), tile(1, 0.0, 16.0), tile(0, 16.0, 16.0)]
    );
    assert!(batch.overlay.is_empty());
}

#[test]
fn tileset_strip_goes_to_overlay() {
    let map = sample_map();
    let mut batch = FrameBatch::new();
    compose_frame(&mut batch, &map, &CameraState::default(), 800, true);
    assert_eq!(batch.overlay, vec![tile(0, 0.0, 0.0), tile(1, 16.0, 0.0)]);
}

#[test]
fn composing_twice_replaces_previous_frame() {
    let map = sample_map();
    let mut batch = FrameBatch::new();
    compose_frame(&mut batch, &map, &CameraState::default(), 800, true);
    let first = (batch.background.clone(), batch.world.clone(), batch.overlay.clone());

    compose_frame(&mut batch, &map, &CameraState::default(), 800, true);
    assert_eq!(first, (batch.background.clone(), batch.world.clone(), batch.overlay.clone()));
}

#[test]
fn clear_empties_every_layer() {
    let map = sample_map();
    let mut batch = FrameBatch::new();
    compose_frame(&mut batch, &map, &CameraState::default(), 800, true);
    assert!(!batch.is_empty());
    batch.clear();
    assert!(batch.is_empty());
}
