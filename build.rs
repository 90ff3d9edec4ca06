// Generates the demo's sample images under media/ when they are missing.
// Existing files are never overwritten, so hand-made art can replace them.

use image::{Rgba, RgbaImage};
use std::path::Path;

const TILE: u32 = 16;

fn fill_tile(img: &mut RgbaImage, col: u32, row: u32, f: impl Fn(u32, u32) -> [u8; 4]) {
    for y in 0..TILE {
        for x in 0..TILE {
            img.put_pixel(col * TILE + x, row * TILE + y, Rgba(f(x, y)));
        }
    }
}

fn draw_tileset() -> RgbaImage {
    // 4 × 2 tiles, indices 0..8 in row-major order.
    let mut img = RgbaImage::new(4 * TILE, 2 * TILE);

    // 0: grass
    fill_tile(&mut img, 0, 0, |x, y| {
        if (x * 7 + y * 3) % 11 == 0 { [0x3E, 0x8E, 0x2E, 0xFF] } else { [0x5A, 0xB0, 0x3C, 0xFF] }
    });
    // 1: dirt
    fill_tile(&mut img, 1, 0, |x, y| {
        if (x * 5 + y * 9) % 13 == 0 { [0x6B, 0x47, 0x22, 0xFF] } else { [0x8B, 0x5E, 0x34, 0xFF] }
    });
    // 2: water
    fill_tile(&mut img, 2, 0, |x, y| {
        if (x + y * 2) % 8 == 0 { [0x7F, 0xC8, 0xF0, 0xFF] } else { [0x2A, 0x6F, 0xC9, 0xFF] }
    });
    // 3: stone
    fill_tile(&mut img, 3, 0, |x, y| {
        let edge = x == 0 || y == 0 || x == TILE - 1 || y == TILE - 1;
        if edge { [0x55, 0x55, 0x5A, 0xFF] } else { [0x8A, 0x8A, 0x90, 0xFF] }
    });
    // 4: brick wall
    fill_tile(&mut img, 0, 1, |x, y| {
        let brick_row = y / 4;
        let offset_x = if brick_row % 2 == 0 { 0 } else { TILE / 4 };
        let mortar = y % 4 == 0 || (x + offset_x) % (TILE / 2) == 0;
        if mortar { [0x4A, 0x48, 0x45, 0xFF] } else { [0xA0, 0x4A, 0x38, 0xFF] }
    });
    // 5: sand
    fill_tile(&mut img, 1, 1, |x, y| {
        if (x * 3 + y * 7) % 9 == 0 { [0xC8, 0xB0, 0x70, 0xFF] } else { [0xE6, 0xD2, 0x8E, 0xFF] }
    });
    // 6: flowers on grass
    fill_tile(&mut img, 2, 1, |x, y| {
        if (x % 5 == 2) && (y % 5 == 2) { [0xF2, 0xE1, 0x4C, 0xFF] } else { [0x5A, 0xB0, 0x3C, 0xFF] }
    });
    // 7: transparent
    fill_tile(&mut img, 3, 1, |_, _| [0, 0, 0, 0]);

    img
}

fn draw_background(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        // Rolling hills over a vertical sky gradient.  The hill curve repeats
        // exactly once across the width so the image loops horizontally.
        let phase = x as f32 / width as f32 * std::f32::consts::TAU;
        let hill = height as f32 * (0.7 - 0.08 * (phase * 3.0).sin());
        if y as f32 > hill {
            Rgba([0x4C, 0x7A, 0x52, 0xFF])
        } else {
            let t = y as f32 / height as f32;
            let lerp = |a: f32, b: f32| (a + (b - a) * t) as u8;
            Rgba([lerp(110.0, 200.0), lerp(160.0, 225.0), lerp(230.0, 245.0), 0xFF])
        }
    })
}

fn save_if_missing(path: &Path, img: RgbaImage) {
    if !path.exists() {
        img.save(path)
            .unwrap_or_else(|e| println!("cargo:warning=could not save {}: {e}", path.display()));
    }
}

fn main() {
    let dir = Path::new("media");
    std::fs::create_dir_all(dir).expect("build: failed to create media/");

    save_if_missing(&dir.join("tileset.png"), draw_tileset());
    save_if_missing(&dir.join("background.png"), draw_background(800, 450));

    println!("cargo:rerun-if-changed=build.rs");
}
