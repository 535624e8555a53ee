//! Environment tile generator (32x32).
//!
//! Solid base fill plus per-kind texture noise. Noise is seeded from the
//! output filename, so repeated runs produce byte-identical tiles.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::color::{self, Color};
use crate::generate::draw;

pub const SIZE: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Grass,
    Stone,
    Water,
    Dirt,
    Sand,
    Snow,
}

const GRASS_SHADES: [f32; 6] = [0.75, 0.85, 0.95, 1.0, 1.1, 1.15];

fn rng_for(filename: &str) -> StdRng {
    let mut hasher = DefaultHasher::new();
    filename.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

pub fn render(filename: &str, color: Color, kind: TileKind) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(SIZE, SIZE, Rgba(color));
    let mut rng = rng_for(filename);

    match kind {
        TileKind::Grass => grass(&mut img, color, &mut rng),
        TileKind::Stone => stone(&mut img, color, &mut rng),
        TileKind::Water => water(&mut img, color),
        TileKind::Dirt => dirt(&mut img, color, &mut rng),
        TileKind::Sand => sand(&mut img, color, &mut rng),
        TileKind::Snow => snow(&mut img, color, &mut rng),
    }
    img
}

fn grass(img: &mut RgbaImage, color: Color, rng: &mut StdRng) {
    for _ in 0..35 {
        let x = rng.gen_range(0..32) as f32;
        let y = rng.gen_range(0..32) as f32;
        let blade = color::adjust(color, GRASS_SHADES[rng.gen_range(0..GRASS_SHADES.len())]);
        let length = rng.gen_range(2..=5) as f32;
        let sway = rng.gen_range(-1..=1) as f32;
        draw_line_segment_mut(img, (x, y), (x + sway, y + length), Rgba(blade));
    }
}

fn stone(img: &mut RgbaImage, color: Color, rng: &mut StdRng) {
    let crack = color::adjust(color, 0.65);
    for _ in 0..18 {
        let x1 = rng.gen_range(0..32);
        let y1 = rng.gen_range(0..32);
        let x2 = x1 + rng.gen_range(-6..=6);
        let y2 = y1 + rng.gen_range(-6..=6);
        draw_line_segment_mut(img, (x1 as f32, y1 as f32), (x2 as f32, y2 as f32), Rgba(crack));
    }

    // Speckle
    for _ in 0..30 {
        let x = rng.gen_range(0..32);
        let y = rng.gen_range(0..32);
        draw::put_pixel_safe(img, x, y, color::adjust(color, rng.gen_range(0.8..1.2)));
    }
}

// Staggered ripple rows; no noise, the pattern itself reads as water.
fn water(img: &mut RgbaImage, color: Color) {
    let wave = color::adjust(color, 1.25);
    for y in (0..32i32).step_by(4) {
        let offset = (y / 4) % 3;
        let mut x = offset;
        while x < 32 {
            draw_filled_ellipse_mut(img, (x + 2, y + 1), 2, 1, Rgba(wave));
            draw_filled_ellipse_mut(img, (x + 2, y), 1, 1, Rgba([255, 255, 255, 60]));
            x += 10;
        }
    }
}

fn dirt(img: &mut RgbaImage, color: Color, rng: &mut StdRng) {
    for _ in 0..50 {
        let x = rng.gen_range(0..32);
        let y = rng.gen_range(0..32);
        let particle = color::adjust(color, rng.gen_range(0.65..1.25));
        let size: i32 = rng.gen_range(1..=3);
        draw_filled_circle_mut(img, (x + size / 2, y + size / 2), size / 2, Rgba(particle));
    }
}

fn sand(img: &mut RgbaImage, color: Color, rng: &mut StdRng) {
    for _ in 0..60 {
        let x = rng.gen_range(0..32);
        let y = rng.gen_range(0..32);
        let grain = color::adjust(color, rng.gen_range(0.88..1.12));
        if rng.gen_bool(0.1) {
            draw_filled_rect_mut(img, Rect::at(x, y).of_size(2, 2), Rgba(grain));
        } else {
            draw::put_pixel_safe(img, x, y, grain);
        }
    }
}

fn snow(img: &mut RgbaImage, color: Color, rng: &mut StdRng) {
    for _ in 0..30 {
        let x = rng.gen_range(0..32);
        let y = rng.gen_range(0..32);
        if rng.gen_bool(0.25) {
            // Sparkle: bright center with a soft cross
            draw::put_pixel_safe(img, x, y, [255, 255, 255, 255]);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                draw::put_pixel_safe(img, x + dx, y + dy, [255, 255, 255, 180]);
            }
        } else {
            draw::put_pixel_safe(img, x, y, color::adjust(color, rng.gen_range(0.94..1.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_declared_size() {
        let img = render("grass.png", [90, 175, 90, 255], TileKind::Grass);
        assert_eq!((img.width(), img.height()), (SIZE, SIZE));
    }

    #[test]
    fn test_noise_is_deterministic_per_filename() {
        let a = render("stone.png", [125, 125, 130, 255], TileKind::Stone);
        let b = render("stone.png", [125, 125, 130, 255], TileKind::Stone);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_different_filenames_scatter_differently() {
        let a = render("dirt.png", [145, 105, 75, 255], TileKind::Dirt);
        let b = render("dirt2.png", [145, 105, 75, 255], TileKind::Dirt);
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_base_fill_shows_through_the_noise() {
        let img = render("sand.png", [225, 205, 155, 255], TileKind::Sand);
        let base = img
            .pixels()
            .filter(|p| p.0 == [225, 205, 155, 255])
            .count();
        // 60 grains cannot cover a 32x32 tile
        assert!(base > 400, "expected mostly base fill, got {} base pixels", base);
    }
}
