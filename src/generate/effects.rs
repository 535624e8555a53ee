//! Effect sprite generator (32x32): radial bursts and sparkles.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::color::{self, Color};
use crate::generate::draw;

pub const SIZE: u32 = 32;
const CENTER: i32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStyle {
    /// Concentric burst, opaque rim fading toward the core
    Radial,
    /// Eight-spoke sparkle with tip dots
    Spark,
}

pub fn render(color: Color, style: EffectStyle) -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    match style {
        EffectStyle::Radial => radial(&mut img, color),
        EffectStyle::Spark => spark(&mut img, color),
    }
    img
}

fn radial(img: &mut RgbaImage, color: Color) {
    for i in (1..=14i32).rev() {
        let alpha = (255.0 * i as f32 / 14.0 * 0.85) as u8;
        draw_filled_circle_mut(img, (CENTER, CENTER), i, Rgba(color::with_alpha(color, alpha)));
    }

    // Bright core
    draw_filled_circle_mut(img, (CENTER, CENTER), 3, Rgba([255, 255, 255, 255]));
    draw_filled_circle_mut(img, (CENTER, CENTER), 2, Rgba(color::with_alpha(color, 255)));
}

fn spark(img: &mut RgbaImage, color: Color) {
    for step in 0..8 {
        let rad = (step as f32 * 45.0).to_radians();
        let tip = (
            CENTER + (10.0 * rad.cos()) as i32,
            CENTER + (10.0 * rad.sin()) as i32,
        );
        let base = (
            CENTER + (5.0 * rad.cos()) as i32,
            CENTER + (5.0 * rad.sin()) as i32,
        );
        draw::thick_line(
            img,
            (base.0 as f32, base.1 as f32),
            (tip.0 as f32, tip.1 as f32),
            2,
            color::with_alpha(color, 200),
        );
        draw_filled_circle_mut(img, tip, 2, Rgba(color::with_alpha(color, 255)));
    }

    // Center glow
    draw_filled_circle_mut(img, (CENTER, CENTER), 4, Rgba([255, 255, 255, 255]));
    draw_filled_circle_mut(img, (CENTER, CENTER), 3, Rgba(color::with_alpha(color, 255)));
}
