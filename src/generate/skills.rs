//! Skill icon generator (64x64).
//!
//! Layered radial glow, gradient disc, double border ring, and a centered
//! symbol with a drop shadow. The symbol is text when a system font is
//! available, otherwise a builtin four-point star glyph.

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_polygon_mut, draw_text_mut, text_size,
};
use imageproc::point::Point;

use crate::color::{self, Color};
use crate::generate::draw;

pub const SIZE: u32 = 64;
const CENTER: i32 = 32;

pub fn render(color: Color, symbol: char, font: Option<&FontVec>) -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);

    // Outer glow: discs shrinking toward the rim with rising alpha
    for i in (1..=8i32).rev() {
        let alpha = (40 * (8 - i) / 8) as u8;
        draw_filled_circle_mut(
            &mut img,
            (CENTER, CENTER),
            28 + i,
            Rgba(color::with_alpha(color, alpha)),
        );
    }

    // Main disc: radial gradient, dark center out to full color at the rim
    for r in (1..=28i32).rev() {
        let factor = 0.5 + (r as f32 / 28.0) * 0.5;
        draw_filled_circle_mut(&mut img, (CENTER, CENTER), r, Rgba(color::adjust(color, factor)));
    }

    // Upper-left sheen
    draw_filled_ellipse_mut(&mut img, (28, 22), 10, 8, Rgba([255, 255, 255, 50]));
    draw_filled_ellipse_mut(&mut img, (28, 22), 8, 6, Rgba([255, 255, 255, 30]));

    // Double border: white outer ring, colored inner ring
    draw::ring(&mut img, (CENTER, CENTER), 28.0, 3.0, [255, 255, 255, 180]);
    draw::ring(&mut img, (CENTER, CENTER), 26.0, 2.0, color::with_alpha(color, 255));

    match font {
        Some(font) => draw_symbol_text(&mut img, symbol, font),
        None => draw_symbol_glyph(&mut img),
    }

    img
}

fn draw_symbol_text(img: &mut RgbaImage, symbol: char, font: &FontVec) {
    let scale = PxScale::from(34.0);
    let text = symbol.to_string();
    let (w, h) = text_size(scale, font, &text);
    let x = (SIZE as i32 - w as i32) / 2;
    let y = (SIZE as i32 - h as i32) / 2 - 4;

    // Shadow first for depth
    draw_text_mut(img, Rgba([0, 0, 0, 180]), x + 2, y + 2, scale, font, &text);
    draw_text_mut(img, Rgba([255, 255, 255, 255]), x, y, scale, font, &text);
}

/// Font fallback: a four-point star with the same drop shadow treatment.
fn draw_symbol_glyph(img: &mut RgbaImage) {
    let star = |cx: i32, cy: i32| {
        [
            Point::new(cx, cy - 12),
            Point::new(cx + 3, cy - 3),
            Point::new(cx + 12, cy),
            Point::new(cx + 3, cy + 3),
            Point::new(cx, cy + 12),
            Point::new(cx - 3, cy + 3),
            Point::new(cx - 12, cy),
            Point::new(cx - 3, cy - 3),
        ]
    };
    draw_polygon_mut(img, &star(CENTER + 2, CENTER + 2), Rgba([0, 0, 0, 180]));
    draw_polygon_mut(img, &star(CENTER, CENTER), Rgba([255, 255, 255, 255]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_declared_size() {
        let img = render([255, 105, 25, 255], 'F', None);
        assert_eq!((img.width(), img.height()), (SIZE, SIZE));
    }

    #[test]
    fn test_fallback_glyph_marks_the_center() {
        let img = render([105, 155, 255, 255], 'S', None);
        assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_glow_fades_outside_the_disc() {
        let img = render([255, 105, 25, 255], 'F', None);
        // Just inside the outermost glow ring: translucent, not opaque.
        let edge = img.get_pixel(32, 1).0;
        assert!(edge[3] < 60, "glow should be faint at the rim, got {:?}", edge);
    }
}
