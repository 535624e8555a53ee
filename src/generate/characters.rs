//! Character sprite generator (64x64).
//!
//! Builds a chibi-proportioned figure out of shaded primitives: ground
//! shadow, legs, gradient body, arms, head with facial features.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::color::{self, Color};
use crate::generate::draw;

pub const SIZE: u32 = 64;

pub fn render(color: Color) -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);

    let dark = color::adjust(color, 0.65);
    let light = color::adjust(color, 1.35);

    // Ground shadow
    draw_filled_ellipse_mut(&mut img, (32, 59), 14, 3, Rgba([0, 0, 0, 70]));

    // Legs: dark base, lit front face, highlight seam
    for leg_x in [23, 35] {
        draw_filled_rect_mut(&mut img, Rect::at(leg_x, 44).of_size(7, 15), Rgba(dark));
        draw_filled_rect_mut(&mut img, Rect::at(leg_x + 1, 44).of_size(5, 15), Rgba(color));
        draw_line_segment_mut(
            &mut img,
            ((leg_x + 3) as f32, 44.0),
            ((leg_x + 3) as f32, 58.0),
            Rgba(light),
        );
    }

    // Body: stacked ellipses brightening toward the chest
    for y in (20..52i32).step_by(2) {
        let factor = 0.95 + (y - 36) as f32 * 0.008;
        draw_filled_ellipse_mut(&mut img, (32, y + 2), 15, 2, Rgba(color::adjust(color, factor)));
    }

    // Arms, with a highlight on the upper side
    for arm_x in [16, 48] {
        draw_filled_ellipse_mut(&mut img, (arm_x, 34), 6, 8, Rgba(dark));
        draw_filled_ellipse_mut(&mut img, (arm_x, 34), 5, 7, Rgba(color));
    }
    draw_filled_ellipse_mut(&mut img, (15, 32), 3, 4, Rgba(light));
    draw_filled_ellipse_mut(&mut img, (49, 32), 3, 4, Rgba(light));

    // Head, a shade brighter than the body, offset over a dark rim
    let head = color::adjust(color, 1.2);
    draw_filled_ellipse_mut(&mut img, (32, 19), 11, 11, Rgba(dark));
    draw_filled_ellipse_mut(&mut img, (32, 18), 10, 11, Rgba(head));
    draw_filled_ellipse_mut(&mut img, (28, 13), 4, 3, Rgba(light));

    // Eyes with catchlights
    for eye_x in [28, 35] {
        draw_filled_circle_mut(&mut img, (eye_x, 16), 1, Rgba([40, 40, 40, 255]));
        draw::put_pixel_safe(&mut img, eye_x, 16, [255, 255, 255, 200]);
    }

    // Mouth
    draw::arc(&mut img, (32.0, 20.5), 4.0, 2.5, 0.0, 180.0, 1, [40, 40, 40, 255]);

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_declared_size() {
        let img = render([220, 85, 85, 255]);
        assert_eq!((img.width(), img.height()), (SIZE, SIZE));
    }

    #[test]
    fn test_corners_stay_transparent() {
        let img = render([85, 125, 220, 255]);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(63, 0).0[3], 0);
    }

    #[test]
    fn test_body_carries_the_base_color_family() {
        let base = [85, 200, 105, 255];
        let img = render(base);
        // Chest center sits inside the gradient band; green must dominate.
        let p = img.get_pixel(32, 36).0;
        assert!(p[1] > p[0] && p[1] > p[2], "unexpected chest color {:?}", p);
    }
}
