//! Item icon generator (32x32).
//!
//! One hand-placed recipe per item shape, all framed by a subtle border.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::color::{self, Color};
use crate::generate::draw;

pub const SIZE: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemShape {
    Sword,
    Potion,
    Armor,
    Helmet,
    Boots,
    Ring,
    Amulet,
}

pub fn render(color: Color, shape: ItemShape) -> RgbaImage {
    let mut img = RgbaImage::new(SIZE, SIZE);
    let dark = color::adjust(color, 0.6);
    let light = color::adjust(color, 1.4);

    match shape {
        ItemShape::Sword => sword(&mut img, color, dark, light),
        ItemShape::Potion => potion(&mut img, color, dark, light),
        ItemShape::Helmet => helmet(&mut img, color, dark, light),
        ItemShape::Armor | ItemShape::Boots => armor(&mut img, color, dark, light),
        ItemShape::Ring | ItemShape::Amulet => ring(&mut img, color, dark, light),
    }

    draw_hollow_rect_mut(&mut img, Rect::at(0, 0).of_size(SIZE, SIZE), Rgba([70, 70, 75, 180]));
    img
}

fn sword(img: &mut RgbaImage, color: Color, dark: Color, light: Color) {
    // Blade: diagonal strokes brightening toward the tip for a metallic sweep
    for x in 8..25 {
        let factor = 0.55 + (x - 8) as f32 / 34.0;
        let blade = color::adjust([230, 230, 240, 255], factor);
        draw_line_segment_mut(img, (x as f32, 4.0), ((x + 8) as f32, 12.0), Rgba(blade));
    }

    // Grip
    draw_filled_rect_mut(img, Rect::at(4, 12).of_size(5, 14), Rgba(dark));
    draw_filled_rect_mut(img, Rect::at(5, 13).of_size(3, 12), Rgba(color));
    draw_line_segment_mut(img, (6.0, 13.0), (6.0, 24.0), Rgba(light));

    // Crossguard
    draw_filled_rect_mut(img, Rect::at(2, 11).of_size(9, 4), Rgba([190, 160, 60, 255]));
    draw_line_segment_mut(img, (2.0, 12.0), (10.0, 12.0), Rgba([230, 200, 80, 255]));

    // Edge highlight
    draw_line_segment_mut(img, (10.0, 5.0), (31.0, 13.0), Rgba([255, 255, 255, 220]));
}

fn potion(img: &mut RgbaImage, color: Color, dark: Color, light: Color) {
    // Bulb, neck, base
    draw_filled_ellipse_mut(img, (16, 14), 6, 6, Rgba(dark));
    draw_filled_rect_mut(img, Rect::at(11, 14).of_size(11, 13), Rgba(color));
    draw_filled_ellipse_mut(img, (16, 26), 6, 2, Rgba(dark));

    // Liquid with a shine spot
    draw_filled_rect_mut(img, Rect::at(12, 16).of_size(9, 10), Rgba(light));
    draw_filled_ellipse_mut(img, (16, 18), 3, 2, Rgba([255, 255, 255, 180]));

    // Cork
    draw_filled_rect_mut(img, Rect::at(13, 6).of_size(7, 5), Rgba([130, 90, 60, 255]));
    draw_filled_rect_mut(img, Rect::at(14, 7).of_size(5, 3), Rgba([160, 120, 80, 255]));
}

fn helmet(img: &mut RgbaImage, color: Color, dark: Color, light: Color) {
    // Dome
    draw::top_half_disc(img, (16, 17), 8, 9, dark);
    draw::top_half_disc(img, (16, 17), 7, 8, color);

    // Visor slit
    draw_filled_rect_mut(img, Rect::at(10, 19).of_size(13, 5), Rgba([40, 40, 50, 255]));

    // Crown highlight
    draw::arc(img, (16.0, 14.5), 5.0, 4.5, 180.0, 360.0, 2, light);
}

fn armor(img: &mut RgbaImage, color: Color, dark: Color, light: Color) {
    draw_filled_ellipse_mut(img, (16, 18), 10, 10, Rgba(dark));
    draw_filled_ellipse_mut(img, (16, 18), 9, 9, Rgba(color));

    // Center seam, chest curve, rivets
    draw::thick_line(img, (16.0, 11.0), (16.0, 26.0), 2, light);
    draw::arc(img, (16.0, 18.0), 5.0, 5.0, 0.0, 180.0, 2, dark);
    for y in [13, 18, 23] {
        draw_filled_ellipse_mut(img, (16, y + 1), 2, 1, Rgba(light));
    }
}

fn ring(img: &mut RgbaImage, color: Color, dark: Color, light: Color) {
    // Band
    draw::ring(img, (16, 16), 8.0, 4.0, dark);
    draw::ring(img, (16, 16), 6.0, 3.0, color);

    // Gem with sparkle
    draw_filled_circle_mut(img, (16, 16), 3, Rgba(light));
    draw_filled_circle_mut(img, (14, 14), 1, Rgba([255, 255, 255, 255]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_is_declared_size() {
        let shapes = [
            ItemShape::Sword,
            ItemShape::Potion,
            ItemShape::Armor,
            ItemShape::Helmet,
            ItemShape::Boots,
            ItemShape::Ring,
            ItemShape::Amulet,
        ];
        for shape in shapes {
            let img = render([195, 195, 210, 255], shape);
            assert_eq!((img.width(), img.height()), (SIZE, SIZE), "{:?}", shape);
        }
    }

    #[test]
    fn test_frame_is_drawn_last() {
        let img = render([255, 105, 105, 255], ItemShape::Potion);
        assert_eq!(img.get_pixel(0, 0).0, [70, 70, 75, 180]);
        assert_eq!(img.get_pixel(31, 31).0, [70, 70, 75, 180]);
    }

    #[test]
    fn test_ring_center_holds_the_gem() {
        let img = render([255, 220, 55, 255], ItemShape::Ring);
        let gem = img.get_pixel(16, 16).0;
        // Lightened base color, fully opaque
        assert_eq!(gem[3], 255);
        assert!(gem[0] == 255 && gem[1] > 220);
    }
}
