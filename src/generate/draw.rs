//! Shared drawing primitives the generators need beyond `imageproc`.
//!
//! `imageproc` outlines are always one pixel wide and it has no arcs or
//! pieslices, so the stroked variants here are plain bounds-checked pixel
//! loops over distance tests.

use crate::color::Color;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

/// Set a single pixel, ignoring out-of-bounds coordinates.
pub fn put_pixel_safe(img: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgba(color));
    }
}

/// Hollow circle of the given outer `radius`, stroked `width` pixels inward.
pub fn ring(img: &mut RgbaImage, center: (i32, i32), radius: f32, width: f32, color: Color) {
    let (cx, cy) = center;
    let reach = radius.ceil() as i32 + 1;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist <= radius && dist > radius - width {
                put_pixel_safe(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Line segment with perpendicular thickness. Horizontal-ish strokes stack
/// row offsets, vertical-ish strokes stack column offsets.
pub fn thick_line(
    img: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Color,
) {
    let horizontal = (end.0 - start.0).abs() >= (end.1 - start.1).abs();
    for i in 0..width {
        let off = i as f32;
        let (s, e) = if horizontal {
            ((start.0, start.1 + off), (end.0, end.1 + off))
        } else {
            ((start.0 + off, start.1), (end.0 + off, end.1))
        };
        draw_line_segment_mut(img, s, e, Rgba(color));
    }
}

/// Elliptical arc from `start_deg` to `end_deg` (0° at +x, angles growing
/// toward +y, i.e. clockwise on screen), stroked `width` pixels inward.
pub fn arc(
    img: &mut RgbaImage,
    center: (f32, f32),
    rx: f32,
    ry: f32,
    start_deg: f32,
    end_deg: f32,
    width: u32,
    color: Color,
) {
    let steps = (((end_deg - start_deg).abs() * rx.max(ry)) / 16.0).ceil().max(16.0) as i32;
    for w in 0..width {
        let (arx, ary) = (rx - w as f32, ry - w as f32);
        for i in 0..=steps {
            let t = start_deg + (end_deg - start_deg) * i as f32 / steps as f32;
            let rad = t.to_radians();
            let x = (center.0 + arx * rad.cos()).round() as i32;
            let y = (center.1 + ary * rad.sin()).round() as i32;
            put_pixel_safe(img, x, y, color);
        }
    }
}

/// Filled upper half of an ellipse (flat edge along the center row).
pub fn top_half_disc(img: &mut RgbaImage, center: (i32, i32), rx: i32, ry: i32, color: Color) {
    let (cx, cy) = center;
    for dy in -ry..=0 {
        let frac = 1.0 - (dy * dy) as f32 / (ry * ry) as f32;
        let half_width = (rx as f32 * frac.max(0.0).sqrt()).round() as i32;
        for dx in -half_width..=half_width {
            put_pixel_safe(img, cx + dx, cy + dy, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_pixel_safe_ignores_out_of_bounds() {
        let mut img = RgbaImage::new(4, 4);
        put_pixel_safe(&mut img, -1, 0, [255, 0, 0, 255]);
        put_pixel_safe(&mut img, 0, 4, [255, 0, 0, 255]);
        put_pixel_safe(&mut img, 2, 2, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_ring_leaves_center_untouched() {
        let mut img = RgbaImage::new(32, 32);
        ring(&mut img, (16, 16), 10.0, 2.0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(16, 16).0, [0, 0, 0, 0]);
        // a point on the stroke
        assert_eq!(img.get_pixel(26, 16).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_top_half_disc_stays_above_center_row() {
        let mut img = RgbaImage::new(32, 32);
        top_half_disc(&mut img, (16, 16), 8, 8, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(16, 10).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(16, 17).0, [0, 0, 0, 0]);
    }
}
