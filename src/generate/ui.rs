//! UI chrome generator: buttons, panels, progress bars.
//!
//! Canvas size is caller-specified per element; recipes scale with it.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::color::{self, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hover,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiElement {
    Button(ButtonState),
    Panel,
    ProgressBarBg,
    ProgressBarFill,
}

pub fn render(element: UiElement, width: u32, height: u32, color: Color) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    match element {
        UiElement::Button(state) => button(&mut img, state),
        UiElement::Panel => panel(&mut img),
        UiElement::ProgressBarBg => progress_bg(&mut img),
        UiElement::ProgressBarFill => progress_fill(&mut img, color),
    }
    img
}

fn button(img: &mut RgbaImage, state: ButtonState) {
    let (w, h) = img.dimensions();
    let (base, range) = match state {
        ButtonState::Normal => (85u32, 40.0f32),
        ButtonState::Hover => (110, 50.0),
        ButtonState::Pressed => (60, 25.0),
    };

    // Vertical gradient, lit from the top (inverted when pressed)
    for y in 0..h {
        let progress = y as f32 / h as f32;
        let brightness = match state {
            ButtonState::Pressed => base + (range * progress) as u32,
            _ => base + (range * (1.0 - progress)) as u32,
        } as u8;
        let row = Rgba([brightness, brightness, brightness + 15, 255]);
        for x in 2..w - 2 {
            img.put_pixel(x, y, row);
        }
    }

    // Double border
    let bb = (base + 40) as u8;
    draw_hollow_rect_mut(
        img,
        Rect::at(0, 0).of_size(w, h),
        Rgba([bb + 20, bb + 20, bb + 40, 255]),
    );
    draw_hollow_rect_mut(
        img,
        Rect::at(1, 1).of_size(w - 2, h - 2),
        Rgba([bb + 50, bb + 50, bb + 70, 255]),
    );

    // Highlight along the top edge
    if state != ButtonState::Pressed {
        let alpha = if state == ButtonState::Hover { 120 } else { 80 };
        draw_filled_rect_mut(
            img,
            Rect::at(3, 3).of_size(w - 6, 2),
            Rgba([255, 255, 255, alpha]),
        );
    }
}

fn panel(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    draw_filled_rect_mut(img, Rect::at(0, 0).of_size(w, h), Rgba([45, 50, 65, 235]));

    // Heavy outer frame, thin inner frame
    for inset in 0..3i32 {
        draw_hollow_rect_mut(
            img,
            Rect::at(inset, inset).of_size(w - 2 * inset as u32, h - 2 * inset as u32),
            Rgba([110, 130, 160, 255]),
        );
    }
    draw_hollow_rect_mut(
        img,
        Rect::at(3, 3).of_size(w - 6, h - 6),
        Rgba([70, 85, 105, 255]),
    );

    // Inner shadow under the frame
    draw_filled_rect_mut(img, Rect::at(3, 4).of_size(w - 6, 2), Rgba([20, 25, 35, 100]));
}

fn progress_bg(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    draw_filled_rect_mut(img, Rect::at(0, 0).of_size(w, h), Rgba([35, 35, 45, 255]));
    for inset in 0..2i32 {
        draw_hollow_rect_mut(
            img,
            Rect::at(inset, inset).of_size(w - 2 * inset as u32, h - 2 * inset as u32),
            Rgba([20, 20, 30, 255]),
        );
    }
}

fn progress_fill(img: &mut RgbaImage, color: Color) {
    let (w, h) = img.dimensions();

    // Vertical gradient over the fill color
    for y in 0..h {
        let factor = 0.65 + (y as f32 / h as f32) * 0.7;
        let row = Rgba(color::adjust(color, factor));
        for x in 0..w {
            img.put_pixel(x, y, row);
        }
    }

    // Shine band across the top third
    draw_filled_rect_mut(
        img,
        Rect::at(2, 2).of_size(w - 4, h / 3 - 1),
        Rgba([255, 255, 255, 70]),
    );
    draw_hollow_rect_mut(
        img,
        Rect::at(0, 0).of_size(w, h),
        Rgba(color::with_alpha(color, 100)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_honors_caller_dimensions() {
        let img = render(UiElement::Panel, 320, 240, [45, 50, 65, 235]);
        assert_eq!((img.width(), img.height()), (320, 240));
        let img = render(UiElement::Button(ButtonState::Normal), 120, 40, [85, 85, 100, 255]);
        assert_eq!((img.width(), img.height()), (120, 40));
    }

    #[test]
    fn test_button_gradient_is_lit_from_the_top() {
        let img = render(UiElement::Button(ButtonState::Normal), 120, 40, [85, 85, 100, 255]);
        let top = img.get_pixel(60, 5).0;
        let bottom = img.get_pixel(60, 38).0;
        assert!(top[0] > bottom[0], "top {:?} should be brighter than bottom {:?}", top, bottom);
    }

    #[test]
    fn test_pressed_button_inverts_the_gradient() {
        let img = render(UiElement::Button(ButtonState::Pressed), 120, 40, [60, 60, 75, 255]);
        let top = img.get_pixel(60, 5).0;
        let bottom = img.get_pixel(60, 38).0;
        assert!(bottom[0] > top[0]);
    }

    #[test]
    fn test_progress_fill_keeps_the_bar_color() {
        let img = render(UiElement::ProgressBarFill, 200, 20, [105, 255, 105, 255]);
        let mid = img.get_pixel(100, 12).0;
        assert!(mid[1] > mid[0] && mid[1] > mid[2], "hp fill should stay green, got {:?}", mid);
    }

    #[test]
    fn test_panel_is_semi_transparent() {
        let img = render(UiElement::Panel, 320, 240, [45, 50, 65, 235]);
        assert_eq!(img.get_pixel(160, 120).0[3], 235);
    }
}
