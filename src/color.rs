//! Color helpers shared by all generators.

/// RGBA color, channel intensities 0-255.
pub type Color = [u8; 4];

/// Scale the RGB channels of `color` by `factor`, clamping each channel to
/// the valid range. Alpha is reset to opaque; use [`with_alpha`] to override.
pub fn adjust(color: Color, factor: f32) -> Color {
    let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    [scale(color[0]), scale(color[1]), scale(color[2]), 255]
}

/// Same RGB, different alpha.
pub fn with_alpha(color: Color, alpha: u8) -> Color {
    [color[0], color[1], color[2], alpha]
}
