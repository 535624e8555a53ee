//! System font lookup for skill-icon symbols.
//!
//! A missing font is never fatal: callers draw a builtin vector glyph
//! instead of text when this returns `None`.

use ab_glyph::FontVec;
use std::fs;

/// Candidate symbol fonts, in preference order.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Load the first candidate font that exists and parses.
pub fn load_symbol_font() -> Option<FontVec> {
    for path in FONT_PATHS {
        if let Ok(data) = fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(data) {
                return Some(font);
            }
        }
    }
    None
}
