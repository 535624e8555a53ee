//! Assetgen - placeholder sprite generator for a 2D game client.
//!
//! Procedurally renders character sprites, skill icons, effect sprites, UI
//! chrome, item icons, and environment tiles as PNGs under a fixed
//! directory layout, plus a JSON manifest describing the output.

pub mod catalog;
pub mod color;
pub mod font;
pub mod generate;
pub mod manifest;

// Re-export commonly used types for convenience
pub use catalog::{AssetKind, AssetSpec, CATALOG, Family};
pub use color::Color;
