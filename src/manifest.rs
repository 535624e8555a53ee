//! Asset manifest written alongside the generated PNGs.
//!
//! Consumers use `assets-manifest.json` to check that every expected asset
//! exists with the right dimensions before loading. Built from catalog
//! metadata only; generated files are never re-read.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::catalog::CATALOG;

pub const MANIFEST_FILE: &str = "assets-manifest.json";
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub assets: Vec<AssetRecord>,
}

pub fn build() -> Manifest {
    let assets = CATALOG
        .iter()
        .map(|spec| {
            let (width, height) = spec.dimensions();
            AssetRecord {
                name: spec.filename.trim_end_matches(".png").to_string(),
                path: spec.relative_path(),
                width,
                height,
                category: spec.category_dir().to_string(),
            }
        })
        .collect();
    Manifest { version: MANIFEST_VERSION, assets }
}

pub fn write(root: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&build()).map_err(io::Error::other)?;
    fs::write(root.join(MANIFEST_FILE), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_catalog_entry() {
        let manifest = build();
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.assets.len(), CATALOG.len());
    }

    #[test]
    fn test_roundtrips_through_json() {
        let json = serde_json::to_string(&build()).unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.assets.len(), CATALOG.len());

        let player = parsed.assets.iter().find(|a| a.name == "player-red").unwrap();
        assert_eq!(player.path, "characters/player-red.png");
        assert_eq!((player.width, player.height), (64, 64));
        assert_eq!(player.category, "characters");
    }

    #[test]
    fn test_effects_are_filed_under_skills() {
        let manifest = build();
        let effect = manifest.assets.iter().find(|a| a.name == "fire-effect").unwrap();
        assert_eq!(effect.category, "skills");
        assert_eq!(effect.path, "skills/fire-effect.png");
    }
}
