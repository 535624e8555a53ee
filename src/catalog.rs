//! Asset catalog and batch driver.
//!
//! The catalog is the full literal list of placeholder assets the game
//! client expects: one generator call per entry, fixed order, fixed
//! filenames. `run` renders everything, writes one PNG per entry under the
//! output root, and finishes with the manifest.

use ab_glyph::FontVec;
use image::RgbaImage;
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::font;
use crate::generate::effects::EffectStyle;
use crate::generate::items::ItemShape;
use crate::generate::tiles::TileKind;
use crate::generate::ui::{ButtonState, UiElement};
use crate::generate::{characters, effects, items, skills, tiles, ui};
use crate::manifest;

/// Output subdirectories, one per asset category.
pub const OUTPUT_DIRS: [&str; 5] = ["characters", "skills", "ui", "items", "environment"];

/// Generator parameters for one asset.
#[derive(Clone, Copy, Debug)]
pub enum AssetKind {
    Character { color: Color },
    SkillIcon { color: Color, symbol: char },
    Effect { color: Color, style: EffectStyle },
    Ui { element: UiElement, width: u32, height: u32, color: Color },
    Item { color: Color, shape: ItemShape },
    Tile { color: Color, kind: TileKind },
}

/// One catalog entry: output filename plus generator parameters.
#[derive(Clone, Copy, Debug)]
pub struct AssetSpec {
    pub filename: &'static str,
    pub kind: AssetKind,
}

/// Asset family, the unit of the binary's subcommand filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Characters,
    Skills,
    Effects,
    Ui,
    Items,
    Tiles,
}

impl AssetSpec {
    const fn new(filename: &'static str, kind: AssetKind) -> Self {
        Self { filename, kind }
    }

    /// Subdirectory the asset is written into. Effect sprites share the
    /// skills directory.
    pub fn category_dir(&self) -> &'static str {
        match self.kind {
            AssetKind::Character { .. } => "characters",
            AssetKind::SkillIcon { .. } | AssetKind::Effect { .. } => "skills",
            AssetKind::Ui { .. } => "ui",
            AssetKind::Item { .. } => "items",
            AssetKind::Tile { .. } => "environment",
        }
    }

    pub fn family(&self) -> Family {
        match self.kind {
            AssetKind::Character { .. } => Family::Characters,
            AssetKind::SkillIcon { .. } => Family::Skills,
            AssetKind::Effect { .. } => Family::Effects,
            AssetKind::Ui { .. } => Family::Ui,
            AssetKind::Item { .. } => Family::Items,
            AssetKind::Tile { .. } => Family::Tiles,
        }
    }

    /// Canvas dimensions for this asset.
    pub fn dimensions(&self) -> (u32, u32) {
        match self.kind {
            AssetKind::Character { .. } => (characters::SIZE, characters::SIZE),
            AssetKind::SkillIcon { .. } => (skills::SIZE, skills::SIZE),
            AssetKind::Effect { .. } => (effects::SIZE, effects::SIZE),
            AssetKind::Ui { width, height, .. } => (width, height),
            AssetKind::Item { .. } => (items::SIZE, items::SIZE),
            AssetKind::Tile { .. } => (tiles::SIZE, tiles::SIZE),
        }
    }

    /// Path of the output file relative to the output root.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.category_dir(), self.filename)
    }
}

/// The full asset catalog.
pub const CATALOG: &[AssetSpec] = &[
    // Character sprites
    AssetSpec::new("player-red.png", AssetKind::Character { color: [220, 85, 85, 255] }),
    AssetSpec::new("player-blue.png", AssetKind::Character { color: [85, 125, 220, 255] }),
    AssetSpec::new("player-green.png", AssetKind::Character { color: [85, 200, 105, 255] }),
    AssetSpec::new("player-yellow.png", AssetKind::Character { color: [220, 200, 85, 255] }),
    AssetSpec::new("npc-merchant.png", AssetKind::Character { color: [185, 145, 105, 255] }),
    AssetSpec::new("enemy-skeleton.png", AssetKind::Character { color: [235, 235, 245, 255] }),
    AssetSpec::new("enemy-goblin.png", AssetKind::Character { color: [125, 165, 95, 255] }),
    // Skill icons
    AssetSpec::new("fireball.png", AssetKind::SkillIcon { color: [255, 105, 25, 255], symbol: 'F' }),
    AssetSpec::new("heal.png", AssetKind::SkillIcon { color: [55, 255, 125, 255], symbol: '+' }),
    AssetSpec::new("shield.png", AssetKind::SkillIcon { color: [105, 155, 255, 255], symbol: 'S' }),
    AssetSpec::new("dash.png", AssetKind::SkillIcon { color: [255, 235, 55, 255], symbol: 'D' }),
    AssetSpec::new("ice-spike.png", AssetKind::SkillIcon { color: [155, 225, 255, 255], symbol: '*' }),
    AssetSpec::new("poison.png", AssetKind::SkillIcon { color: [155, 255, 105, 255], symbol: 'X' }),
    // Effect sprites (written into skills/)
    AssetSpec::new("fire-effect.png", AssetKind::Effect { color: [255, 155, 35, 255], style: EffectStyle::Radial }),
    AssetSpec::new("heal-effect.png", AssetKind::Effect { color: [105, 255, 155, 255], style: EffectStyle::Spark }),
    AssetSpec::new("hit-effect.png", AssetKind::Effect { color: [255, 85, 85, 255], style: EffectStyle::Radial }),
    AssetSpec::new("level-up.png", AssetKind::Effect { color: [255, 235, 105, 255], style: EffectStyle::Spark }),
    // UI chrome
    AssetSpec::new("panel-background.png", AssetKind::Ui { element: UiElement::Panel, width: 320, height: 240, color: [45, 50, 65, 235] }),
    AssetSpec::new("button-normal.png", AssetKind::Ui { element: UiElement::Button(ButtonState::Normal), width: 120, height: 40, color: [85, 85, 100, 255] }),
    AssetSpec::new("button-hover.png", AssetKind::Ui { element: UiElement::Button(ButtonState::Hover), width: 120, height: 40, color: [110, 110, 130, 255] }),
    AssetSpec::new("button-pressed.png", AssetKind::Ui { element: UiElement::Button(ButtonState::Pressed), width: 120, height: 40, color: [60, 60, 75, 255] }),
    AssetSpec::new("progress-bar-bg.png", AssetKind::Ui { element: UiElement::ProgressBarBg, width: 200, height: 20, color: [35, 35, 45, 255] }),
    AssetSpec::new("progress-bar-fill-hp.png", AssetKind::Ui { element: UiElement::ProgressBarFill, width: 200, height: 20, color: [105, 255, 105, 255] }),
    AssetSpec::new("progress-bar-fill-mana.png", AssetKind::Ui { element: UiElement::ProgressBarFill, width: 200, height: 20, color: [105, 150, 255, 255] }),
    AssetSpec::new("progress-bar-fill-xp.png", AssetKind::Ui { element: UiElement::ProgressBarFill, width: 200, height: 20, color: [255, 225, 105, 255] }),
    // Item icons
    AssetSpec::new("sword.png", AssetKind::Item { color: [195, 195, 210, 255], shape: ItemShape::Sword }),
    AssetSpec::new("potion-health.png", AssetKind::Item { color: [255, 105, 105, 255], shape: ItemShape::Potion }),
    AssetSpec::new("potion-mana.png", AssetKind::Item { color: [105, 155, 255, 255], shape: ItemShape::Potion }),
    AssetSpec::new("armor.png", AssetKind::Item { color: [165, 165, 175, 255], shape: ItemShape::Armor }),
    AssetSpec::new("helmet.png", AssetKind::Item { color: [185, 185, 205, 255], shape: ItemShape::Helmet }),
    AssetSpec::new("boots.png", AssetKind::Item { color: [125, 95, 75, 255], shape: ItemShape::Boots }),
    AssetSpec::new("ring.png", AssetKind::Item { color: [255, 220, 55, 255], shape: ItemShape::Ring }),
    AssetSpec::new("amulet.png", AssetKind::Item { color: [205, 105, 255, 255], shape: ItemShape::Amulet }),
    // Environment tiles
    AssetSpec::new("grass.png", AssetKind::Tile { color: [90, 175, 90, 255], kind: TileKind::Grass }),
    AssetSpec::new("stone.png", AssetKind::Tile { color: [125, 125, 130, 255], kind: TileKind::Stone }),
    AssetSpec::new("water.png", AssetKind::Tile { color: [85, 135, 215, 255], kind: TileKind::Water }),
    AssetSpec::new("dirt.png", AssetKind::Tile { color: [145, 105, 75, 255], kind: TileKind::Dirt }),
    AssetSpec::new("sand.png", AssetKind::Tile { color: [225, 205, 155, 255], kind: TileKind::Sand }),
    AssetSpec::new("snow.png", AssetKind::Tile { color: [242, 247, 255, 255], kind: TileKind::Snow }),
];

/// Render one catalog entry to a finished canvas.
pub fn render(spec: &AssetSpec, font: Option<&FontVec>) -> RgbaImage {
    match &spec.kind {
        AssetKind::Character { color } => characters::render(*color),
        AssetKind::SkillIcon { color, symbol } => skills::render(*color, *symbol, font),
        AssetKind::Effect { color, style } => effects::render(*color, *style),
        AssetKind::Ui { element, width, height, color } => {
            ui::render(*element, *width, *height, *color)
        }
        AssetKind::Item { color, shape } => items::render(*color, *shape),
        AssetKind::Tile { color, kind } => tiles::render(spec.filename, *color, *kind),
    }
}

/// Generate the full catalog under `root`, then write the manifest.
pub fn run(root: &Path) {
    let specs: Vec<&AssetSpec> = CATALOG.iter().collect();
    let count = generate_entries(root, &specs);

    manifest::write(root)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write manifest: {}\n", e));
    println!("  Created: {}", manifest::MANIFEST_FILE);

    println!("\nGenerated {} assets under {}/.", count, root.display());
}

/// Generate only the entries of one asset family. Leaves the manifest alone.
pub fn run_family(root: &Path, family: Family) {
    let specs: Vec<&AssetSpec> = CATALOG.iter().filter(|s| s.family() == family).collect();
    let count = generate_entries(root, &specs);
    println!("\nGenerated {} assets under {}/.", count, root.display());
}

fn generate_entries(root: &Path, specs: &[&AssetSpec]) -> usize {
    create_output_dirs(root);

    let font = font::load_symbol_font();
    if font.is_none() && specs.iter().any(|s| matches!(s.kind, AssetKind::SkillIcon { .. })) {
        println!("Note: no system font found, skill symbols use the builtin glyph");
    }

    println!("Generating {} assets...", specs.len());
    for spec in specs {
        let img = render(spec, font.as_ref());
        save(root, spec, &img);
    }
    specs.len()
}

fn create_output_dirs(root: &Path) {
    for dir in OUTPUT_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path).unwrap_or_else(|e| {
            panic!("\n\nERROR: Could not create directory '{}': {}\n", path.display(), e)
        });
    }
}

fn save(root: &Path, spec: &AssetSpec, img: &RgbaImage) {
    let rel = spec.relative_path();
    let path = root.join(&rel);
    img.save(&path)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write '{}': {}\n", path.display(), e));
    println!("  Created: {}", rel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("assetgen-test-{}", name));
        if root.exists() {
            fs::remove_dir_all(&root).unwrap();
        }
        root
    }

    #[test]
    fn test_catalog_family_counts() {
        let count = |f: Family| CATALOG.iter().filter(|s| s.family() == f).count();
        assert_eq!(count(Family::Characters), 7);
        assert_eq!(count(Family::Skills), 6);
        assert_eq!(count(Family::Effects), 4);
        assert_eq!(count(Family::Ui), 8);
        assert_eq!(count(Family::Items), 8);
        assert_eq!(count(Family::Tiles), 6);
        assert_eq!(CATALOG.len(), 39);
    }

    #[test]
    fn test_render_matches_declared_dimensions() {
        for spec in CATALOG {
            let img = render(spec, None);
            assert_eq!((img.width(), img.height()), spec.dimensions(), "{}", spec.filename);
        }
    }

    #[test]
    fn test_filenames_are_unique_within_each_directory() {
        let mut paths: Vec<String> = CATALOG.iter().map(|s| s.relative_path()).collect();
        paths.sort();
        let before = paths.len();
        paths.dedup();
        assert_eq!(paths.len(), before);
    }

    #[test]
    fn test_run_writes_every_catalog_entry() {
        let root = temp_root("full-run");
        run(&root);
        for spec in CATALOG {
            let path = root.join(spec.relative_path());
            let img = image::open(&path)
                .unwrap_or_else(|e| panic!("{} unreadable: {}", path.display(), e))
                .to_rgba8();
            assert_eq!((img.width(), img.height()), spec.dimensions(), "{}", spec.filename);
        }
        assert!(root.join(manifest::MANIFEST_FILE).exists());
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_run_twice_is_byte_identical() {
        let root = temp_root("idempotent");
        run(&root);
        let first: Vec<Vec<u8>> = CATALOG
            .iter()
            .map(|s| fs::read(root.join(s.relative_path())).unwrap())
            .collect();
        run(&root);
        for (spec, before) in CATALOG.iter().zip(&first) {
            let after = fs::read(root.join(spec.relative_path())).unwrap();
            assert_eq!(&after, before, "{} changed between runs", spec.filename);
        }
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_run_family_only_touches_that_family() {
        let root = temp_root("family-run");
        run_family(&root, Family::Tiles);
        for spec in CATALOG {
            let exists = root.join(spec.relative_path()).exists();
            assert_eq!(exists, spec.family() == Family::Tiles, "{}", spec.filename);
        }
        assert!(!root.join(manifest::MANIFEST_FILE).exists());
        fs::remove_dir_all(&root).unwrap();
    }
}
