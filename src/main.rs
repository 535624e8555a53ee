//! Assetgen - placeholder sprite generator.
//!
//! Run with no arguments to generate the full catalog:
//!   cargo run
//! Or restrict the run to one asset family:
//!   cargo run -- tiles

use assetgen::catalog::{self, Family};
use std::path::Path;

/// Assets land next to the working directory, mirroring how the client
/// serves them.
const OUTPUT_ROOT: &str = "assets";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let root = Path::new(OUTPUT_ROOT);

    match args.get(1).map(String::as_str) {
        None => {
            println!("=== Placeholder Asset Generator ===\n");
            catalog::run(root);
        }
        Some("characters") => {
            println!("=== Character Sprites ===\n");
            catalog::run_family(root, Family::Characters);
        }
        Some("skills") => {
            println!("=== Skill Icons ===\n");
            catalog::run_family(root, Family::Skills);
        }
        Some("effects") => {
            println!("=== Effect Sprites ===\n");
            catalog::run_family(root, Family::Effects);
        }
        Some("ui") => {
            println!("=== UI Elements ===\n");
            catalog::run_family(root, Family::Ui);
        }
        Some("items") => {
            println!("=== Item Icons ===\n");
            catalog::run_family(root, Family::Items);
        }
        Some("tiles") => {
            println!("=== Environment Tiles ===\n");
            catalog::run_family(root, Family::Tiles);
        }
        Some("--help" | "-h" | "help") => print_help(),
        Some(other) => {
            eprintln!("Error: Unknown command '{}'\n", other);
            print_help();
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!(
        r#"Assetgen - Generate placeholder game assets

USAGE:
    cargo run [COMMAND]

With no command, the full catalog is generated under assets/ and the
manifest (assets-manifest.json) is rewritten.

COMMANDS:
    characters  Character sprites       -> assets/characters/
    skills      Skill icons             -> assets/skills/
    effects     Effect sprites          -> assets/skills/
    ui          Buttons, panels, bars   -> assets/ui/
    items       Item icons              -> assets/items/
    tiles       Environment tiles       -> assets/environment/
    help        Show this help message

EXAMPLES:
    cargo run
    cargo run -- tiles
"#
    );
}
