//! Offline texture generation for SOLAR SORTIE
//!
//! Paints the small tiled hull/UI textures procedurally and writes them as
//! RGBA PNGs. Everything is deterministic: grain uses fixed seeds, so
//! regenerating never dirties the asset directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod patterns;
mod texture;

use texture::{write_png, TextureBuffer};

/// Texture table: (output file name, painter)
const TEXTURES: &[(&str, fn() -> TextureBuffer)] = &[
    ("tex_pattern_metal.png", patterns::metal_panel),
    ("tex_pattern_checker.png", patterns::checker_plate),
    ("tex_pattern_grid.png", patterns::hull_grid),
    ("tex_pattern_noise.png", patterns::static_noise),
    ("tex_thruster_gradient.png", patterns::thruster_glow),
];

#[derive(Parser)]
#[command(name = "gen-textures")]
#[command(about = "Generate SOLAR SORTIE tiled textures")]
struct Cli {
    /// Output directory for generated textures
    #[arg(short, long, default_value = "assets/textures")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    println!("=== SOLAR SORTIE Texture Generation ===");
    println!("  Generating {} textures", TEXTURES.len());
    println!("  Output -> {}", cli.output.display());

    for (filename, painter) in TEXTURES {
        let tex = painter();
        let path = cli.output.join(filename);
        write_png(&tex, &path).with_context(|| format!("failed to write {}", path.display()))?;
        println!("    -> {} ({}x{})", filename, tex.width, tex.height);
    }

    println!("\nDone! Generated {} textures", TEXTURES.len());
    Ok(())
}
