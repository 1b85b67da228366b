//! Offline audio generation for SOLAR SORTIE
//!
//! Renders the fixed catalog of 8-bit DOS-style sound effects and the
//! music loop to WAV files. Each clip is built to completion in memory
//! before anything is written, so a bad recipe can never leave a
//! half-written file behind.
//!
//! Output naming: each catalog entry is saved as `{id}.wav`.

use anyhow::{Context, Result};
use chipwave::catalog::{TrackDef, MUSIC, SFX};
use chipwave::write_wav;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gen-audio")]
#[command(about = "Generate SOLAR SORTIE sound effects and music")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sound effects
    Sfx {
        /// Output directory for generated audio
        #[arg(short, long, default_value = "assets/audio/sfx")]
        output: PathBuf,
    },
    /// Generate the music loop
    Music {
        /// Output directory for generated audio
        #[arg(short, long, default_value = "assets/audio/music")]
        output: PathBuf,
    },
    /// Generate everything
    All {
        /// Base output directory (sfx/ and music/ go underneath)
        #[arg(short, long, default_value = "assets/audio")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sfx { output } => {
            println!("=== SOLAR SORTIE SFX Generation ===");
            generate_catalog(SFX, &output)?;
        }
        Commands::Music { output } => {
            println!("=== SOLAR SORTIE Music Generation ===");
            generate_catalog(MUSIC, &output)?;
        }
        Commands::All { output } => {
            println!("=== SOLAR SORTIE Audio Generation ===\n");
            println!("--- Sound effects ---");
            generate_catalog(SFX, &output.join("sfx"))?;
            println!("\n--- Music ---");
            generate_catalog(MUSIC, &output.join("music"))?;
        }
    }

    println!("\nDone!");
    Ok(())
}

/// Render every entry of a catalog table into `output_dir`
fn generate_catalog(catalog: &[TrackDef], output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    println!("  Generating {} clips", catalog.len());
    println!("  Output -> {}", output_dir.display());

    for def in catalog {
        let clip = def
            .build()
            .with_context(|| format!("recipe {} failed", def.id))?;
        let path = output_dir.join(format!("{}.wav", def.id));

        write_wav(&clip, &path).with_context(|| format!("failed to write {}", path.display()))?;

        println!(
            "    -> {}.wav ({} samples, {:.2}s) - {}",
            def.id,
            clip.len(),
            clip.duration_secs(),
            def.name
        );
    }

    Ok(())
}
