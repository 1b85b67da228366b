//! Vendor-API audio fetching for SOLAR SORTIE
//!
//! Two thin batch jobs against the ElevenLabs API, plus a voice-library
//! lister:
//!
//! - `barks` reads the scripted line list and synthesizes one OGG bark per
//!   line, cast by speaker callsign.
//! - `sfx` fetches prompt-described effects and the theme loop from the
//!   sound-generation endpoint (an alternative source to the procedural
//!   catalog; the two never interact).
//!
//! Per-item failures are reported and counted; the run keeps going and
//! exits non-zero at the end if anything failed. Requires the
//! `ELEVEN_LABS_KEY` environment variable.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod api;
mod lines;
mod prompts;

use api::ElevenLabs;
use prompts::PromptSpec;

#[derive(Parser)]
#[command(name = "gen-vo-barks")]
#[command(about = "Fetch SOLAR SORTIE voice-over barks and API-generated audio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize VO barks from the scripted line list
    Barks {
        /// Scripted line list (id, speaker, text triples)
        #[arg(short, long, default_value = "data/vo_lines.json")]
        lines: PathBuf,

        /// Output directory for generated barks
        #[arg(short, long, default_value = "assets/audio/vo")]
        output: PathBuf,

        /// Regenerate barks that already exist on disk
        #[arg(long)]
        force: bool,
    },
    /// Fetch prompt-described SFX and music from the sound-generation API
    Sfx {
        /// Base output directory (sfx/ and music/ go underneath)
        #[arg(short, long, default_value = "assets/audio")]
        output: PathBuf,
    },
    /// List available voices (useful for casting speakers)
    ListVoices,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let api = ElevenLabs::from_env()?;

    match cli.command {
        Commands::Barks {
            lines,
            output,
            force,
        } => generate_barks(&api, &lines, &output, force).await,
        Commands::Sfx { output } => generate_api_audio(&api, &output).await,
        Commands::ListVoices => list_voices(&api).await,
    }
}

async fn generate_barks(
    api: &ElevenLabs,
    lines_path: &Path,
    output_dir: &Path,
    force: bool,
) -> Result<()> {
    let lines = lines::load_lines(lines_path)?;
    fs::create_dir_all(output_dir)?;

    println!("=== SOLAR SORTIE VO Bark Generation ===");
    println!("  Generating {} barks", lines.len());
    println!("  Output -> {}", output_dir.display());

    let mut generated = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for line in &lines {
        let path = output_dir.join(format!("{}.ogg", line.id));

        let Some(voice_id) = lines::voice_for(&line.speaker) else {
            println!("    !! {}: no voice cast for speaker {}", line.id, line.speaker);
            failed += 1;
            continue;
        };

        if path.exists() && !force {
            println!("    -- {} (already exists)", line.id);
            skipped += 1;
            continue;
        }

        match api.text_to_speech(voice_id, &line.text).await {
            Ok(audio) => match fs::write(&path, &audio) {
                Ok(()) => {
                    println!(
                        "    -> {}.ogg ({} bytes) - {}: \"{}\"",
                        line.id,
                        audio.len(),
                        line.speaker,
                        line.text
                    );
                    generated += 1;
                }
                Err(e) => {
                    println!("    !! {}: write failed: {}", line.id, e);
                    failed += 1;
                }
            },
            Err(e) => {
                println!("    !! {}: {}", line.id, e);
                failed += 1;
            }
        }
    }

    println!(
        "\nDone: {} generated, {} skipped, {} failed",
        generated, skipped, failed
    );
    if failed > 0 {
        bail!("{} bark(s) failed", failed);
    }
    Ok(())
}

async fn generate_api_audio(api: &ElevenLabs, output_dir: &Path) -> Result<()> {
    println!("=== SOLAR SORTIE API Audio Generation ===");

    let mut failed = 0usize;
    failed += fetch_prompt_set(api, prompts::API_SFX, &output_dir.join("sfx")).await?;
    failed += fetch_prompt_set(api, prompts::API_MUSIC, &output_dir.join("music")).await?;

    if failed > 0 {
        bail!("{} request(s) failed", failed);
    }
    println!("\nDone!");
    Ok(())
}

/// Fetch one prompt table into a directory, returning the failure count
async fn fetch_prompt_set(
    api: &ElevenLabs,
    specs: &[PromptSpec],
    output_dir: &Path,
) -> Result<usize> {
    fs::create_dir_all(output_dir)?;
    println!("  Fetching {} files", specs.len());
    println!("  Output -> {}", output_dir.display());

    let mut failed = 0usize;
    for spec in specs {
        match api.sound_generation(spec.prompt, spec.duration_secs).await {
            Ok(audio) => {
                let path = output_dir.join(spec.file);
                match fs::write(&path, &audio) {
                    Ok(()) => println!("    -> {} ({} bytes)", spec.file, audio.len()),
                    Err(e) => {
                        println!("    !! {}: write failed: {}", spec.file, e);
                        failed += 1;
                    }
                }
            }
            Err(e) => {
                println!("    !! {}: {}", spec.file, e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}

async fn list_voices(api: &ElevenLabs) -> Result<()> {
    let voices = api.voices().await?;
    println!("Found {} voices:\n", voices.len());

    for voice in voices {
        println!("  {}", voice.name);
        println!("    ID: {}", voice.voice_id);
        if !voice.labels.is_empty() {
            let mut labels: Vec<_> = voice
                .labels
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            labels.sort();
            println!("    Labels: {}", labels.join(", "));
        }
        println!();
    }

    Ok(())
}
