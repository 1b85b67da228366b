//! Scripted VO line list and speaker voice casting

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One scripted bark: stable id (the output file stem), speaker callsign,
/// and the spoken text
#[derive(Debug, Clone, Deserialize)]
pub struct VoLine {
    pub id: String,
    pub speaker: String,
    pub text: String,
}

/// Speaker callsign -> ElevenLabs voice id
///
/// All entries are premade library voices, cast for the radio chatter:
/// young protagonist, cocky wingman, gruff commander, sarcastic mechanic,
/// calm ops officer.
pub const VOICE_MAP: &[(&str, &str)] = &[
    ("RIDER", "pNInz6obpgDQGcFmaJgB"),
    ("RAZOR", "VR6AewLTigWG4xSOukaG"),
    ("STONE", "ErXwobaYiN019PkySvjV"),
    ("SPARKS", "MF3mGyEYCl7XYWbV9V6O"),
    ("VERA", "21m00Tcm4TlvDq8ikWAM"),
];

/// Look up the voice id cast for a speaker
pub fn voice_for(speaker: &str) -> Option<&'static str> {
    VOICE_MAP
        .iter()
        .find(|(name, _)| *name == speaker)
        .map(|(_, id)| *id)
}

/// Load the scripted line list from a JSON file
pub fn load_lines(path: &Path) -> Result<Vec<VoLine>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("VO line list not found at {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_for_known_speakers() {
        for (speaker, _) in VOICE_MAP {
            assert!(voice_for(speaker).is_some());
        }
        assert!(voice_for("NOBODY").is_none());
    }

    #[test]
    fn test_line_list_parses() {
        let lines: Vec<VoLine> = serde_json::from_str(
            r#"[{"id": "vo_scramble", "speaker": "STONE", "text": "All wings, scramble!"}]"#,
        )
        .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "vo_scramble");
        assert_eq!(voice_for(&lines[0].speaker), Some("ErXwobaYiN019PkySvjV"));
    }
}
