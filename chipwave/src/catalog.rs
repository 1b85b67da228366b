//! Fixed catalog of SOLAR SORTIE effect and music recipes
//!
//! Each entry is a pure builder function: the same hard-coded parameter
//! table always produces bit-identical PCM. The [`SFX`] and [`MUSIC`]
//! tables are the single source of truth for the gen-audio tool.

use crate::clip::Clip;
use crate::tone::Waveform::{Sine, Square};
use crate::SynthError;

type BuildFn = fn() -> Result<Clip, SynthError>;

/// Catalog entry: output id (also the file stem), display name, builder
pub struct TrackDef {
    pub id: &'static str,
    pub name: &'static str,
    builder: BuildFn,
}

impl TrackDef {
    /// Build this entry's clip from scratch
    pub fn build(&self) -> Result<Clip, SynthError> {
        (self.builder)()
    }
}

/// All sound effects
pub const SFX: &[TrackDef] = &[
    TrackDef {
        id: "player_laser",
        name: "Player Laser",
        builder: player_laser,
    },
    TrackDef {
        id: "enemy_laser",
        name: "Enemy Laser",
        builder: enemy_laser,
    },
    TrackDef {
        id: "explosion_small",
        name: "Small Explosion",
        builder: explosion_small,
    },
    TrackDef {
        id: "explosion_large",
        name: "Large Explosion",
        builder: explosion_large,
    },
    TrackDef {
        id: "shield_hit",
        name: "Shield Hit",
        builder: shield_hit,
    },
    TrackDef {
        id: "carrier_hit",
        name: "Carrier Hit",
        builder: carrier_hit,
    },
    TrackDef {
        id: "ui_blip",
        name: "UI Blip",
        builder: ui_blip,
    },
    TrackDef {
        id: "alarm_low_carrier",
        name: "Carrier Low Alarm",
        builder: alarm_low_carrier,
    },
];

/// All music tracks
pub const MUSIC: &[TrackDef] = &[TrackDef {
    id: "loop_sortie",
    name: "Sortie Theme",
    builder: sortie_theme,
}];

/// Five descending 40ms square chirps, -3dB
pub fn player_laser() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for freq in [800.0, 750.0, 700.0, 650.0, 600.0] {
        clip = clip.append(Clip::tone(freq, 40, Square)?);
    }
    Ok(clip.gain_db(-3.0))
}

/// Higher and faster than the player's laser
pub fn enemy_laser() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for freq in [1200.0, 1100.0, 1000.0, 900.0] {
        clip = clip.append(Clip::tone(freq, 35, Square)?);
    }
    Ok(clip.gain_db(-3.0))
}

/// High crackle transients into a falling rumble, -2dB
pub fn explosion_small() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for i in 0..3u32 {
        let freq = 3000.0 + i as f32 * 500.0;
        clip = clip.append(Clip::tone(freq, 80, Square)?.scale(0.4));
    }
    for freq in [1500.0, 1000.0, 500.0, 250.0] {
        clip = clip.append(Clip::tone(freq, 60, Square)?.scale(0.5));
    }
    Ok(clip.gain_db(-2.0))
}

/// Seven descending sine booms with a quieter low tail, -1dB
pub fn explosion_large() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for freq in [400.0, 350.0, 300.0, 250.0] {
        clip = clip.append(Clip::tone(freq, 100, Sine)?);
    }
    for freq in [200.0, 150.0, 100.0] {
        clip = clip.append(Clip::tone(freq, 80, Sine)?.scale(0.6));
    }
    Ok(clip.gain_db(-1.0))
}

/// Three shortening sine pings, -4dB
pub fn shield_hit() -> Result<Clip, SynthError> {
    let clip = Clip::tone(1200.0, 50, Sine)?
        .append(Clip::tone(1000.0, 40, Sine)?)
        .append(Clip::tone(800.0, 30, Sine)?);
    Ok(clip.gain_db(-4.0))
}

/// Rising square alarm burst, unattenuated
pub fn carrier_hit() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for freq in [400.0, 500.0, 600.0, 700.0] {
        clip = clip.append(Clip::tone(freq, 60, Square)?);
    }
    Ok(clip)
}

/// Two-beep menu blip with a 10ms gap, -6dB
pub fn ui_blip() -> Result<Clip, SynthError> {
    let clip = Clip::tone(600.0, 20, Sine)?
        .append(Clip::silence(10))
        .append(Clip::tone(800.0, 20, Sine)?);
    Ok(clip.gain_db(-6.0))
}

/// Three double-beep warning cycles, -2dB
pub fn alarm_low_carrier() -> Result<Clip, SynthError> {
    let mut clip = Clip::empty();
    for _ in 0..3 {
        clip = clip
            .append(Clip::tone(500.0, 150, Square)?)
            .append(Clip::silence(50))
            .append(Clip::tone(500.0, 150, Square)?)
            .append(Clip::silence(200));
    }
    Ok(clip.gain_db(-2.0))
}

/// Sortie theme note sequence: (frequency Hz, duration ms)
const SORTIE_NOTES: &[(f32, u32)] = &[
    (523.0, 200),
    (587.0, 200),
    (659.0, 200),
    (784.0, 200),
    (659.0, 200),
    (587.0, 200),
    (523.0, 200),
    (440.0, 400),
];

/// Prefix slice used to extend the theme to the loop length
const SORTIE_LOOP_SLICE_MS: u32 = 500;

/// Exact loop length for seamless repetition
const SORTIE_TARGET_MS: u32 = 4000;

/// The combat music loop: an 1800ms melody looped to exactly 4000ms
pub fn sortie_theme() -> Result<Clip, SynthError> {
    let mut theme = Clip::empty();
    for &(freq, duration_ms) in SORTIE_NOTES {
        theme = theme.append(Clip::tone(freq, duration_ms, Square)?);
    }
    theme.loop_to_length(SORTIE_LOOP_SLICE_MS, SORTIE_TARGET_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_count;

    #[test]
    fn test_all_entries_build() {
        for def in SFX.iter().chain(MUSIC.iter()) {
            let clip = def.build().unwrap_or_else(|e| panic!("{}: {}", def.id, e));
            assert!(!clip.is_empty(), "{} produced an empty clip", def.id);
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = SFX.iter().chain(MUSIC.iter()).map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SFX.len() + MUSIC.len());
    }

    #[test]
    fn test_player_laser_shape() {
        let clip = player_laser().unwrap();
        // Five 40ms segments: exactly 200ms of audio
        assert_eq!(clip.len(), 5 * sample_count(40));
        assert_eq!(clip.len(), sample_count(200));

        // 40ms squares skip the envelope, so after -3dB every sample sits
        // at the attenuated peak: round(26214 * 10^(-3/20)) = 18558
        assert!(clip.samples().iter().all(|&s| s.abs() == 18558));
    }

    #[test]
    fn test_ui_blip_shape() {
        let clip = ui_blip().unwrap();
        assert_eq!(clip.len(), sample_count(50));

        // The middle 10ms gap stays exactly silent through attenuation
        let gap_start = sample_count(20);
        let gap_end = gap_start + sample_count(10);
        assert!(clip.samples()[gap_start..gap_end].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_sortie_theme_loops_to_exact_length() {
        let clip = sortie_theme().unwrap();
        // 4000ms at 22050Hz
        assert_eq!(clip.len(), 88_200);

        // The loop is built from the theme's 500ms prefix: the first
        // 500ms reappears right after the 1800ms base melody
        let base = sample_count(1800);
        let slice = sample_count(500);
        assert_eq!(
            &clip.samples()[..slice],
            &clip.samples()[base..base + slice]
        );
    }

    #[test]
    fn test_explosion_large_has_two_gain_tiers() {
        let clip = explosion_large().unwrap();
        assert_eq!(clip.len(), 4 * sample_count(100) + 3 * sample_count(80));
    }

    #[test]
    fn test_recipes_are_idempotent() {
        for def in SFX.iter().chain(MUSIC.iter()) {
            assert_eq!(
                def.build().unwrap(),
                def.build().unwrap(),
                "{} is not deterministic",
                def.id
            );
        }
    }
}
