//! Prompt tables for the sound-generation endpoint
//!
//! An alternative, non-interacting asset source to the procedural
//! synthesizer: the same effect names, described in prose for the vendor
//! model instead of being rendered locally.

/// One prompt-described asset request
pub struct PromptSpec {
    /// Output file name (the service returns MP3 bytes)
    pub file: &'static str,
    /// Prose description sent to the model
    pub prompt: &'static str,
    /// Target duration hint in seconds
    pub duration_secs: u32,
}

/// Sound effect prompts
pub const API_SFX: &[PromptSpec] = &[
    PromptSpec {
        file: "player_laser.mp3",
        prompt: "Retro 8-bit arcade laser sound. Sharp descending pitch from high to low \
                 frequencies, like Space Invaders. Quick attack, about 200 milliseconds. Square \
                 wave quality. Perfect for a 1994 DOS space shooter.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "enemy_laser.mp3",
        prompt: "Retro 8-bit arcade enemy laser sound. Higher pitch than player laser, ascending \
                 then descending. Sharp crisp square wave, reminiscent of classic video game \
                 sound effects. 150 milliseconds duration.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "explosion_small.mp3",
        prompt: "8-bit retro small explosion sound effect. Short burst of noise with descending \
                 pitch. Like a small explosion in a 1994 DOS space shooter game. Square wave \
                 with quick decay. About 300 milliseconds.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "explosion_large.mp3",
        prompt: "8-bit retro large explosion sound effect. Deep booming noise with heavy bass \
                 frequencies descending quickly. Longer duration, about 500ms. Sounds like a big \
                 ship being hit in a DOS game from 1994.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "shield_hit.mp3",
        prompt: "Retro 8-bit shield impact sound. Quick descending beep sequence, like a shield \
                 being hit. Three short tones going down in pitch. Square wave. Crisp and \
                 punchy, about 100 milliseconds.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "carrier_hit.mp3",
        prompt: "Retro 8-bit alarm sound for carrier damage. Rising pitch alarm tone, multiple \
                 beeps in sequence. Urgent sounding. Like a damage warning in a 1994 DOS space \
                 game. Square wave.",
        duration_secs: 2,
    },
    PromptSpec {
        file: "ui_blip.mp3",
        prompt: "Simple retro 8-bit menu selection beep. Two quick high-pitched tones, like \
                 selecting a menu item. Very short, about 50 milliseconds total. Crisp and \
                 clean.",
        duration_secs: 1,
    },
    PromptSpec {
        file: "alarm_low_carrier.mp3",
        prompt: "Retro 8-bit warning alarm for low carrier. Repeating double-beep pattern. \
                 Urgent but not as intense as red alert. Square wave at medium pitch. Loops \
                 naturally. DOS game aesthetic.",
        duration_secs: 3,
    },
];

/// Music prompts
pub const API_MUSIC: &[PromptSpec] = &[PromptSpec {
    file: "loop_sortie.mp3",
    prompt: "Retro 8-bit DOS combat theme music loop. Upbeat action music with simple square \
             wave melody and bass line. 4 seconds, loops seamlessly. Sounds like a 1994 space \
             shooter soundtrack. Electronic synth instruments.",
    duration_secs: 4,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_tables_well_formed() {
        for spec in API_SFX.iter().chain(API_MUSIC.iter()) {
            assert!(spec.file.ends_with(".mp3"));
            assert!(!spec.prompt.is_empty());
            assert!(spec.duration_secs > 0);
        }
    }
}
