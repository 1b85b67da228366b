//! Thin ElevenLabs API client
//!
//! Covers the three endpoints the asset tools need: text-to-speech for VO
//! barks, sound-generation for prompt-described effects, and the voice
//! library listing. No retry logic - a failed request is reported and the
//! batch moves on.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

const API_BASE: &str = "https://api.elevenlabs.io/v1";

/// TTS model tuned for short, fast bark generation
const TTS_MODEL: &str = "eleven_turbo_v2_5";

/// One voice from the voice library
#[derive(Debug, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

pub struct ElevenLabs {
    client: reqwest::Client,
    api_key: String,
}

impl ElevenLabs {
    /// Build a client from the `ELEVEN_LABS_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ELEVEN_LABS_KEY")
            .context("ELEVEN_LABS_KEY environment variable not set")?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, api_key })
    }

    /// Synthesize one bark line with the given voice. Returns OGG bytes.
    pub async fn text_to_speech(&self, voice_id: &str, text: &str) -> Result<Vec<u8>> {
        let url = format!("{}/text-to-speech/{}", API_BASE, voice_id);
        let body = json!({
            "text": text,
            "model_id": TTS_MODEL,
            // Fixed settings for a consistent radio/military feel
            "voice_settings": {
                "stability": 0.55,
                "similarity_boost": 0.75,
                "style": 0.0,
                "use_speaker_boost": true,
            },
        });

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/ogg")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Generate a sound effect from a prompt description. Returns the raw
    /// audio bytes the service produced.
    pub async fn sound_generation(&self, prompt: &str, duration_secs: u32) -> Result<Vec<u8>> {
        let url = format!("{}/sound-generation", API_BASE);
        let body = json!({
            "text": prompt,
            "duration_seconds": duration_secs,
        });

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }

    /// List the available voices (useful for finding voice ids)
    pub async fn voices(&self) -> Result<Vec<Voice>> {
        let url = format!("{}/voices", API_BASE);
        let response: VoicesResponse = self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.voices)
    }
}
