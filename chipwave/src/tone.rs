//! Tone rendering
//!
//! Renders single periodic waveform segments at the fixed sample rate,
//! shapes them with the attack/decay envelope, and quantizes to 16-bit PCM.

use crate::{sample_count, SynthError, SAMPLE_RATE};
use std::f32::consts::PI;

/// Waveform types for tone rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine wave - smooth, round tone
    Sine,
    /// Square wave - hollow, buzzy retro sound. Pure bipolar, not
    /// band-limited; the aliasing is the intended timbre.
    Square,
}

impl Waveform {
    /// Look up a waveform by name.
    ///
    /// Unrecognized names fall back to [`Waveform::Sine`] - a documented
    /// default, not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "square" => Waveform::Square,
            _ => Waveform::Sine,
        }
    }
}

/// Peak headroom applied before 16-bit quantization
const HEADROOM: f32 = 0.8;

/// Level the fade-out decays to (20%, not silence - keeps a light
/// percussive trailing edge without a hard click)
const TAIL_LEVEL: f32 = 0.2;

/// Fade-in window in samples (1% of a second)
pub(crate) fn attack_samples() -> usize {
    (SAMPLE_RATE as f64 * 0.01).round() as usize
}

/// Fade-out window in samples (50ms)
pub(crate) fn decay_samples() -> usize {
    (SAMPLE_RATE as f64 * 0.05).round() as usize
}

/// A single tone request: frequency, duration, and waveform shape.
///
/// Pure value - rendered on demand, folded into a [`crate::Clip`]
/// immediately after.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    /// Frequency in Hz (must be positive)
    pub frequency: f32,
    /// Duration in milliseconds (must be positive)
    pub duration_ms: u32,
    /// Waveform shape
    pub waveform: Waveform,
}

impl Tone {
    pub fn new(frequency: f32, duration_ms: u32, waveform: Waveform) -> Self {
        Self {
            frequency,
            duration_ms,
            waveform,
        }
    }

    /// Render this tone to quantized PCM samples.
    ///
    /// The buffer length is exactly `round(SAMPLE_RATE * duration / 1000)`.
    /// Buffers too short for both envelope windows are left unshaped.
    pub fn render(&self) -> Result<Vec<i16>, SynthError> {
        if !(self.frequency > 0.0) {
            return Err(SynthError::InvalidParameter(format!(
                "tone frequency must be positive, got {}",
                self.frequency
            )));
        }
        if self.duration_ms == 0 {
            return Err(SynthError::InvalidParameter(
                "tone duration must be positive".into(),
            ));
        }

        let num_samples = sample_count(self.duration_ms);
        let omega = 2.0 * PI * self.frequency / SAMPLE_RATE as f32;

        let mut samples = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            let phase = omega * i as f32;
            let wave = match self.waveform {
                Waveform::Sine => phase.sin(),
                Waveform::Square => {
                    if phase.sin() >= 0.0 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };
            samples.push(quantize(wave * envelope_factor(i, num_samples)));
        }

        Ok(samples)
    }
}

/// Envelope amplitude at sample `i` of a `total`-sample buffer.
///
/// Linear fade-in over the attack window, linear fade-out to [`TAIL_LEVEL`]
/// over the decay window, unity in between. Buffers that cannot fit both
/// windows get no shaping at all.
fn envelope_factor(i: usize, total: usize) -> f32 {
    let attack = attack_samples();
    let decay = decay_samples();
    if total <= attack + decay {
        return 1.0;
    }

    if i < attack {
        i as f32 / (attack - 1) as f32
    } else if i >= total - decay {
        let j = (i - (total - decay)) as f32;
        1.0 - (1.0 - TAIL_LEVEL) * (j / (decay - 1) as f32)
    } else {
        1.0
    }
}

/// Scale a normalized sample by the headroom factor and the 16-bit peak,
/// round to nearest, and clamp. No overflow wraparound, ever.
fn quantize(value: f32) -> i16 {
    (value * HEADROOM * i16::MAX as f32)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}
