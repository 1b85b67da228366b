//! Procedural 8-bit audio synthesis for SOLAR SORTIE
//!
//! Generates the game's DOS-style sound effects and music loop offline:
//! raw sine/square tones at 22.05kHz, a fixed attack/decay envelope, and a
//! small clip composer (concatenate, overlay, attenuate, pad with silence,
//! loop to length) feeding a hard-coded catalog of named recipes.
//!
//! # Example
//! ```
//! use chipwave::{Clip, Waveform};
//!
//! // A two-beep UI blip with a silent gap, attenuated -6 dB
//! let blip = Clip::tone(600.0, 20, Waveform::Sine)?
//!     .append(Clip::silence(10))
//!     .append(Clip::tone(800.0, 20, Waveform::Sine)?)
//!     .gain_db(-6.0);
//! assert_eq!(blip.len(), chipwave::sample_count(50));
//! # Ok::<(), chipwave::SynthError>(())
//! ```

mod clip;
mod tone;

pub mod catalog;

#[cfg(feature = "wav-export")]
mod export;

use thiserror::Error;

/// Output sample rate for all rendered audio (22.05kHz, mono)
pub const SAMPLE_RATE: u32 = 22050;

pub use clip::Clip;
pub use tone::{Tone, Waveform};

#[cfg(feature = "wav-export")]
pub use export::write_wav;

/// Errors raised by the tone renderer and clip composer
#[derive(Error, Debug)]
pub enum SynthError {
    /// Caller/recipe bug: non-positive frequency or duration, or a
    /// loop-to-length call that cannot make progress toward its target.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Number of samples covering a duration in milliseconds at [`SAMPLE_RATE`]
pub fn sample_count(duration_ms: u32) -> usize {
    (SAMPLE_RATE as f64 * duration_ms as f64 / 1000.0).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(1000), SAMPLE_RATE as usize);
        assert_eq!(sample_count(40), 882);
        assert_eq!(sample_count(200), 4410);
        // 10ms is 220.5 samples - rounds up, never truncates
        assert_eq!(sample_count(10), 221);
        assert_eq!(sample_count(0), 0);
    }
}
