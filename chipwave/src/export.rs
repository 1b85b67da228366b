//! WAV export sink
//!
//! Writes finished clips as 22.05kHz mono 16-bit PCM WAV files.
//! Requires the `wav-export` feature.

use crate::clip::Clip;
use crate::SAMPLE_RATE;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Write a clip to a WAV file
pub fn write_wav(clip: &Clip, path: &Path) -> std::io::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    for &sample in clip.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    writer
        .finalize()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Waveform;

    #[test]
    fn test_write_wav_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blip.wav");

        let clip = Clip::tone(600.0, 20, Waveform::Sine).unwrap();
        write_wav(&clip, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, clip.samples());
    }
}
