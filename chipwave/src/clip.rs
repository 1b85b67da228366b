//! Clip composition
//!
//! A [`Clip`] is an owned run of 16-bit PCM at the fixed sample rate.
//! Every composition op consumes its inputs and returns a new clip, so
//! ownership stays linear: no aliasing, no shared mutation, and re-running
//! a recipe produces bit-identical output.

use crate::tone::{Tone, Waveform};
use crate::{sample_count, SynthError, SAMPLE_RATE};

/// An assembled, playable audio unit (22.05kHz mono 16-bit PCM)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    samples: Vec<i16>,
}

impl Clip {
    /// A zero-length clip, the identity for [`Clip::append`]
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Wrap already-rendered PCM samples
    pub fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Render a single tone as a clip
    pub fn tone(frequency: f32, duration_ms: u32, waveform: Waveform) -> Result<Self, SynthError> {
        Ok(Self {
            samples: Tone::new(frequency, duration_ms, waveform).render()?,
        })
    }

    /// A span of exact zero amplitude
    pub fn silence(duration_ms: u32) -> Self {
        Self {
            samples: vec![0; sample_count(duration_ms)],
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / SAMPLE_RATE as f32
    }

    /// Borrow the PCM samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Take ownership of the PCM samples
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Concatenate: append `other` after this clip
    pub fn append(mut self, other: Clip) -> Clip {
        self.samples.extend_from_slice(&other.samples);
        self
    }

    /// Overlay: sample-wise addition of two clips.
    ///
    /// The shorter clip is treated as zero-padded at the end; the result is
    /// as long as the longer input. Sums are clamped to the 16-bit range,
    /// never renormalized - the lo-fi clipping is the intended sound.
    /// Overlaying with an empty clip is a no-op.
    pub fn overlay(self, other: Clip) -> Clip {
        let (mut base, layer) = if self.samples.len() >= other.samples.len() {
            (self.samples, other.samples)
        } else {
            (other.samples, self.samples)
        };

        for (dst, &src) in base.iter_mut().zip(layer.iter()) {
            *dst = (*dst as i32 + src as i32).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        }

        Clip { samples: base }
    }

    /// Attenuate (or boost) by a decibel delta.
    ///
    /// Applied multiplicatively in the linear domain on the already
    /// quantized samples; the double-scaling noise is accepted.
    pub fn gain_db(self, db: f32) -> Clip {
        self.scale(10f32.powf(db / 20.0))
    }

    /// Scale every sample by a linear gain factor, rounding and clamping
    pub fn scale(mut self, gain: f32) -> Clip {
        for s in self.samples.iter_mut() {
            *s = (*s as f32 * gain)
                .round()
                .clamp(i16::MIN as f32, i16::MAX as f32) as i16;
        }
        self
    }

    /// Loop to an exact length: repeatedly append the clip's leading
    /// `slice_ms` prefix until the total reaches `target_ms`, then truncate
    /// to exactly the target. A target shorter than the clip just truncates.
    ///
    /// Fails with [`SynthError::InvalidParameter`] when the source clip (or
    /// the slice) is empty, since the loop could never make progress.
    pub fn loop_to_length(self, slice_ms: u32, target_ms: u32) -> Result<Clip, SynthError> {
        if self.samples.is_empty() {
            return Err(SynthError::InvalidParameter(
                "cannot loop a zero-length clip".into(),
            ));
        }
        let slice_len = sample_count(slice_ms).min(self.samples.len());
        if slice_len == 0 {
            return Err(SynthError::InvalidParameter(
                "loop slice must be longer than zero samples".into(),
            ));
        }

        let target = sample_count(target_ms);
        let mut samples = self.samples;
        let prefix = samples[..slice_len].to_vec();
        while samples.len() < target {
            samples.extend_from_slice(&prefix);
        }
        samples.truncate(target);

        Ok(Clip { samples })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scale(duration_ms: u32) -> Clip {
        Clip::from_samples(vec![i16::MAX; sample_count(duration_ms)])
    }

    #[test]
    fn test_silence_is_zero() {
        let clip = Clip::silence(100);
        assert_eq!(clip.len(), sample_count(100));
        assert!(clip.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_append_lengths_sum() {
        let a = Clip::tone(440.0, 40, Waveform::Sine).unwrap();
        let b = Clip::tone(880.0, 35, Waveform::Square).unwrap();
        let expected = a.len() + b.len();
        assert_eq!(a.append(b).len(), expected);
    }

    #[test]
    fn test_overlay_pads_shorter() {
        let long = Clip::from_samples(vec![1000; 100]);
        let short = Clip::from_samples(vec![500; 40]);
        let mixed = long.overlay(short);

        assert_eq!(mixed.len(), 100);
        assert_eq!(mixed.samples()[0], 1500);
        // Beyond the short clip the long one passes through untouched
        assert_eq!(mixed.samples()[40], 1000);
        assert_eq!(mixed.samples()[99], 1000);
    }

    #[test]
    fn test_overlay_is_symmetric_in_length() {
        let a = Clip::from_samples(vec![10; 5]);
        let b = Clip::from_samples(vec![20; 9]);
        assert_eq!(a.clone().overlay(b.clone()).len(), 9);
        assert_eq!(b.overlay(a).len(), 9);
    }

    #[test]
    fn test_overlay_clamps_never_wraps() {
        let a = full_scale(10);
        let b = full_scale(10);
        let mixed = a.overlay(b);
        assert!(mixed.samples().iter().all(|&s| s == i16::MAX));

        let neg = Clip::from_samples(vec![i16::MIN; 10]);
        let mixed = neg.clone().overlay(neg);
        assert!(mixed.samples().iter().all(|&s| s == i16::MIN));
    }

    #[test]
    fn test_overlay_empty_is_noop() {
        let clip = Clip::tone(440.0, 40, Waveform::Sine).unwrap();
        let expected = clip.clone();
        assert_eq!(clip.overlay(Clip::empty()), expected);
    }

    #[test]
    fn test_gain_db_attenuates() {
        let clip = Clip::from_samples(vec![26214; 4]).gain_db(-3.0);
        // 26214 * 10^(-3/20) = 18558.08
        assert!(clip.samples().iter().all(|&s| s == 18558));
    }

    #[test]
    fn test_gain_db_on_empty_is_noop() {
        assert!(Clip::empty().gain_db(-6.0).is_empty());
    }

    #[test]
    fn test_scale_rounds_and_clamps() {
        let clip = Clip::from_samples(vec![26214, -26214, i16::MAX]).scale(0.4);
        assert_eq!(clip.samples(), &[10486, -10486, 13107]);

        let boosted = Clip::from_samples(vec![i16::MAX, i16::MIN]).scale(4.0);
        assert_eq!(boosted.samples(), &[i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_loop_to_length_exact() {
        let clip = Clip::tone(440.0, 100, Waveform::Square).unwrap();
        let looped = clip.loop_to_length(50, 1000).unwrap();
        assert_eq!(looped.len(), sample_count(1000));
    }

    #[test]
    fn test_loop_to_length_truncates_below_source() {
        let clip = Clip::tone(440.0, 100, Waveform::Square).unwrap();
        let looped = clip.loop_to_length(50, 30).unwrap();
        assert_eq!(looped.len(), sample_count(30));
    }

    #[test]
    fn test_loop_to_length_slice_longer_than_clip() {
        // Slice clamps to the whole clip and still reaches the target
        let clip = Clip::tone(440.0, 100, Waveform::Square).unwrap();
        let looped = clip.loop_to_length(500, 450).unwrap();
        assert_eq!(looped.len(), sample_count(450));
    }

    #[test]
    fn test_loop_to_length_empty_source_errors() {
        assert!(Clip::empty().loop_to_length(500, 4000).is_err());
    }

    #[test]
    fn test_loop_to_length_zero_slice_errors() {
        let clip = Clip::tone(440.0, 100, Waveform::Square).unwrap();
        assert!(clip.loop_to_length(0, 4000).is_err());
    }

    #[test]
    fn test_loop_repeats_prefix() {
        // 2ms of ramp (44 samples), looped by its 1ms prefix (22 samples)
        // to 4ms (88 samples): body + prefix + prefix, no truncation needed
        let ramp: Vec<i16> = (0..sample_count(2) as i16).collect();
        let prefix: Vec<i16> = ramp[..sample_count(1)].to_vec();

        let looped = Clip::from_samples(ramp.clone())
            .loop_to_length(1, 4)
            .unwrap();

        let mut expected = ramp;
        expected.extend_from_slice(&prefix);
        expected.extend_from_slice(&prefix);
        assert_eq!(looped.samples(), &expected[..]);
    }
}
