//! Amplitude envelope construction.
//!
//! The envelope is a pure array construction, fully determined before any
//! audio is shaped: an attack ramp, a dominance-scaled sustain level, a
//! duration-wide rise from quiet to full (building energy independent of
//! attack and release), and a release tail that layers an exponential decay
//! over a linear fade for a natural non-linear ending.

use crate::affect::AffectVector;
use crate::config::SynthConfig;

/// Per-sample amplitude multipliers in [0, 1].
///
/// Invariant: length equals the render's sample count; the first value is 0
/// when the attack is non-empty and the last value is ~0 when the release is
/// non-empty.
#[derive(Debug, Clone)]
pub struct EnvelopeProfile {
    /// One multiplier per audio sample.
    pub values: Vec<f64>,
}

impl EnvelopeProfile {
    /// Number of samples the profile covers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the profile is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds envelopes and applies final gain.
#[derive(Debug, Clone)]
pub struct EnvelopeShaper {
    config: SynthConfig,
}

impl EnvelopeShaper {
    /// Creates a shaper using the given constants.
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Builds the amplitude profile for `num_samples` samples.
    pub fn build(&self, affect: &AffectVector, num_samples: usize) -> EnvelopeProfile {
        let n = num_samples;
        let sr = self.config.sample_rate as f64;
        let a = affect.arousal;
        let d = affect.dominance;

        let mut values = vec![1.0; n];

        // Attack: low arousal lengthens it. The 0.01 keeps it non-zero at
        // full arousal.
        let attack_time = self.config.attack_base + (1.0 - a + 0.01) * self.config.attack_span;
        let attack_len = ((sr * attack_time) as usize).min(n / 2);
        for (i, value) in values.iter_mut().take(attack_len).enumerate() {
            *value = ramp_value(0.0, 1.0, attack_len, i);
        }

        // Sustain level scales the whole profile, attack included.
        let sustain_level = self.config.sustain_base + self.config.sustain_span * d;
        for value in values.iter_mut() {
            *value *= sustain_level;
        }

        // Duration-wide rise.
        for (i, value) in values.iter_mut().enumerate() {
            *value *= ramp_value(self.config.rise_floor, 1.0, n, i);
        }

        // Release: linear fade with an exponential decay layered on top.
        let release_time = self.config.release_base + self.config.release_span * (1.0 - a);
        let release_len = ((sr * release_time) as usize).min(n - attack_len);
        let tail_start = n - release_len;
        for i in 0..release_len {
            let fade = ramp_value(1.0, 0.0, release_len, i);
            let r = ramp_value(0.0, 1.0, release_len, i);
            values[tail_start + i] *= fade * (-self.config.release_decay * r).exp();
        }

        EnvelopeProfile { values }
    }

    /// Applies the envelope and the dominance gain to a raw signal in place.
    pub fn apply(&self, affect: &AffectVector, profile: &EnvelopeProfile, signal: &mut [f64]) {
        let gain = self.config.gain_base + self.config.gain_span * affect.dominance;
        for (sample, env) in signal.iter_mut().zip(profile.values.iter()) {
            *sample *= gain * env;
        }
    }
}

/// Value `i` of an inclusive linear ramp of `len` points from `start` to `end`.
///
/// A single-point ramp is just `start`.
fn ramp_value(start: f64, end: f64, len: usize, i: usize) -> f64 {
    if len < 2 {
        start
    } else {
        start + (end - start) * i as f64 / (len - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(affect: AffectVector, num_samples: usize) -> EnvelopeProfile {
        EnvelopeShaper::new(SynthConfig::default()).build(&affect, num_samples)
    }

    #[test]
    fn test_length_matches_sample_count() {
        let profile = build(AffectVector::neutral(), 44_100);
        assert_eq!(profile.len(), 44_100);
    }

    #[test]
    fn test_boundary_values() {
        let profile = build(AffectVector::new(0.8, 0.3, 0.6), 44_100);
        assert_eq!(profile.values[0], 0.0);
        assert!(profile.values[44_099].abs() < 1e-9);
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        for &(p, a, d) in &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (0.8, 0.3, 0.6)] {
            let profile = build(AffectVector::new(p, a, d), 22_050);
            for &v in &profile.values {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_attack_capped_at_half_duration() {
        // Zero arousal asks for a 0.705 s attack; half of 0.5 s wins.
        let profile = build(AffectVector::new(0.5, 0.0, 1.0), 22_050);
        let attack_len = 22_050 / 2;
        // The ramp is still rising at the cap.
        assert!(profile.values[attack_len - 1] > profile.values[attack_len / 2]);
    }

    #[test]
    fn test_dominance_raises_sustain() {
        let meek = build(AffectVector::new(0.5, 0.5, 0.0), 44_100);
        let firm = build(AffectVector::new(0.5, 0.5, 1.0), 44_100);

        // Compare mid-utterance, clear of attack and release.
        let mid = 22_050;
        assert!(firm.values[mid] > meek.values[mid]);
        let ratio = firm.values[mid] / meek.values[mid];
        assert!((ratio - 1.0 / 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_rise_scales_across_duration() {
        // With maximal sustain and no attack/release in the window sampled,
        // consecutive plateau samples follow the 0.2 -> 1.0 rise.
        let n = 44_100;
        let profile = build(AffectVector::new(0.5, 1.0, 1.0), n);
        let config = SynthConfig::default();

        let i = n / 2;
        let expected_ratio = (config.rise_floor + 0.8 * (i + 1) as f64 / (n - 1) as f64)
            / (config.rise_floor + 0.8 * i as f64 / (n - 1) as f64);
        let actual_ratio = profile.values[i + 1] / profile.values[i];
        assert!((actual_ratio - expected_ratio).abs() < 1e-9);
    }

    #[test]
    fn test_release_is_steeper_than_linear() {
        let n = 44_100;
        let profile = build(AffectVector::new(0.5, 0.5, 0.5), n);
        let config = SynthConfig::default();
        let release_len = ((config.sample_rate as f64
            * (config.release_base + config.release_span * 0.5)) as usize)
            .min(n);

        // Halfway through the release the exponential layer puts the value
        // well below the pure linear fade.
        let tail_start = n - release_len;
        let mid = tail_start + release_len / 2;
        let linear_only = profile.values[tail_start] * 0.5;
        assert!(profile.values[mid] < linear_only);
    }

    #[test]
    fn test_apply_scales_by_gain() {
        let shaper = EnvelopeShaper::new(SynthConfig::default());
        let affect = AffectVector::new(0.5, 0.5, 1.0);
        let profile = shaper.build(&affect, 1000);

        let mut signal = vec![1.0; 1000];
        shaper.apply(&affect, &profile, &mut signal);

        // Full dominance gain is 1.0, so output equals the envelope.
        for (s, e) in signal.iter().zip(profile.values.iter()) {
            assert!((s - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tiny_buffer_does_not_panic() {
        for n in 0..4 {
            let profile = build(AffectVector::neutral(), n);
            assert_eq!(profile.len(), n);
        }
    }
}
