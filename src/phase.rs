//! Frequency synthesis and phase integration.
//!
//! Turns the base frequency and the octave-offset curve into a per-sample
//! instantaneous frequency, then integrates it into an unwrapped phase. The
//! phase is the running sum of `2π·f(t)/sr` and is never reset or wrapped
//! modulo 2π before the oscillator stage: wrapping mid-pipeline would insert
//! an audible click wherever the pitch curve is non-constant. Wrapping is
//! deferred to the sine evaluation itself.

use std::f64::consts::TAU;

/// Unwrapped oscillator phase, one value per audio sample.
///
/// Invariant: strictly the inclusive prefix sum of the per-sample phase
/// increments, monotonically increasing for positive frequencies.
#[derive(Debug, Clone)]
pub struct PhaseTrack {
    /// Phase in radians at each sample, unwrapped.
    pub samples: Vec<f64>,
}

impl PhaseTrack {
    /// Integrates an instantaneous frequency curve into a phase track.
    ///
    /// # Arguments
    /// * `frequencies` - Instantaneous frequency in Hz at each sample
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn integrate(frequencies: &[f64], sample_rate: f64) -> Self {
        let increments = frequencies.iter().map(|f| TAU * f / sample_rate);
        Self {
            samples: inclusive_scan(increments),
        }
    }

    /// Number of samples in the track.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the track is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Converts a base frequency and octave-offset curve into instantaneous
/// frequency: `f(t) = f0 · 2^offset(t)`.
pub fn instantaneous_frequency(base_freq: f64, octave_offsets: &[f64]) -> Vec<f64> {
    octave_offsets
        .iter()
        .map(|offset| base_freq * offset.exp2())
        .collect()
}

/// Inclusive prefix sum.
///
/// The sequential core of phase integration, kept as a named scan so that a
/// parallel implementation (a scan with carry propagation across chunks) can
/// replace it behind the same contract: `out[i] = Σ input[0..=i]`.
pub fn inclusive_scan(input: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut acc = 0.0;
    input
        .map(|x| {
            acc += x;
            acc
        })
        .collect()
}
