//! Harmonic oscillator bank.
//!
//! Sums a fundamental sine and a set of affect-weighted partials driven by
//! the shared unwrapped phase. Pleasure controls inharmonicity: near-integer
//! partial ratios when pleasure is high (consonant), detuned ratios when it
//! is low (dissonant). Arousal controls how many partials there are and adds
//! a small per-partial ratio jitter so the timbre is not perfectly static.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::affect::AffectVector;
use crate::config::SynthConfig;
use crate::phase::PhaseTrack;

/// One partial above the fundamental.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Harmonic index k (2-based).
    pub index: usize,
    /// Amplitude, 1/k.
    pub amplitude: f64,
    /// Frequency ratio `k·(1+inharm) + jitter`.
    pub ratio: f64,
}

/// The partials of one vocalization, rebuilt per render.
#[derive(Debug, Clone)]
pub struct HarmonicSet {
    /// Partials for harmonic indices 2..2+N.
    pub partials: Vec<Partial>,
}

impl HarmonicSet {
    /// Draws a harmonic set from affect parameters.
    pub fn build(affect: &AffectVector, config: &SynthConfig, rng: &mut Pcg32) -> Self {
        let count = Self::count(affect, config);
        let mut partials = Vec::with_capacity(count);

        for k in 2..2 + count {
            // Signed uniform draws scaled by the config widths; written as
            // multiplications so a zero-width config is valid.
            let inharm =
                (1.0 - affect.pleasure) * (rng.gen::<f64>() * 2.0 - 1.0) * config.inharmonicity;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * config.harmonic_jitter * affect.arousal;
            partials.push(Partial {
                index: k,
                amplitude: 1.0 / k as f64,
                ratio: k as f64 * (1.0 + inharm) + jitter,
            });
        }

        Self { partials }
    }

    /// Number of partials above the fundamental: `int(2 + 10·A)`.
    pub fn count(affect: &AffectVector, config: &SynthConfig) -> usize {
        (config.harmonic_base + config.harmonic_span * affect.arousal) as usize
    }
}

/// Sums the fundamental and all partials over a phase track.
///
/// # Returns
/// Raw signal `sin(φ) + Σ amp_k·sin(k·ratio_k·φ)` per sample.
pub fn oscillate(phase: &PhaseTrack, harmonics: &HarmonicSet) -> Vec<f64> {
    phase
        .samples
        .iter()
        .map(|&phi| {
            let mut sample = phi.sin();
            for partial in &harmonics.partials {
                sample += partial.amplitude * (partial.index as f64 * partial.ratio * phi).sin();
            }
            sample
        })
        .collect()
}
