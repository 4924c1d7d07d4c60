//! Named synthesis constants.
//!
//! The original vocalization pipeline existed in several near-identical
//! copies with drifting inline literals (maximum end offset, harmonic-count
//! coefficients, attack/release times). This module collapses those forks
//! into one parameterization: a variant is a `SynthConfig` value, not a code
//! fork.

use serde::{Deserialize, Serialize};

/// Canonical sample rate for rendered vocalizations, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// All tunable constants of the render pipeline.
///
/// `Default` gives the canonical parameterization; the field docs note the
/// affect component each constant is scaled by at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Lowest possible base frequency, in Hz.
    pub base_freq_min: f64,
    /// Arousal-scaled span above `base_freq_min`, in Hz.
    pub base_freq_span: f64,

    /// Largest magnitude of the contour end offset, in octaves.
    pub max_end_offset: f64,
    /// Vibrato depth at full arousal, in octaves.
    pub vibrato_depth: f64,
    /// Vibrato frequency floor, in Hz.
    pub vibrato_freq_base: f64,
    /// Dominance-scaled vibrato frequency span, in Hz.
    pub vibrato_freq_span: f64,

    /// Harmonic count at zero arousal.
    pub harmonic_base: f64,
    /// Arousal-scaled span of additional harmonics.
    pub harmonic_span: f64,
    /// Half-width of the per-partial inharmonicity draw.
    pub inharmonicity: f64,
    /// Half-width of the arousal-scaled per-partial ratio jitter.
    pub harmonic_jitter: f64,

    /// Noise amplitude floor.
    pub noise_floor: f64,
    /// Affect-scaled noise amplitude span.
    pub noise_span: f64,

    /// Attack time floor, in seconds.
    pub attack_base: f64,
    /// Span added to the attack as arousal falls, in seconds.
    pub attack_span: f64,
    /// Release time floor, in seconds.
    pub release_base: f64,
    /// Span added to the release as arousal falls, in seconds.
    pub release_span: f64,
    /// Exponent coefficient of the release decay curve.
    pub release_decay: f64,
    /// Sustain level at zero dominance.
    pub sustain_base: f64,
    /// Dominance-scaled sustain span.
    pub sustain_span: f64,
    /// Starting level of the duration-wide rise ramp.
    pub rise_floor: f64,

    /// Output gain at zero dominance.
    pub gain_base: f64,
    /// Dominance-scaled gain span.
    pub gain_span: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            base_freq_min: 220.0,
            base_freq_span: 500.0,
            max_end_offset: 2.0,
            vibrato_depth: 0.15,
            vibrato_freq_base: 3.0,
            vibrato_freq_span: 10.0,
            harmonic_base: 2.0,
            harmonic_span: 10.0,
            inharmonicity: 0.15,
            harmonic_jitter: 0.07,
            noise_floor: 0.08,
            noise_span: 0.1,
            attack_base: 0.2,
            attack_span: 0.5,
            release_base: 0.3,
            release_span: 0.4,
            release_decay: 4.5,
            sustain_base: 0.6,
            sustain_span: 0.4,
            rise_floor: 0.2,
            gain_base: 0.2,
            gain_span: 0.8,
        }
    }
}
