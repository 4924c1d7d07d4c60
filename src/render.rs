//! Render orchestration.
//!
//! Sequences the pipeline stages into one batch computation per call:
//! affect + duration + RNG go in, one sample buffer comes out. Data flow is
//! strictly linear (contour, frequency, phase, harmonics + noise, envelope);
//! no stage depends on downstream output, and all randomness flows through
//! the single caller-owned generator in a fixed draw order. That draw order
//! is the determinism contract: contour walk, contour end point, segment
//! durations, base frequency, harmonic set, then per-sample noise.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::affect::AffectVector;
use crate::config::SynthConfig;
use crate::contour::PitchContourGenerator;
use crate::envelope::EnvelopeShaper;
use crate::error::{SynthError, SynthResult};
use crate::harmonics::{oscillate, HarmonicSet};
use crate::noise::NoiseBlender;
use crate::phase::{instantaneous_frequency, PhaseTrack};
use crate::rng::create_rng;
use crate::wav::WavResult;

/// Boundary parameters for one render, as supplied by the evaluation loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Pleasure in [0, 1] (clamped on entry).
    pub pleasure: f64,
    /// Arousal in [0, 1] (clamped on entry).
    pub arousal: f64,
    /// Dominance in [0, 1] (clamped on entry).
    pub dominance: f64,
    /// Target duration in seconds, > 0.
    pub duration_seconds: f64,
    /// RNG seed; identical parameters and seed reproduce the buffer exactly.
    pub seed: u32,
}

/// A rendered vocalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// Mono floating-point samples, length = round(duration · sample_rate).
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl RenderResult {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// The affective additive-synthesis renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: SynthConfig,
    contour: PitchContourGenerator,
    envelope: EnvelopeShaper,
}

impl Renderer {
    /// Creates a renderer with the given constants.
    pub fn new(config: SynthConfig) -> Self {
        Self {
            contour: PitchContourGenerator::new(config.clone()),
            envelope: EnvelopeShaper::new(config.clone()),
            config,
        }
    }

    /// The renderer's constants.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Renders one vocalization.
    ///
    /// The affect vector is re-clamped on entry; duration must be positive
    /// and resolve to at least one sample. Either the full buffer is
    /// produced or an error is returned, never a partial buffer.
    ///
    /// # Arguments
    /// * `affect` - PAD vector (clamped to [0, 1] silently)
    /// * `duration` - Target duration in seconds
    /// * `rng` - Caller-owned RNG, exclusive to this call
    pub fn render(
        &self,
        affect: &AffectVector,
        duration: f64,
        rng: &mut Pcg32,
    ) -> SynthResult<RenderResult> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SynthError::invalid_param(
                "duration",
                format!("must be a positive finite number of seconds, got {duration}"),
            ));
        }

        let sr = self.config.sample_rate as f64;
        let num_samples = (duration * sr).round() as usize;
        if num_samples == 0 {
            return Err(SynthError::invalid_param(
                "duration",
                format!("{duration} s resolves to zero samples at {sr} Hz"),
            ));
        }

        let affect = affect.clamped();

        // Pitch contour over the full duration.
        let contour = self.contour.generate(&affect, duration, num_samples, rng)?;

        // Base frequency, then per-sample frequency and unwrapped phase.
        let base_freq = self.config.base_freq_min
            + self.config.base_freq_span * affect.arousal * (rng.gen::<f64>() * affect.arousal);
        let frequencies = instantaneous_frequency(base_freq, &contour.curve);
        let phase = PhaseTrack::integrate(&frequencies, sr);

        // Fundamental plus affect-weighted partials.
        let harmonics = HarmonicSet::build(&affect, &self.config, rng);
        let mut signal = oscillate(&phase, &harmonics);

        // Broadband noise floor.
        NoiseBlender::new(&affect, &self.config).blend(&mut signal, rng);

        // Envelope and gain.
        let profile = self.envelope.build(&affect, num_samples);
        self.envelope.apply(&affect, &profile, &mut signal);

        if let Some(index) = signal.iter().position(|s| !s.is_finite()) {
            return Err(SynthError::synthesis(format!(
                "non-finite sample at index {index}"
            )));
        }

        Ok(RenderResult {
            samples: signal,
            sample_rate: self.config.sample_rate,
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

/// Renders a vocalization from boundary parameters with the canonical
/// configuration.
///
/// Deterministic: identical parameters produce a bit-identical buffer across
/// calls and process restarts.
pub fn render(params: &RenderParams) -> SynthResult<RenderResult> {
    let mut rng = create_rng(params.seed);
    let affect = AffectVector::new(params.pleasure, params.arousal, params.dominance);
    Renderer::default().render(&affect, params.duration_seconds, &mut rng)
}

/// Renders a vocalization and encodes it as a peak-normalized 16-bit WAV.
pub fn render_to_wav(params: &RenderParams) -> SynthResult<WavResult> {
    let result = render(params)?;
    Ok(WavResult::from_samples(&result.samples, result.sample_rate))
}
