//! Pitch contour generation.
//!
//! Builds the octave-offset curve a vocalization follows over its duration.
//! Key points come from an affect-driven random walk: arousal sets how many
//! interior points there are and how far each one swings, pleasure and
//! dominance pull the end point toward or away from the rest offset. A
//! degree-2 spline through the key points is sampled at audio rate, and a
//! dominance-damped vibrato is summed on top.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::affect::AffectVector;
use crate::config::SynthConfig;
use crate::error::{SynthError, SynthResult};
use crate::spline::QuadraticSpline;

/// A pitch contour: spline key points plus the dense octave-offset curve.
///
/// Built once per render and consumed immediately by phase integration.
#[derive(Debug, Clone)]
pub struct PitchContour {
    /// Key point times in seconds, strictly increasing, spanning [0, duration].
    pub key_times: Vec<f64>,
    /// Octave offset at each key point.
    pub key_offsets: Vec<f64>,
    /// Octave offset at every audio sample (spline + vibrato).
    pub curve: Vec<f64>,
}

/// Generates pitch contours from affect parameters.
#[derive(Debug, Clone)]
pub struct PitchContourGenerator {
    config: SynthConfig,
}

impl PitchContourGenerator {
    /// Creates a generator using the given constants.
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Builds the contour for one vocalization.
    ///
    /// # Arguments
    /// * `affect` - Canonical PAD vector
    /// * `duration` - Total duration in seconds (> 0)
    /// * `num_samples` - Audio sample count for the dense curve
    /// * `rng` - Caller-owned RNG
    pub fn generate(
        &self,
        affect: &AffectVector,
        duration: f64,
        num_samples: usize,
        rng: &mut Pcg32,
    ) -> SynthResult<PitchContour> {
        if !(duration > 0.0) {
            return Err(SynthError::degenerate_contour(format!(
                "duration {duration} admits no positive segment durations"
            )));
        }

        let key_offsets = self.key_offsets(affect, rng);
        let key_times = self.key_times(key_offsets.len(), duration, rng)?;

        let spline = QuadraticSpline::fit(key_times.clone(), key_offsets.clone())?;

        let sr = self.config.sample_rate as f64;
        let vib_depth = self.config.vibrato_depth * affect.arousal * (1.0 - affect.dominance);
        let vib_freq =
            self.config.vibrato_freq_base + self.config.vibrato_freq_span * (1.0 - affect.dominance);

        let curve = (0..num_samples)
            .map(|i| {
                let t = i as f64 / sr;
                spline.eval(t) + vib_depth * (TAU * vib_freq * t).sin()
            })
            .collect();

        Ok(PitchContour {
            key_times,
            key_offsets,
            curve,
        })
    }

    /// Draws the key point offsets: rest start, signed random walk, gravity end.
    fn key_offsets(&self, affect: &AffectVector, rng: &mut Pcg32) -> Vec<f64> {
        let a = affect.arousal;
        // At least 2 interior points so the degree-2 fit always has enough
        // knots, even at zero arousal.
        let n_mid = (((10.0 * a).round() as usize).max(1)).max(2);

        let mut offsets = Vec::with_capacity(n_mid + 2);
        offsets.push(0.0);

        let mut sign = 1.0;
        for _ in 0..n_mid {
            let strength = a * rng.gen_range(0.5..1.0);
            // Flip before stepping: consecutive swings alternate direction.
            sign = -sign;
            offsets.push(offsets[offsets.len() - 1] + sign * strength);
        }

        let gravity = (1.0 - affect.dominance) * (1.0 - affect.pleasure);
        let end_sign = if affect.pleasure > 0.5 { 1.0 } else { -1.0 };
        let end =
            end_sign * gravity * self.config.max_end_offset * (0.5 + rng.gen::<f64>());
        offsets.push(end);

        offsets
    }

    /// Places the key points in time: random positive segment durations
    /// normalized to sum to the total duration.
    fn key_times(
        &self,
        num_points: usize,
        duration: f64,
        rng: &mut Pcg32,
    ) -> SynthResult<Vec<f64>> {
        let num_segments = num_points - 1;
        let raw: Vec<f64> = (0..num_segments).map(|_| rng.gen::<f64>()).collect();
        let total: f64 = raw.iter().sum();
        if !(total > 0.0) {
            return Err(SynthError::degenerate_contour(
                "segment duration draws sum to zero",
            ));
        }

        let mut times = Vec::with_capacity(num_points);
        times.push(0.0);
        let mut acc = 0.0;
        for &r in &raw {
            acc += r / total * duration;
            times.push(acc);
        }
        // Pin the final key point to the exact duration against summation drift.
        times[num_segments] = duration;

        Ok(times)
    }
}
