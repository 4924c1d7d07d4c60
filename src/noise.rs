//! Broadband noise floor.
//!
//! Adds gaussian noise to the harmonic signal before envelope application.
//! Higher arousal and lower dominance raise the noise amplitude, giving the
//! breathy, nervous quality of an agitated voice. The noise is purely
//! additive; it is not gated by any threshold.

use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg32;

use crate::affect::AffectVector;
use crate::config::SynthConfig;

/// Affect-scaled broadband noise source.
#[derive(Debug, Clone, Copy)]
pub struct NoiseBlender {
    /// Per-sample noise amplitude.
    pub amplitude: f64,
}

impl NoiseBlender {
    /// Creates a blender with amplitude `floor + span·A·(1−D)`.
    pub fn new(affect: &AffectVector, config: &SynthConfig) -> Self {
        Self {
            amplitude: config.noise_floor
                + config.noise_span * affect.arousal * (1.0 - affect.dominance),
        }
    }

    /// Adds `amplitude · N(0,1)` to every sample in place.
    pub fn blend(&self, signal: &mut [f64], rng: &mut Pcg32) {
        for sample in signal.iter_mut() {
            let draw: f64 = StandardNormal.sample(rng);
            *sample += self.amplitude * draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_amplitude_formula() {
        let config = SynthConfig::default();

        let calm = NoiseBlender::new(&AffectVector::new(0.5, 0.0, 1.0), &config);
        assert!((calm.amplitude - 0.08).abs() < 1e-12);

        let nervous = NoiseBlender::new(&AffectVector::new(0.5, 1.0, 0.0), &config);
        assert!((nervous.amplitude - 0.18).abs() < 1e-12);
    }

    #[test]
    fn test_blend_is_additive() {
        let config = SynthConfig::default();
        let blender = NoiseBlender::new(&AffectVector::new(0.5, 1.0, 0.0), &config);

        let mut with_offset = vec![1.0; 256];
        let mut zero = vec![0.0; 256];
        blender.blend(&mut with_offset, &mut create_rng(42));
        blender.blend(&mut zero, &mut create_rng(42));

        for (a, b) in with_offset.iter().zip(zero.iter()) {
            assert!((a - b - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_blend_determinism() {
        let config = SynthConfig::default();
        let blender = NoiseBlender::new(&AffectVector::neutral(), &config);

        let mut first = vec![0.0; 512];
        let mut second = vec![0.0; 512];
        blender.blend(&mut first, &mut create_rng(9));
        blender.blend(&mut second, &mut create_rng(9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_noise_statistics_roughly_standard() {
        let config = SynthConfig::default();
        let blender = NoiseBlender::new(&AffectVector::new(0.5, 0.0, 1.0), &config);

        let n = 50_000;
        let mut samples = vec![0.0; n];
        blender.blend(&mut samples, &mut create_rng(1234));

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.01);
        // Variance should be near amplitude^2.
        let expected = blender.amplitude * blender.amplitude;
        assert!((var - expected).abs() / expected < 0.05);
    }
}
