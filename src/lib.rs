//! padvox - affective vocalization synthesis
//!
//! This crate renders short monophonic utterance-like waveforms from three
//! continuous affect parameters - Pleasure, Arousal, Dominance (PAD) - and a
//! target duration, so that a physical device can "vocalize" an emotional
//! state without recorded speech.
//!
//! # Pipeline
//!
//! Rendering is one linear batch computation per call:
//!
//! 1. [`contour`] - affect-driven pitch-offset curve over the full duration
//! 2. [`phase`] - instantaneous frequency, integrated into an unwrapped phase
//! 3. [`harmonics`] - fundamental plus affect-weighted partials
//! 4. [`noise`] - broadband gaussian noise floor
//! 5. [`envelope`] - attack/sustain/rise/release amplitude mask and gain
//!
//! # Determinism
//!
//! All randomness flows through a caller-owned PCG32 generator in a fixed
//! draw order. Given the same PAD vector, duration, and seed, the output
//! buffer is bit-identical across runs and process restarts. Two renders
//! must never share one generator; give each call its own.
//!
//! # Example
//!
//! ```
//! use padvox::{render_to_wav, RenderParams};
//!
//! let params = RenderParams {
//!     pleasure: 0.8,
//!     arousal: 0.3,
//!     dominance: 0.6,
//!     duration_seconds: 1.0,
//!     seed: 42,
//! };
//! let wav = render_to_wav(&params).expect("render should succeed");
//! assert_eq!(wav.sample_rate, 44_100);
//! ```

pub mod affect;
pub mod config;
pub mod contour;
pub mod envelope;
pub mod error;
pub mod harmonics;
pub mod noise;
pub mod phase;
pub mod render;
pub mod rng;
pub mod spline;
pub mod wav;

// Re-export main types at crate root
pub use affect::AffectVector;
pub use config::{SynthConfig, SAMPLE_RATE};
pub use error::{SynthError, SynthResult};
pub use render::{render, render_to_wav, RenderParams, RenderResult, Renderer};
pub use wav::WavResult;
