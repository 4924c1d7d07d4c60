//! Pleasure-Arousal-Dominance affect representation.
//!
//! Upstream emotion-selection code mixes two conventions for PAD values
//! ([-1, 1] and [0, 1] ranges). This crate canonicalizes once, at the
//! boundary: every component is clamped to [0, 1] on construction, and all
//! internal math assumes that range.

use serde::{Deserialize, Serialize};

/// A point in the Pleasure-Arousal-Dominance affect space.
///
/// All three components are always in [0, 1]. Out-of-range inputs are
/// clamped silently rather than rejected: malformed PAD values are a normal
/// occurrence from upstream emotion-selection logic and must not abort
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectVector {
    /// Pleasure (valence), 0 = negative, 1 = positive.
    pub pleasure: f64,
    /// Arousal (activation), 0 = calm, 1 = excited.
    pub arousal: f64,
    /// Dominance (control), 0 = submissive, 1 = dominant.
    pub dominance: f64,
}

impl AffectVector {
    /// Creates an affect vector, clamping each component to [0, 1].
    ///
    /// Non-finite components clamp to 0.
    pub fn new(pleasure: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            pleasure: clamp_unit(pleasure),
            arousal: clamp_unit(arousal),
            dominance: clamp_unit(dominance),
        }
    }

    /// The neutral affect (all components at 0.5).
    pub fn neutral() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }

    /// Returns a copy with every component re-clamped to [0, 1].
    ///
    /// Used on entry to the render pipeline so that directly constructed
    /// structs (e.g. deserialized ones) are canonical too.
    pub fn clamped(&self) -> Self {
        Self::new(self.pleasure, self.arousal, self.dominance)
    }
}

impl Default for AffectVector {
    fn default() -> Self {
        Self::neutral()
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
