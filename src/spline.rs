//! Degree-2 interpolating spline.
//!
//! The pitch contour is fit with a C1 piecewise quadratic through its key
//! points. On each interval the curve is a parabola chosen so that adjacent
//! pieces share a slope at the interior knots; the slope at the first knot is
//! free and fixed to zero, which starts the contour flat from its rest
//! offset.

use crate::error::{SynthError, SynthResult};

/// A C1 piecewise quadratic interpolant through a set of knots.
#[derive(Debug, Clone)]
pub struct QuadraticSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// Slope at each knot. `slopes[i+1] = 2*secant_i - slopes[i]`.
    slopes: Vec<f64>,
}

impl QuadraticSpline {
    /// Fits a quadratic spline through `(knots[i], values[i])`.
    ///
    /// Requires at least 3 points and strictly increasing knots; anything
    /// less cannot support a degree-2 fit and yields `DegenerateContour`.
    pub fn fit(knots: Vec<f64>, values: Vec<f64>) -> SynthResult<Self> {
        if knots.len() != values.len() {
            return Err(SynthError::degenerate_contour(format!(
                "{} knots but {} values",
                knots.len(),
                values.len()
            )));
        }
        if knots.len() < 3 {
            return Err(SynthError::degenerate_contour(format!(
                "need at least 3 key points, got {}",
                knots.len()
            )));
        }
        for pair in knots.windows(2) {
            if !(pair[1] > pair[0]) {
                return Err(SynthError::degenerate_contour(format!(
                    "key times not strictly increasing ({} then {})",
                    pair[0], pair[1]
                )));
            }
        }

        let mut slopes = Vec::with_capacity(knots.len());
        slopes.push(0.0);
        for i in 0..knots.len() - 1 {
            let secant = (values[i + 1] - values[i]) / (knots[i + 1] - knots[i]);
            let next = 2.0 * secant - slopes[i];
            slopes.push(next);
        }

        Ok(Self {
            knots,
            values,
            slopes,
        })
    }

    /// Evaluates the spline at `t`.
    ///
    /// `t` is clamped to the knot span, so evaluation never extrapolates.
    pub fn eval(&self, t: f64) -> f64 {
        let n = self.knots.len();
        let t = t.clamp(self.knots[0], self.knots[n - 1]);

        // Index of the interval containing t.
        let i = match self
            .knots
            .binary_search_by(|knot| knot.partial_cmp(&t).expect("knots are finite"))
        {
            Ok(i) => i.min(n - 2),
            Err(i) => i.saturating_sub(1).min(n - 2),
        };

        let h = t - self.knots[i];
        let width = self.knots[i + 1] - self.knots[i];
        let curvature = (self.slopes[i + 1] - self.slopes[i]) / (2.0 * width);
        self.values[i] + self.slopes[i] * h + curvature * h * h
    }

    /// Evaluates the spline at a sequence of times.
    pub fn sample(&self, times: impl Iterator<Item = f64>) -> Vec<f64> {
        times.map(|t| self.eval(t)).collect()
    }
}
