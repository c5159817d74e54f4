//! Uniform cubic B-spline evaluation.
//!
//! The curve is parameterized over `[0, 1)` by a knot vector with three
//! repeated knots at each end and uniform interior spacing. Each knot span
//! maps to one cubic segment driven by four consecutive control points,
//! whose power-basis coefficients are derived once from the uniform
//! B-spline basis matrix:
//!
//! ```text
//!          | -1  3 -3  1 |
//!  1/6  *  |  3 -6  3  0 |
//!          | -3  0  3  0 |
//!          |  1  4  1  0 |
//! ```

use crate::basics::{Point, PointList};

/// Minimum number of control points for one cubic segment.
pub const BSPLINE_MIN_POINTS: usize = 4;

// ============================================================================
// Segment coefficients
// ============================================================================

/// Power-basis coefficients `[c3, c2, c1, c0]` of one axis of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cubic([f64; 4]);

impl Cubic {
    fn from_controls(p0: f64, p1: f64, p2: f64, p3: f64) -> Self {
        Cubic([
            (-p0 + 3.0 * p1 - 3.0 * p2 + p3) / 6.0,
            (3.0 * p0 - 6.0 * p1 + 3.0 * p2) / 6.0,
            (-3.0 * p0 + 3.0 * p2) / 6.0,
            (p0 + 4.0 * p1 + p2) / 6.0,
        ])
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        let [c3, c2, c1, c0] = self.0;
        let t2 = t * t;
        c3 * t2 * t + c2 * t2 + c1 * t + c0
    }
}

// ============================================================================
// UniformBspline
// ============================================================================

/// Uniform cubic B-spline over a fixed control polygon.
#[derive(Debug, Clone)]
pub struct UniformBspline {
    knots: Vec<f64>,
    x: Vec<Cubic>,
    y: Vec<Cubic>,
}

impl UniformBspline {
    /// Build the spline, or `None` when there are fewer than four controls.
    pub fn new(controls: &[Point]) -> Option<Self> {
        let n = controls.len();
        if n < BSPLINE_MIN_POINTS {
            return None;
        }

        let interior = n - 3;
        let mut knots = Vec::with_capacity(n + 4);
        knots.extend_from_slice(&[0.0; 3]);
        knots.extend((0..=interior).map(|k| k as f64 / interior as f64));
        knots.extend_from_slice(&[1.0; 3]);

        let (x, y) = controls
            .windows(4)
            .map(|w| {
                (
                    Cubic::from_controls(w[0].x as f64, w[1].x as f64, w[2].x as f64, w[3].x as f64),
                    Cubic::from_controls(w[0].y as f64, w[1].y as f64, w[2].y as f64, w[3].y as f64),
                )
            })
            .unzip();

        Some(Self { knots, x, y })
    }

    /// The knot vector (`controls + 4` entries).
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Number of cubic segments (`controls - 3`).
    pub fn num_segments(&self) -> usize {
        self.x.len()
    }

    /// Index of the knot span containing `t`, in `3..controls`.
    ///
    /// Parameters at or past the last knot resolve to the final span.
    pub fn span(&self, t: f64) -> usize {
        let last = self.knots.len() - 5;
        (3..last)
            .find(|&i| self.knots[i] <= t && t < self.knots[i + 1])
            .unwrap_or(last)
    }

    /// Evaluate the curve at `t` in `[0, 1)`.
    pub fn eval(&self, t: f64) -> (f64, f64) {
        let index = self.span(t);
        let (k0, k1) = (self.knots[index], self.knots[index + 1]);
        let local = (t - k0) / (k1 - k0);
        let seg = index - 3;
        (self.x[seg].eval(local), self.y[seg].eval(local))
    }

    /// Sample `samples` uniform parameter steps across `[0, 1)`, truncating
    /// each position toward zero.
    pub fn sample(&self, samples: usize) -> PointList {
        if samples == 0 {
            return PointList::new();
        }
        let step = 1.0 / samples as f64;
        let mut t = 0.0;
        let mut out = PointList::with_capacity(samples);
        for _ in 0..samples {
            let (x, y) = self.eval(t);
            out.push(Point::from_f64_trunc(x, y));
            t += step;
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
