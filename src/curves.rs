//! Parametric curve sampling.
//!
//! Bezier curves are evaluated with the closed-form Bernstein sum over all
//! control points, so the cost per sample is linear in the control count.
//! Uniform cubic B-splines live in [`crate::bspline`]. [`CurveSampler`]
//! dispatches between the two at a configurable resolution.

use tracing::trace;

use crate::algorithm::CurveAlgorithm;
use crate::basics::{Point, PointList};
use crate::bspline::UniformBspline;
use crate::error::{expect_at_least, Result};

/// Number of parameter steps taken across `[0, 1)` by default.
pub const DEFAULT_CURVE_SAMPLES: usize = 1000;

/// Minimum number of control points for a Bezier curve (degree 1).
pub const BEZIER_MIN_POINTS: usize = 2;

// ============================================================================
// BezierCurve
// ============================================================================

/// Bezier curve of degree `controls - 1` in Bernstein form.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    controls: Vec<(f64, f64)>,
    binomials: Vec<f64>,
}

/// Row `n` of Pascal's triangle as doubles.
fn binomial_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut c = 1.0;
    row.push(c);
    for i in 1..=n {
        c = c * (n - i + 1) as f64 / i as f64;
        row.push(c);
    }
    row
}

impl BezierCurve {
    pub fn new(controls: &[Point]) -> Result<Self> {
        expect_at_least("Bezier curve", controls, BEZIER_MIN_POINTS)?;
        Ok(Self {
            controls: controls.iter().map(|p| (p.x as f64, p.y as f64)).collect(),
            binomials: binomial_row(controls.len() - 1),
        })
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.controls.len() - 1
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> (f64, f64) {
        let n = self.degree();
        let mt = 1.0 - t;
        self.controls
            .iter()
            .zip(&self.binomials)
            .enumerate()
            .fold((0.0, 0.0), |(x, y), (i, (&(px, py), &c))| {
                let w = c * t.powi(i as i32) * mt.powi((n - i) as i32);
                (x + px * w, y + py * w)
            })
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
// CurveSampler
// ============================================================================

/// Curve evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSampler {
    pub samples: usize,
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CURVE_SAMPLES,
        }
    }
}

impl CurveSampler {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Sample the curve through `controls`.
    ///
    /// A B-spline with fewer than four controls yields an empty list; the
    /// caller should skip drawing it. A Bezier curve with fewer than two
    /// controls is an error.
    pub fn sample(&self, controls: &[Point], algorithm: CurveAlgorithm) -> Result<PointList> {
        match algorithm {
            CurveAlgorithm::Bezier => Ok(BezierCurve::new(controls)?.sample(self.samples)),
            CurveAlgorithm::BSpline => match UniformBspline::new(controls) {
                Some(spline) => Ok(spline.sample(self.samples)),
                None => {
                    trace!(controls = controls.len(), "B-spline under-specified, no samples");
                    Ok(PointList::new())
                }
            },
        }
    }
}

/// Sample a curve at the default resolution.
pub fn sample_curve(controls: &[Point], algorithm: CurveAlgorithm) -> Result<PointList> {
    CurveSampler::default().sample(controls, algorithm)
}

// ============================================================================
// Tests
// ============================================================================
