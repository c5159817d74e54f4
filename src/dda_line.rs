//! Line rasterization: naive slope evaluation, DDA and Bresenham.
//!
//! Every variant emits one pixel per unit step along the dominant axis,
//! inclusive of both endpoints. The DDA interpolator walks from the first
//! point to the second; the naive and Bresenham variants reorder the
//! endpoints so they always walk in the increasing direction of their
//! driving axis.

use crate::algorithm::LineAlgorithm;
use crate::basics::{itrunc, Point, PointList};
use crate::error::{expect_points, Result};

// ============================================================================
// Naive slope evaluation
// ============================================================================

/// Rasterize by evaluating `y = y0 + k * (x - x0)` for every integer x.
///
/// Vertical segments have no slope and walk the y range instead. Steep
/// segments leave gaps; this variant exists as the reference baseline.
pub fn line_naive(p0: Point, p1: Point) -> PointList {
    if p0.x == p1.x {
        let (ya, yb) = if p0.y <= p1.y { (p0.y, p1.y) } else { (p1.y, p0.y) };
        return (ya..=yb).map(|y| Point::new(p0.x, y)).collect();
    }

    let (a, b) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
    let k = (b.y - a.y) as f64 / (b.x - a.x) as f64;
    (a.x..=b.x)
        .map(|x| Point::new(x, itrunc(a.y as f64 + k * (x - a.x) as f64)))
        .collect()
}

// ============================================================================
// DDA line interpolator
// ============================================================================

/// Floating-point DDA line interpolator.
///
/// Takes `max(|dx|, |dy|)` equal steps from the first point to the second,
/// truncating the accumulated position toward zero at each emission.
#[derive(Debug, Clone)]
pub struct DdaLineInterpolator {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u32,
    started: bool,
}

impl DdaLineInterpolator {
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let steps = dx.unsigned_abs().max(dy.unsigned_abs());
        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx as f64 / steps as f64, dy as f64 / steps as f64)
        };
        Self {
            x: p0.x as f64,
            y: p0.y as f64,
            x_inc,
            y_inc,
            remaining: steps,
            started: false,
        }
    }

    /// Number of steps along the dominant axis.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.remaining
    }
}

impl Iterator for DdaLineInterpolator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.started {
            self.started = true;
        } else if self.remaining == 0 {
            return None;
        } else {
            self.x += self.x_inc;
            self.y += self.y_inc;
            self.remaining -= 1;
        }
        Some(Point::from_f64_trunc(self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize + usize::from(!self.started);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLineInterpolator {}

// ============================================================================
// Bresenham line interpolator
// ============================================================================

/// Integer-only Bresenham line interpolator.
///
/// Shallow segments (`|dy| <= |dx|`) are driven by x, steep ones by y. The
/// walk always starts at the endpoint with the smaller driving coordinate;
/// the minor axis moves by +1 when dx and dy share a sign and by -1
/// otherwise.
#[derive(Debug, Clone)]
pub struct LineBresenhamInterpolator {
    x: i32,
    y: i32,
    end: i32,
    ver: bool,
    minor_inc: i32,
    decision: i32,
    inc_straight: i32,
    inc_diagonal: i32,
    started: bool,
}

impl LineBresenhamInterpolator {
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let adx = dx.abs();
        let ady = dy.abs();
        let minor_inc = if (dx < 0 && dy < 0) || (dx > 0 && dy > 0) {
            1
        } else {
            -1
        };

        let ver = ady > adx;
        let (start, end) = if ver {
            if dy >= 0 {
                (p0, p1.y)
            } else {
                (p1, p0.y)
            }
        } else if dx >= 0 {
            (p0, p1.x)
        } else {
            (p1, p0.x)
        };
        let (major, minor) = if ver { (ady, adx) } else { (adx, ady) };

        Self {
            x: start.x,
            y: start.y,
            end,
            ver,
            minor_inc,
            decision: 2 * minor - major,
            inc_straight: 2 * minor,
            inc_diagonal: 2 * minor - 2 * major,
            started: false,
        }
    }

    /// True if the line is driven by the y axis.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    #[inline]
    fn major(&self) -> i32 {
        if self.ver {
            self.y
        } else {
            self.x
        }
    }
}

impl Iterator for LineBresenhamInterpolator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.started {
            self.started = true;
            return Some(Point::new(self.x, self.y));
        }
        if self.major() >= self.end {
            return None;
        }

        let step_minor = self.decision >= 0;
        if step_minor {
            self.decision += self.inc_diagonal;
        } else {
            self.decision += self.inc_straight;
        }

        if self.ver {
            self.y += 1;
            if step_minor {
                self.x += self.minor_inc;
            }
        } else {
            self.x += 1;
            if step_minor {
                self.y += self.minor_inc;
            }
        }
        Some(Point::new(self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.major()).max(0) as usize + usize::from(!self.started);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineBresenhamInterpolator {}

// ============================================================================
// Dispatch
// ============================================================================

/// Rasterize the segment between two points with the chosen algorithm.
pub fn line_points(p0: Point, p1: Point, algorithm: LineAlgorithm) -> PointList {
    match algorithm {
        LineAlgorithm::Naive => line_naive(p0, p1),
        LineAlgorithm::Dda => DdaLineInterpolator::new(p0, p1).collect(),
        LineAlgorithm::Bresenham => LineBresenhamInterpolator::new(p0, p1).collect(),
    }
}

/// Rasterize a line segment given as a two-point list.
pub fn rasterize_line(points: &[Point], algorithm: LineAlgorithm) -> Result<PointList> {
    expect_points("line", points, 2)?;
    Ok(line_points(points[0], points[1], algorithm))
}

// ============================================================================
// Tests
// ============================================================================
