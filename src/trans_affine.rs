//! Affine transformations of point lists.
//!
//! [`TransAffine`] is a plain 2x3 matrix. The point-list operations
//! [`translate`], [`rotate`] and [`scale`] take the list by value and hand
//! back the transformed list; callers that need the original keep a clone.
//!
//! Rotation and scaling work on offsets from a pivot and then shift back,
//! so the pivot itself never moves. The two operations convert back to
//! integers differently: rotation rounds to nearest, scaling truncates
//! toward zero. Repeated scaling by factors below one therefore drifts
//! toward the pivot.

use crate::basics::{deg2rad, Point, PointList};

/// 2D affine transformation matrix.
///
/// Stores six components `[sx, shy, shx, sy, tx, ty]`:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for TransAffine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransAffine {
    /// Identity matrix.
    pub fn new() -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Rotation by `a` radians. With y growing downward a positive angle
    /// turns clockwise on screen.
    pub fn new_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Uniform scaling matrix.
    pub fn new_scaling_uniform(s: f64) -> Self {
        Self::new_custom(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    #[inline]
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }

    /// Apply the matrix to every point of `points` relative to `pivot`,
    /// converting each result back to integers with `to_int`.
    pub fn apply_about(
        &self,
        mut points: PointList,
        pivot: Point,
        to_int: impl Fn(f64, f64) -> Point,
    ) -> PointList {
        for p in &mut points {
            let mut x = (p.x - pivot.x) as f64;
            let mut y = (p.y - pivot.y) as f64;
            self.transform(&mut x, &mut y);
            let q = to_int(x, y);
            *p = Point::new(q.x + pivot.x, q.y + pivot.y);
        }
        points
    }
}

// ============================================================================
// Point-list operations
// ============================================================================

/// Shift every point by `(dx, dy)`. Exact in integers.
pub fn translate(mut points: PointList, dx: i32, dy: i32) -> PointList {
    for p in &mut points {
        p.x += dx;
        p.y += dy;
    }
    points
}

/// Rotate every point clockwise by `degrees` around `(cx, cy)`, rounding
/// the rotated offsets to the nearest integer.
pub fn rotate(points: PointList, cx: i32, cy: i32, degrees: f64) -> PointList {
    TransAffine::new_rotation(deg2rad(degrees)).apply_about(
        points,
        Point::new(cx, cy),
        Point::from_f64_round,
    )
}

/// Scale every point by `factor` around `(cx, cy)`, truncating the scaled
/// offsets toward zero.
pub fn scale(points: PointList, cx: i32, cy: i32, factor: f64) -> PointList {
    TransAffine::new_scaling_uniform(factor).apply_about(
        points,
        Point::new(cx, cy),
        Point::from_f64_trunc,
    )
}

// ============================================================================
// Tests
// ============================================================================
